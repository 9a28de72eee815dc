//! Example: print a collaboration graph as Graphviz DOT (or text with `--text`).
//!
//! Run: `cargo run -p baton-examples --example graph_dot | dot -Tpng -o graph.png`

use std::sync::Arc;

use baton::{
    build_collaboration_graph, generate_dot, generate_text, AgentNode, CollaborationConfig,
    MockLlm, MockToolSource,
};

fn main() -> Result<(), baton::CompilationError> {
    let names = ["researcher", "chart_generator"];
    let agents = names
        .iter()
        .map(|name| AgentNode::new(*name, Arc::new(MockLlm::always("FINAL ANSWER"))))
        .collect();
    let graph = build_collaboration_graph(
        agents,
        Arc::new(MockToolSource::new()),
        &CollaborationConfig::default(),
    )?;

    if std::env::args().any(|a| a == "--text") {
        print!("{}", generate_text(&graph));
    } else {
        print!("{}", generate_dot(&graph));
    }
    Ok(())
}

//! Graph visualization utilities.
//!
//! Exports a compiled graph to Graphviz DOT or a plain text listing, for debugging
//! routing tables. Output is sorted by node id so it is stable between runs.

use std::fmt::Write;

use super::{CompiledStateGraph, NextEntry};
use super::{END, START};

fn sorted_pairs(map: &std::collections::HashMap<String, String>) -> Vec<(&String, &String)> {
    let mut pairs: Vec<_> = map.iter().collect();
    pairs.sort();
    pairs
}

/// Generate Graphviz DOT format representation of the graph.
///
/// Fixed edges are solid, conditional edges carry their routing label, and return
/// edges are drawn dashed back to the node that dispatched.
pub fn generate_dot(graph: &CompiledStateGraph) -> String {
    let mut dot = String::from("digraph {\n");
    dot.push_str("  rankdir=LR;\n");
    dot.push_str("  node [shape=box];\n\n");

    let _ = writeln!(
        dot,
        "  \"{}\" [label=\"START\", style=bold, fillcolor=lightgreen];",
        START
    );
    let _ = writeln!(
        dot,
        "  \"{}\" [label=\"END\", style=bold, fillcolor=lightcoral];",
        END
    );
    for node_id in graph.node_ids() {
        let _ = writeln!(dot, "  \"{}\";", node_id);
    }
    dot.push('\n');

    let _ = writeln!(dot, "  \"{}\" -> \"{}\";", START, graph.entry());
    for node_id in graph.node_ids() {
        match graph.next_map.get(node_id) {
            Some(NextEntry::Fixed(to)) => {
                let _ = writeln!(dot, "  \"{}\" -> \"{}\";", node_id, to);
            }
            Some(NextEntry::Conditional(router)) => match &router.path_map {
                Some(map) => {
                    for (label, to) in sorted_pairs(map) {
                        let _ = writeln!(
                            dot,
                            "  \"{}\" -> \"{}\" [label=\"{}\"];",
                            node_id, to, label
                        );
                    }
                }
                None => {
                    let _ = writeln!(dot, "  // \"{}\": labels are node ids", node_id);
                }
            },
            Some(NextEntry::ReturnToDispatcher) => {
                for dispatcher in dispatchers_of(graph, node_id) {
                    let _ = writeln!(
                        dot,
                        "  \"{}\" -> \"{}\" [style=dashed];",
                        node_id, dispatcher
                    );
                }
            }
            None => {}
        }
    }

    dot.push_str("}\n");
    dot
}

/// Nodes with an edge into `target`; a return edge can go back to any of them.
fn dispatchers_of<'a>(graph: &'a CompiledStateGraph, target: &str) -> Vec<&'a str> {
    graph
        .node_ids()
        .into_iter()
        .filter(|id| match graph.next_map.get(*id) {
            Some(NextEntry::Fixed(to)) => to == target,
            Some(NextEntry::Conditional(router)) => router
                .path_map
                .as_ref()
                .map(|m| m.values().any(|to| to == target))
                .unwrap_or(false),
            _ => false,
        })
        .collect()
}

/// Generate a simple text representation of the graph structure.
pub fn generate_text(graph: &CompiledStateGraph) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Graph Structure:");
    let _ = writeln!(text, "Nodes: {}", graph.nodes.len());
    let _ = writeln!(text, "Entry: {} -> {}", START, graph.entry());

    let _ = writeln!(text, "\nEdges:");
    for node_id in graph.node_ids() {
        match graph.next_map.get(node_id) {
            Some(NextEntry::Fixed(to)) => {
                let _ = writeln!(text, "  {} -> {}", node_id, to);
            }
            Some(NextEntry::Conditional(router)) => {
                let _ = writeln!(text, "  {} -> (conditional)", node_id);
                if let Some(map) = &router.path_map {
                    for (label, to) in sorted_pairs(map) {
                        let _ = writeln!(text, "    {} => {}", label, to);
                    }
                }
            }
            Some(NextEntry::ReturnToDispatcher) => {
                let _ = writeln!(text, "  {} -> (return to dispatcher)", node_id);
            }
            None => {}
        }
    }

    text
}

//! Malformed graphs are rejected by `compile`, before any run.

use std::collections::HashMap;
use std::sync::Arc;

use baton::{
    AgentNode, CollaborationRouter, CompilationError, MockLlm, StateGraph, ToolNode, END,
};

use crate::common::tools;

fn agent(name: &str) -> Arc<AgentNode> {
    Arc::new(AgentNode::new(name, Arc::new(MockLlm::always("FINAL ANSWER"))))
}

fn map(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

/// **Scenario**: A fixed edge to an unregistered node fails to compile.
#[test]
fn edge_to_unregistered_node() {
    let mut graph = StateGraph::new();
    graph
        .add_node("researcher", agent("researcher"))
        .set_entry_point("researcher")
        .add_edge("researcher", "chart_generator");
    match graph.compile() {
        Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "chart_generator"),
        other => panic!("expected NodeNotFound, got {:?}", other.map(|_| ())),
    }
}

/// **Scenario**: A path map pointing at an unregistered node fails to compile.
#[test]
fn path_map_to_unregistered_node() {
    let mut graph = StateGraph::new();
    graph
        .add_node("researcher", agent("researcher"))
        .set_entry_point("researcher");
    graph.add_conditional_edges(
        "researcher",
        CollaborationRouter::default().into_fn(),
        map(&[("continue", "chart_generator"), (END, END)]),
    );
    assert!(matches!(
        graph.compile(),
        Err(CompilationError::InvalidConditionalPathMap(_))
    ));
}

/// **Scenario**: The tool node cannot be the entry: it has nobody to return to.
#[test]
fn tool_node_as_entry() {
    let mut graph = StateGraph::new();
    graph
        .add_node("call_tool", Arc::new(ToolNode::new(tools())))
        .set_entry_point("call_tool")
        .add_return_edge("call_tool");
    assert!(matches!(
        graph.compile(),
        Err(CompilationError::EntryReturnsToDispatcher(_))
    ));
}

/// **Scenario**: A reachable node without an outgoing edge fails to compile.
#[test]
fn reachable_node_without_edge() {
    let mut graph = StateGraph::new();
    graph
        .add_node("researcher", agent("researcher"))
        .add_node("call_tool", Arc::new(ToolNode::new(tools())))
        .set_entry_point("researcher");
    graph.add_conditional_edges(
        "researcher",
        CollaborationRouter::default().into_fn(),
        map(&[("call_tool", "call_tool"), (END, END)]),
    );
    assert!(matches!(
        graph.compile(),
        Err(CompilationError::MissingOutgoingEdge(ref id)) if id == "call_tool"
    ));
}

/// **Scenario**: Two edge definitions for one node fail to compile.
#[test]
fn node_with_two_edge_definitions() {
    let mut graph = StateGraph::new();
    graph
        .add_node("researcher", agent("researcher"))
        .set_entry_point("researcher")
        .add_edge("researcher", END);
    graph.add_conditional_edges(
        "researcher",
        CollaborationRouter::default().into_fn(),
        map(&[(END, END)]),
    );
    assert!(matches!(
        graph.compile(),
        Err(CompilationError::NodeHasMultipleEdges(_))
    ));
}

#[test]
fn missing_entry() {
    let mut graph = StateGraph::new();
    graph
        .add_node("researcher", agent("researcher"))
        .add_edge("researcher", END);
    assert!(matches!(graph.compile(), Err(CompilationError::MissingStart)));
}

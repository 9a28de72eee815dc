//! Graph compilation error.
//!
//! Returned by `StateGraph::compile` when the node registry or the edge table is
//! malformed. Every check runs at build time, before any invoke.

use thiserror::Error;

/// Error when compiling a state graph (unknown node, missing entry, dangling edge, ...).
#[derive(Debug, Error)]
pub enum CompilationError {
    /// A node id in an edge was not registered via `add_node` (and is not START/END).
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// The same node id was registered twice.
    #[error("duplicate node: {0}")]
    DuplicateNode(String),

    /// No entry node was designated (no edge from START).
    #[error("graph must have exactly one edge from START")]
    MissingStart,

    /// More than one edge from START.
    #[error("graph has multiple entry nodes: {0:?}")]
    MultipleEntries(Vec<String>),

    /// No reachable edge leads to END.
    #[error("graph has no path to END")]
    MissingEnd,

    /// A node has more than one outgoing edge definition (edge, conditional or return).
    #[error("node has more than one outgoing edge definition: {0}")]
    NodeHasMultipleEdges(String),

    /// A node reachable from the entry has no outgoing edge definition.
    #[error("node reachable from entry has no outgoing edge: {0}")]
    MissingOutgoingEdge(String),

    /// A value in a conditional path_map is not a valid node id or END.
    #[error("conditional path_map invalid target: {0}")]
    InvalidConditionalPathMap(String),

    /// The entry node returns to its dispatcher, but nothing dispatches to the entry.
    #[error("entry node cannot return to a dispatcher: {0}")]
    EntryReturnsToDispatcher(String),
}

//! Graph node trait: one unit of work in a StateGraph.
//!
//! Receives the shared state by reference and returns a [`NodeUpdate`]; the run loop
//! merges it and then consults the edge table to pick the next node. Routing is never
//! decided by the node itself.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::state::{NodeUpdate, SharedState};

/// One step in a graph: state in, partial update out.
///
/// **Interaction**: Implemented by [`AgentNode`](crate::AgentNode) and
/// [`ToolNode`](crate::ToolNode); registered with `StateGraph::add_node` and run by
/// `CompiledStateGraph::invoke`.
#[async_trait]
pub trait Node: Send + Sync {
    /// Node id (e.g. `"researcher"`, `"call_tool"`).
    fn id(&self) -> &str;

    /// Runs one visit of this node. The state is read-only here; the returned update
    /// is merged by the caller.
    async fn run(&self, state: &SharedState) -> Result<NodeUpdate, AgentError>;
}

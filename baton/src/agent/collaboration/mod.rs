//! Multi-agent collaboration: agents that share one history and one tool node.
//!
//! Each agent replies through its LLM; a [`CollaborationRouter`] then sends control to
//! the tool node (action requests), to END (terminal marker) or to the next agent. The
//! tool node runs the requests and hands control back to the agent that asked.
//! [`build_collaboration_graph`] wires all of this.

mod agent_node;
mod builder;
mod prompt;
mod router;
mod tool_node;

pub use agent_node::AgentNode;
pub use builder::{build_collaboration_graph, CollaborationConfig};
pub use prompt::collaboration_system_prompt;
pub use router::{
    CollaborationRouter, RouteDecision, DEFAULT_TERMINAL_MARKER, ROUTE_CALL_TOOL, ROUTE_CONTINUE,
};
pub use tool_node::{ToolNode, DEFAULT_TOOL_ERROR_TEMPLATE};

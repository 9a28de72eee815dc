//! Wires collaborating agents and a shared tool node into a graph.

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, END};
use crate::tool_source::ToolSource;

use super::agent_node::AgentNode;
use super::router::{CollaborationRouter, DEFAULT_TERMINAL_MARKER, ROUTE_CALL_TOOL, ROUTE_CONTINUE};
use super::tool_node::ToolNode;

/// Settings for [`build_collaboration_graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaborationConfig {
    /// Text that ends the run when it appears in an agent's message.
    pub terminal_marker: String,
    /// Node id of the shared tool node.
    pub tool_node_id: String,
}

impl Default for CollaborationConfig {
    fn default() -> Self {
        Self {
            terminal_marker: DEFAULT_TERMINAL_MARKER.to_string(),
            tool_node_id: ROUTE_CALL_TOOL.to_string(),
        }
    }
}

impl From<&env_config::GraphSettings> for CollaborationConfig {
    fn from(settings: &env_config::GraphSettings) -> Self {
        Self {
            terminal_marker: settings.terminal_marker.clone(),
            tool_node_id: settings.tool_node_id.clone(),
        }
    }
}

/// Builds the collaboration graph.
///
/// Agents form a ring in the given order: `continue` goes to the next agent (the last
/// one wraps to the first), `call_tool` goes to the shared tool node, and the END label
/// ends the run. The tool node returns to whichever agent dispatched to it. The first
/// agent is the entry.
///
/// Every agent gets `config.terminal_marker` in its prompt so prompt and router agree.
///
/// # Errors
///
/// `CompilationError::MissingStart` for an empty agent list; otherwise whatever
/// `StateGraph::compile` reports (e.g. `DuplicateNode` when an agent is named like the
/// tool node).
pub fn build_collaboration_graph(
    agents: Vec<AgentNode>,
    tools: Arc<dyn ToolSource>,
    config: &CollaborationConfig,
) -> Result<CompiledStateGraph, CompilationError> {
    let names: Vec<String> = agents.iter().map(|a| a.name().to_string()).collect();
    let entry = names.first().cloned().ok_or(CompilationError::MissingStart)?;

    let mut graph = StateGraph::new();
    for agent in agents {
        let name = agent.name().to_string();
        let agent = agent.with_terminal_marker(config.terminal_marker.clone());
        graph.add_node(name, Arc::new(agent));
    }
    graph
        .add_node(
            config.tool_node_id.clone(),
            Arc::new(ToolNode::with_id(config.tool_node_id.clone(), tools)),
        )
        .set_entry_point(entry)
        .add_return_edge(config.tool_node_id.clone());

    for (i, name) in names.iter().enumerate() {
        let next = &names[(i + 1) % names.len()];
        let path_map: HashMap<String, String> = [
            (ROUTE_CONTINUE.to_string(), next.clone()),
            (ROUTE_CALL_TOOL.to_string(), config.tool_node_id.clone()),
            (END.to_string(), END.to_string()),
        ]
        .into_iter()
        .collect();
        graph.add_conditional_edges(
            name.clone(),
            CollaborationRouter::new(config.terminal_marker.clone()).into_fn(),
            Some(path_map),
        );
    }

    tracing::debug!(agents = ?names, tool_node = %config.tool_node_id, "collaboration graph wired");
    graph.compile()
}

//! Agent node: one collaborating agent backed by an LLM.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::AgentError;
use crate::graph::Node;
use crate::llm::LlmClient;
use crate::message::{Message, Origin};
use crate::state::{NodeUpdate, SharedState};
use crate::tool_source::ToolSpec;

use super::prompt::collaboration_system_prompt;
use super::router::DEFAULT_TERMINAL_MARKER;

/// A named agent: sends its system prompt plus the shared history to its LLM and
/// appends the reply, attributed to itself.
///
/// The reply keeps its origin only when the LLM returned a tool result message;
/// otherwise it is re-attributed to `Agent(name)`. The update always names this agent
/// as sender.
///
/// **Interaction**: Implements `Node`; wired by `build_collaboration_graph` with a
/// `CollaborationRouter` on its outgoing edge.
pub struct AgentNode {
    name: String,
    llm: Arc<dyn LlmClient>,
    tools: Vec<ToolSpec>,
    system_message: String,
    terminal_marker: String,
}

impl AgentNode {
    pub fn new(name: impl Into<String>, llm: Arc<dyn LlmClient>) -> Self {
        Self {
            name: name.into(),
            llm,
            tools: Vec::new(),
            system_message: String::new(),
            terminal_marker: DEFAULT_TERMINAL_MARKER.to_string(),
        }
    }

    /// Tools this agent may request (builder). They are listed in the system prompt
    /// and handed to the LLM; the calls themselves run in the shared tool node.
    pub fn with_tools(mut self, tools: Vec<ToolSpec>) -> Self {
        self.tools = tools;
        self
    }

    /// Role-specific instruction appended to the shared prompt (builder).
    pub fn with_system_message(mut self, system_message: impl Into<String>) -> Self {
        self.system_message = system_message.into();
        self
    }

    /// Marker named in the prompt (builder). Keep it equal to the router's marker.
    pub fn with_terminal_marker(mut self, marker: impl Into<String>) -> Self {
        self.terminal_marker = marker.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tools(&self) -> &[ToolSpec] {
        &self.tools
    }

    /// Full system prompt sent in front of the history.
    pub fn system_prompt(&self) -> String {
        let names: Vec<&str> = self.tools.iter().map(|t| t.name.as_str()).collect();
        collaboration_system_prompt(&names, &self.system_message, &self.terminal_marker)
    }
}

#[async_trait]
impl Node for AgentNode {
    fn id(&self) -> &str {
        &self.name
    }

    async fn run(&self, state: &SharedState) -> Result<NodeUpdate, AgentError> {
        state.require_last_message()?;

        let mut request = Vec::with_capacity(state.len() + 1);
        request.push(Message::system(self.system_prompt()));
        request.extend_from_slice(state.history());

        let response = self.llm.invoke(&request, &self.tools).await?;
        if let Some(usage) = &response.usage {
            debug!(
                agent = %self.name,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "llm usage"
            );
        }

        let message = if response.message.origin().is_tool() {
            response.message
        } else {
            response.message.attributed_to(Origin::agent(&self.name))
        };
        debug!(
            agent = %self.name,
            action_requests = message.action_requests().len(),
            "agent replied"
        );
        Ok(NodeUpdate::new(vec![message]).with_sender(&self.name))
    }
}

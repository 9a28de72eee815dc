//! LLM client abstraction for collaborating agents.
//!
//! `AgentNode` depends on a callable that, given the conversation and the tools the
//! agent may use, returns the next message (optionally carrying action requests).
//! This module defines the trait and a scripted mock.

mod mock;

pub use mock::{MockLlm, RecordedCall};

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;
use crate::tool_source::ToolSpec;

/// Token usage for one LLM call (prompt + completion).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LlmUsage {
    /// Tokens in the prompt (input).
    pub prompt_tokens: u32,
    /// Tokens in the completion (output).
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion).
    pub total_tokens: u32,
}

/// Response from an LLM completion.
///
/// **Interaction**: Returned by `LlmClient::invoke()`; `AgentNode` attributes
/// `message` to itself (unless it is a tool result) and appends it to the history.
#[derive(Clone, Debug)]
pub struct LlmResponse {
    /// The produced message; action requests on it are routed to the tool node.
    pub message: Message,
    /// Token usage for this call, when the backend reports it.
    pub usage: Option<LlmUsage>,
}

impl LlmResponse {
    /// Response without usage information.
    pub fn new(message: Message) -> Self {
        Self {
            message,
            usage: None,
        }
    }
}

/// LLM client: given messages and callable tools, returns one message.
///
/// Implementations own their credentials and transport; the graph never reads
/// configuration on their behalf.
///
/// **Interaction**: Used by `AgentNode`.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one turn. `messages` starts with the agent's system prompt, followed by
    /// the shared history.
    async fn invoke(&self, messages: &[Message], tools: &[ToolSpec])
        -> Result<LlmResponse, AgentError>;
}

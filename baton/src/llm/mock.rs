//! Mock LLM for tests and examples.
//!
//! Replays a script of messages, one per call, repeating the last entry once the
//! script runs out. Every request is recorded so tests can check what an agent sent.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::{ActionRequest, Message};
use crate::tool_source::ToolSpec;

/// One recorded `invoke` call.
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub messages: Vec<Message>,
    pub tool_names: Vec<String>,
}

/// Mock LLM: scripted replies, or a fixed failure.
///
/// **Interaction**: Implements `LlmClient`; used by `AgentNode` in tests and the
/// collaboration demo.
pub struct MockLlm {
    script: Vec<Message>,
    failure: Option<String>,
    call_count: AtomicUsize,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockLlm {
    /// Creates a mock that replies with `script[0]`, `script[1]`, ... and then keeps
    /// repeating the last message. An empty script replies with empty content.
    pub fn new(script: Vec<Message>) -> Self {
        Self {
            script,
            failure: None,
            call_count: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock that always replies with `content` and no action requests.
    pub fn always(content: impl Into<String>) -> Self {
        Self::new(vec![Message::agent("mock", content)])
    }

    /// Creates a mock whose every call fails with `AgentError::ExecutionFailed`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new(Vec::new())
        }
    }

    /// Appends a reply carrying one action request (builder).
    pub fn then_call(mut self, name: &str, arguments: &str, id: &str) -> Self {
        self.script.push(
            Message::agent("mock", "")
                .with_action_requests(vec![ActionRequest::new(name, arguments).with_id(id)]),
        );
        self
    }

    /// Appends a plain reply (builder).
    pub fn then_say(mut self, content: impl Into<String>) -> Self {
        self.script.push(Message::agent("mock", content));
        self
    }

    /// Number of `invoke` calls so far.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Requests received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(
        &self,
        messages: &[Message],
        tools: &[ToolSpec],
    ) -> Result<LlmResponse, AgentError> {
        let n = self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCall {
                messages: messages.to_vec(),
                tool_names: tools.iter().map(|t| t.name.clone()).collect(),
            });

        if let Some(reason) = &self.failure {
            return Err(AgentError::ExecutionFailed(reason.clone()));
        }
        let message = match self.script.len() {
            0 => Message::agent("mock", ""),
            len => self.script[n.min(len - 1)].clone(),
        };
        Ok(LlmResponse::new(message))
    }
}

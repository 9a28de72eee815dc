//! Shared state threaded through every step of a run, and the update nodes return.

use serde::{Deserialize, Serialize};

use crate::error::AgentError;
use crate::message::Message;

/// Partial update returned by every node.
///
/// Agent and tool nodes return the same shape: messages to append plus an optional
/// sender. Tool nodes leave `sender` as `None` so the attribution of the last agent
/// turn survives their step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeUpdate {
    pub messages: Vec<Message>,
    pub sender: Option<String>,
}

impl NodeUpdate {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            sender: None,
        }
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }
}

/// Conversation history plus the name of the last agent that spoke.
///
/// `history` is append-only: the only mutation path is [`merge`](Self::merge), which
/// never removes or reorders entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedState {
    history: Vec<Message>,
    last_sender: Option<String>,
}

impl SharedState {
    /// Creates a state seeded with `history` (typically one user message).
    pub fn new(history: Vec<Message>) -> Self {
        Self {
            history,
            last_sender: None,
        }
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn last_sender(&self) -> Option<&str> {
        self.last_sender.as_deref()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.history.last()
    }

    /// Most recent message, or `InvalidState` when the history is empty.
    ///
    /// Routers and nodes use this instead of defaulting on an empty history.
    pub fn require_last_message(&self) -> Result<&Message, AgentError> {
        self.history
            .last()
            .ok_or_else(|| AgentError::InvalidState("history is empty".to_string()))
    }

    /// Appends the update's messages in order; sets `last_sender` when the update names one.
    pub fn merge(&mut self, update: NodeUpdate) {
        self.history.extend(update.messages);
        if let Some(sender) = update.sender.filter(|s| !s.is_empty()) {
            self.last_sender = Some(sender);
        }
    }

    /// Consumes the state and returns the history.
    pub fn into_history(self) -> Vec<Message> {
        self.history
    }
}

impl From<Vec<Message>> for SharedState {
    fn from(history: Vec<Message>) -> Self {
        Self::new(history)
    }
}

//! Message types for the shared conversation history.
//!
//! A [`Message`] is immutable once built: fields are private and only readable
//! through accessors. Builder methods take `self` by value, so they can only be
//! applied before the message is handed to [`SharedState`](crate::SharedState).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who produced a message.
///
/// Textual form (used in logs and serde): `system`, `user`, `agent:<name>`, `tool:<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Origin {
    /// System prompt; never stored in history by the shipped nodes.
    System,
    /// Caller input (seed message).
    User,
    /// Reply of the agent node with the given name.
    Agent(String),
    /// Result of the tool (capability) with the given name.
    Tool(String),
}

impl Origin {
    pub fn agent(name: impl Into<String>) -> Self {
        Self::Agent(name.into())
    }

    pub fn tool(name: impl Into<String>) -> Self {
        Self::Tool(name.into())
    }

    /// True for tool results; agent nodes pass such messages through unchanged.
    pub fn is_tool(&self) -> bool {
        matches!(self, Self::Tool(_))
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::User => f.write_str("user"),
            Self::Agent(name) => write!(f, "agent:{}", name),
            Self::Tool(name) => write!(f, "tool:{}", name),
        }
    }
}

impl From<Origin> for String {
    fn from(origin: Origin) -> Self {
        origin.to_string()
    }
}

impl TryFrom<String> for Origin {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "system" => return Ok(Self::System),
            "user" => return Ok(Self::User),
            _ => {}
        }
        match s.split_once(':') {
            Some(("agent", name)) if !name.is_empty() => Ok(Self::Agent(name.to_string())),
            Some(("tool", name)) if !name.is_empty() => Ok(Self::Tool(name.to_string())),
            _ => Err(format!("unknown message origin: {}", s)),
        }
    }
}

/// A structured request, embedded in a message, to invoke an external capability.
///
/// `arguments` is the raw JSON text as produced by the reasoning collaborator; the
/// tool node parses it right before the call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Optional correlation id, copied to the result message's `call_id`.
    pub id: Option<String>,
    /// Name of the capability in the tool registry.
    pub name: String,
    /// Arguments as a JSON string.
    pub arguments: String,
}

impl ActionRequest {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// One entry of the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    origin: Origin,
    content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    action_requests: Vec<ActionRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    call_id: Option<String>,
}

impl Message {
    pub fn new(origin: Origin, content: impl Into<String>) -> Self {
        Self {
            origin,
            content: content.into(),
            action_requests: Vec::new(),
            call_id: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Origin::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Origin::User, content)
    }

    pub fn agent(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(Origin::agent(name), content)
    }

    pub fn tool(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(Origin::tool(name), content)
    }

    /// Attaches action requests (builder).
    pub fn with_action_requests(mut self, requests: Vec<ActionRequest>) -> Self {
        self.action_requests = requests;
        self
    }

    /// Sets the id of the action request this message answers (builder).
    pub fn with_call_id(mut self, call_id: Option<String>) -> Self {
        self.call_id = call_id;
        self
    }

    /// Returns a copy attributed to `origin`; content and requests are kept.
    pub fn attributed_to(self, origin: Origin) -> Self {
        Self { origin, ..self }
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn action_requests(&self) -> &[ActionRequest] {
        &self.action_requests
    }

    pub fn call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }

    pub fn has_action_requests(&self) -> bool {
        !self.action_requests.is_empty()
    }
}

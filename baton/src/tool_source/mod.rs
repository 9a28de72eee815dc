//! Tool source abstraction: list tools and call a tool.
//!
//! Agents and the shared tool node depend on `ToolSource` instead of a concrete
//! registry. Implementations: [`ToolRegistry`](crate::ToolRegistry) (named `Tool`s)
//! and [`MockToolSource`] (tests).

mod mock;

pub use mock::MockToolSource;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Tool specification, aligned with MCP `tools/list` result item.
///
/// **Interaction**: Returned by `ToolSource::list_tools()`; handed to the LLM by
/// `AgentNode` and named in the collaboration system prompt.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolSpec {
    /// Tool name; action requests refer to it.
    pub name: String,
    /// Human-readable description for the LLM.
    pub description: Option<String>,
    /// JSON Schema for arguments.
    pub input_schema: Value,
}

impl ToolSpec {
    /// Spec with a description and an empty-object schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            input_schema: serde_json::json!({ "type": "object" }),
        }
    }

    /// Replaces the argument schema (builder).
    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = schema;
        self
    }
}

/// Result of a single tool call.
///
/// **Interaction**: Returned by `ToolSource::call_tool()`; `ToolNode` copies `text`
/// into the tool result message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCallContent {
    /// Result text.
    pub text: String,
}

impl ToolCallContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Errors from listing or calling tools.
///
/// **Interaction**: Returned by `ToolSource::list_tools()` and `call_tool()`;
/// `ToolNode` turns them into in-band error messages instead of failing the run.
#[derive(Debug, Error)]
pub enum ToolSourceError {
    #[error("tool not found: {0}")]
    NotFound(String),
    #[error("invalid arguments: {0}")]
    InvalidInput(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Tool source: list tools and call a tool.
///
/// **Interaction**: Used by `AgentNode` (list_tools, through the specs handed to it)
/// and `ToolNode` (call_tool).
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// List available tools.
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError>;

    /// Call a tool by name with JSON arguments.
    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError>;
}

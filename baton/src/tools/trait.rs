use async_trait::async_trait;

use crate::tool_source::{ToolCallContent, ToolSourceError, ToolSpec};

/// A single capability agents can request through an action request.
///
/// Each tool has a unique name, a specification (description and JSON schema) and
/// the call logic. Tools are registered with [`ToolRegistry`](crate::ToolRegistry),
/// which exposes them as a [`ToolSource`](crate::ToolSource).
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use serde_json::Value;
/// use baton::{Tool, ToolCallContent, ToolSourceError, ToolSpec};
///
/// struct Echo;
///
/// #[async_trait]
/// impl Tool for Echo {
///     fn name(&self) -> &str {
///         "echo"
///     }
///
///     fn spec(&self) -> ToolSpec {
///         ToolSpec::new("echo", "Repeats the `text` argument")
///     }
///
///     async fn call(&self, args: Value) -> Result<ToolCallContent, ToolSourceError> {
///         let text = args["text"]
///             .as_str()
///             .ok_or_else(|| ToolSourceError::InvalidInput("missing text".into()))?;
///         Ok(ToolCallContent::new(text))
///     }
/// }
/// ```
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name; must match `ToolSpec::name`.
    fn name(&self) -> &str;

    /// Specification shown to the LLM.
    fn spec(&self) -> ToolSpec;

    /// Executes the tool.
    ///
    /// Argument problems should be reported as `ToolSourceError::InvalidInput` so the
    /// requesting agent sees them and can retry.
    async fn call(&self, args: serde_json::Value) -> Result<ToolCallContent, ToolSourceError>;
}

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::tool_source::{ToolCallContent, ToolSource, ToolSourceError, ToolSpec};
use crate::tools::Tool;

/// Collection of named tools, usable wherever a [`ToolSource`] is expected.
///
/// Register tools up front, then share the registry (e.g. in an `Arc`) with the
/// agents that advertise it and the tool node that calls it. Listing is ordered by
/// name.
///
/// # Examples
///
/// ```
/// use baton::{FnTool, ToolRegistry, ToolSpec};
///
/// let mut registry = ToolRegistry::new();
/// registry.register(Box::new(FnTool::sync(ToolSpec::new("now", "Current time"), |_| {
///     Ok("12:00".to_string())
/// })));
/// assert_eq!(registry.list().len(), 1);
/// ```
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool. A tool with the same name is replaced.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_some() {
            tracing::debug!(tool = %name, "replaced registered tool");
        }
        self
    }

    /// Specs of all registered tools, ordered by name.
    pub fn list(&self) -> Vec<ToolSpec> {
        self.tools.values().map(|tool| tool.spec()).collect()
    }

    /// Registered tool names, ordered.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Calls a tool by name.
    ///
    /// # Errors
    ///
    /// `ToolSourceError::NotFound` when `name` is not registered; otherwise whatever
    /// the tool returns.
    pub async fn call(&self, name: &str, args: Value) -> Result<ToolCallContent, ToolSourceError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolSourceError::NotFound(name.to_string()))?;
        tool.call(args).await
    }
}

#[async_trait]
impl ToolSource for ToolRegistry {
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError> {
        Ok(self.list())
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError> {
        self.call(name, arguments).await
    }
}

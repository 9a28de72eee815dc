//! Mock tool source for tests: fixed specs, canned results, recorded calls.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{ToolCallContent, ToolSource, ToolSourceError, ToolSpec};

/// Mock ToolSource: each registered tool answers with a fixed text (or a fixed error).
///
/// Unknown names yield `ToolSourceError::NotFound`.
#[derive(Default)]
pub struct MockToolSource {
    specs: Vec<ToolSpec>,
    results: HashMap<String, Result<String, String>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockToolSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`, answering every call with `text` (builder).
    pub fn with_tool(mut self, name: &str, text: impl Into<String>) -> Self {
        self.specs.push(ToolSpec::new(name, format!("mock tool {}", name)));
        self.results.insert(name.to_string(), Ok(text.into()));
        self
    }

    /// Registers `name`, failing every call with a transport error (builder).
    pub fn with_failing_tool(mut self, name: &str, reason: impl Into<String>) -> Self {
        self.specs.push(ToolSpec::new(name, format!("mock tool {}", name)));
        self.results.insert(name.to_string(), Err(reason.into()));
        self
    }

    /// Calls received so far as (name, arguments), oldest first.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl ToolSource for MockToolSource {
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError> {
        Ok(self.specs.clone())
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((name.to_string(), arguments));
        match self.results.get(name) {
            Some(Ok(text)) => Ok(ToolCallContent::new(text.clone())),
            Some(Err(reason)) => Err(ToolSourceError::Transport(reason.clone())),
            None => Err(ToolSourceError::NotFound(name.to_string())),
        }
    }
}

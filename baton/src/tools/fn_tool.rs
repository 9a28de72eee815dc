//! Closure-backed tool.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::tool_source::{ToolCallContent, ToolSourceError, ToolSpec};
use crate::tools::Tool;

type BoxedToolFuture = Pin<Box<dyn Future<Output = Result<ToolCallContent, ToolSourceError>> + Send>>;
type ToolFn = Arc<dyn Fn(Value) -> BoxedToolFuture + Send + Sync>;

/// Tool built from a spec and an async closure.
///
/// ```
/// use baton::{FnTool, ToolCallContent, ToolSourceError, ToolSpec};
///
/// let tool = FnTool::new(ToolSpec::new("now", "Current time"), |_args| async {
///     Ok::<_, ToolSourceError>(ToolCallContent::new("12:00"))
/// });
/// ```
pub struct FnTool {
    spec: ToolSpec,
    func: ToolFn,
}

impl FnTool {
    pub fn new<F, Fut>(spec: ToolSpec, func: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ToolCallContent, ToolSourceError>> + Send + 'static,
    {
        Self {
            spec,
            func: Arc::new(move |args| Box::pin(func(args))),
        }
    }

    /// Synchronous variant for tools that do no I/O.
    pub fn sync<F>(spec: ToolSpec, func: F) -> Self
    where
        F: Fn(Value) -> Result<String, ToolSourceError> + Send + Sync + 'static,
    {
        Self::new(spec, move |args| {
            let result = func(args).map(ToolCallContent::new);
            async move { result }
        })
    }
}

#[async_trait]
impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.spec.name
    }

    fn spec(&self) -> ToolSpec {
        self.spec.clone()
    }

    async fn call(&self, args: Value) -> Result<ToolCallContent, ToolSourceError> {
        (self.func)(args).await
    }
}

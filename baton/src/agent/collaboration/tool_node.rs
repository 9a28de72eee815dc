//! Tool node: runs the action requests of the most recent message.
//!
//! Shared by every agent in a collaboration graph and wired with a return edge, so
//! control goes back to whichever agent asked. Tool failures never abort the run:
//! they are written into the result message so the requesting agent can react.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::error::AgentError;
use crate::graph::Node;
use crate::message::{ActionRequest, Message};
use crate::state::{NodeUpdate, SharedState};
use crate::tool_source::{ToolSource, ToolSourceError};

use super::router::ROUTE_CALL_TOOL;

/// Default error message template for tool errors.
pub const DEFAULT_TOOL_ERROR_TEMPLATE: &str = "Error: {error}\n Please fix your mistakes.";

/// Truncates a string for logging, appending "..." if longer than max_len.
fn truncate_for_log(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!("{}...", s.chars().take(max_len).collect::<String>())
    }
}

/// Parses action request arguments. Blank means no arguments; anything that is not
/// JSON is reported back to the agent as invalid input.
fn parse_tool_arguments(arguments: &str) -> Result<Value, ToolSourceError> {
    if arguments.trim().is_empty() {
        return Ok(serde_json::json!({}));
    }
    let raw: Value = serde_json::from_str(arguments)
        .map_err(|e| ToolSourceError::InvalidInput(format!("arguments are not valid JSON: {}", e)))?;
    // Some models double-encode: a JSON string holding the JSON object.
    match raw.as_str() {
        Some(inner) => Ok(serde_json::from_str(inner).unwrap_or(raw)),
        None => Ok(raw),
    }
}

/// Node that executes every action request of the last message through a `ToolSource`.
///
/// Emits exactly one tool result message per request, in request order, each with
/// origin `Tool(request name)` and the request id as `call_id`. The update has no
/// sender, so attribution stays with the dispatching agent.
pub struct ToolNode {
    id: String,
    tools: Arc<dyn ToolSource>,
    error_template: String,
}

impl ToolNode {
    /// Tool node registered under the default id `"call_tool"`.
    pub fn new(tools: Arc<dyn ToolSource>) -> Self {
        Self::with_id(ROUTE_CALL_TOOL, tools)
    }

    pub fn with_id(id: impl Into<String>, tools: Arc<dyn ToolSource>) -> Self {
        Self {
            id: id.into(),
            tools,
            error_template: DEFAULT_TOOL_ERROR_TEMPLATE.to_string(),
        }
    }

    /// Replaces the error template; `{error}` is substituted (builder).
    pub fn with_error_template(mut self, template: impl Into<String>) -> Self {
        self.error_template = template.into();
        self
    }

    async fn execute(&self, request: &ActionRequest) -> Message {
        let outcome = match parse_tool_arguments(&request.arguments) {
            Ok(args) => {
                debug!(tool = %request.name, args = ?args, "Calling tool");
                self.tools.call_tool(&request.name, args).await
            }
            Err(e) => Err(e),
        };
        let text = match outcome {
            Ok(content) => {
                trace!(
                    tool = %request.name,
                    result_len = content.text.len(),
                    result_preview = %truncate_for_log(&content.text, 200),
                    "Tool returned"
                );
                content.text
            }
            Err(e) => {
                warn!(tool = %request.name, error = %e, "Tool call failed");
                self.error_template.replace("{error}", &e.to_string())
            }
        };
        Message::tool(&request.name, text).with_call_id(request.id.clone())
    }
}

#[async_trait]
impl Node for ToolNode {
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&self, state: &SharedState) -> Result<NodeUpdate, AgentError> {
        let last = state.require_last_message()?;
        if !last.has_action_requests() {
            debug!(node = %self.id, "no action requests on last message");
        }
        let mut results = Vec::with_capacity(last.action_requests().len());
        for request in last.action_requests() {
            results.push(self.execute(request).await);
        }
        Ok(NodeUpdate::new(results))
    }
}

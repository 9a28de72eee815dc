//! Routing policy for collaborating agents.
//!
//! Looks only at the most recent message: action requests go to the shared tool
//! node, a message containing the terminal marker ends the run, anything else hands
//! control to the next agent.

use std::sync::Arc;

use crate::error::AgentError;
use crate::graph::{ConditionalRouterFn, END};
use crate::state::SharedState;

/// Default marker an agent puts in front of its final deliverable.
pub const DEFAULT_TERMINAL_MARKER: &str = "FINAL ANSWER";

/// Label for "the last message carries action requests".
pub const ROUTE_CALL_TOOL: &str = "call_tool";

/// Label for "hand over to the next agent".
pub const ROUTE_CONTINUE: &str = "continue";

/// Result of [`CollaborationRouter::decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Route to the tool node.
    CallTool,
    /// Stop the run.
    End,
    /// Route to the next agent.
    Continue,
}

impl RouteDecision {
    /// Label used in conditional-edge path maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CallTool => ROUTE_CALL_TOOL,
            Self::End => END,
            Self::Continue => ROUTE_CONTINUE,
        }
    }
}

/// Terminal-marker router.
///
/// The marker check is an exact, case-sensitive substring match on the message
/// content, so a message that merely quotes the marker also ends the run.
#[derive(Debug, Clone)]
pub struct CollaborationRouter {
    terminal_marker: String,
}

impl Default for CollaborationRouter {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINAL_MARKER)
    }
}

impl CollaborationRouter {
    pub fn new(terminal_marker: impl Into<String>) -> Self {
        Self {
            terminal_marker: terminal_marker.into(),
        }
    }

    pub fn terminal_marker(&self) -> &str {
        &self.terminal_marker
    }

    /// Decides where control goes after the most recent message.
    ///
    /// Action requests win over the marker. Empty history is `AgentError::InvalidState`.
    pub fn decide(&self, state: &SharedState) -> Result<RouteDecision, AgentError> {
        let last = state.require_last_message()?;
        let decision = if last.has_action_requests() {
            RouteDecision::CallTool
        } else if !self.terminal_marker.is_empty() && last.content().contains(&self.terminal_marker)
        {
            RouteDecision::End
        } else {
            RouteDecision::Continue
        };
        Ok(decision)
    }

    /// Wraps the router for `StateGraph::add_conditional_edges`.
    pub fn into_fn(self) -> ConditionalRouterFn {
        Arc::new(move |state: &SharedState| -> Result<String, AgentError> {
            Ok(self.decide(state)?.as_str().to_string())
        })
    }
}

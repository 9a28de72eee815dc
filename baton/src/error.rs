//! Node-level error types.
//!
//! Returned by [`Node::run`](crate::graph::Node::run), routers and collaborators.
//! The run loop wraps these into [`RunError`](crate::graph::RunError) together with
//! the id of the node that failed.

use thiserror::Error;

/// Error raised while a node or router handles the shared state.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. LLM call failed).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// The node or router observed an empty or malformed history.
    ///
    /// Never defaulted away: the run aborts immediately.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

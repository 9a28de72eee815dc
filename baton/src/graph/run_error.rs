//! Run outcome errors returned by `CompiledStateGraph::invoke`.

use thiserror::Error;

use crate::error::AgentError;
use crate::state::SharedState;

/// Why a run stopped without reaching END.
#[derive(Debug, Error)]
pub enum RunError {
    /// The step ceiling was reached while the graph was still running.
    ///
    /// Carries the state as it was after the last executed step.
    #[error("step limit of {limit} reached without termination")]
    StepLimitExceeded {
        limit: usize,
        state: Box<SharedState>,
    },

    /// A node or router observed an empty or malformed history.
    #[error("invalid state at node {node}: {reason}")]
    InvalidState { node: String, reason: String },

    /// A node failed (e.g. its reasoning collaborator returned an error).
    #[error("node {node} failed: {source}")]
    NodeFailed {
        node: String,
        #[source]
        source: AgentError,
    },

    /// A router produced a label that maps to no node and is not END.
    #[error("no route for label {label:?} after node {node}")]
    UnknownRoute { node: String, label: String },

    /// The task driving a streamed run stopped abnormally (a node panicked).
    #[error("run aborted: {reason}")]
    Aborted { reason: String },
}

impl RunError {
    /// Wraps an error raised while running or routing `node`.
    pub(crate) fn from_agent(node: &str, error: AgentError) -> Self {
        match error {
            AgentError::InvalidState(reason) => Self::InvalidState {
                node: node.to_string(),
                reason,
            },
            other => Self::NodeFailed {
                node: node.to_string(),
                source: other,
            },
        }
    }

    /// Partial state for outcomes that keep one (currently only `StepLimitExceeded`).
    pub fn partial_state(&self) -> Option<&SharedState> {
        match self {
            Self::StepLimitExceeded { state, .. } => Some(state.as_ref()),
            _ => None,
        }
    }

    /// Node id the error is attributed to, when there is one.
    pub fn node(&self) -> Option<&str> {
        match self {
            Self::StepLimitExceeded { .. } | Self::Aborted { .. } => None,
            Self::InvalidState { node, .. }
            | Self::NodeFailed { node, .. }
            | Self::UnknownRoute { node, .. } => Some(node),
        }
    }
}

//! Logging utilities for graph execution.
//!
//! Structured `tracing` events for run start/end, node execution and state updates.

use super::run_error::RunError;

/// Log node execution start.
pub fn log_node_start(node_id: &str, step: usize) {
    tracing::debug!(node_id = node_id, step, "Starting node execution");
}

/// Log node execution completion together with the chosen successor.
pub fn log_node_complete(node_id: &str, next: &str) {
    tracing::debug!(node_id = node_id, next = next, "Node execution complete");
}

/// Log state update after a node's output was merged.
pub fn log_state_update(node_id: &str, appended: usize, history_len: usize) {
    tracing::debug!(node_id = node_id, appended, history_len, "State updated");
}

/// Log graph execution start.
pub fn log_graph_start(entry: &str, step_limit: usize) {
    tracing::info!(entry = entry, step_limit, "Starting graph execution");
}

/// Log graph execution completion.
pub fn log_graph_complete(steps: usize) {
    tracing::info!(steps, "Graph execution complete");
}

/// Log graph execution error.
pub fn log_graph_error(error: &RunError) {
    match error {
        RunError::StepLimitExceeded { limit, .. } => {
            tracing::warn!(limit, "Graph execution aborted: step limit reached")
        }
        other => tracing::error!(error = %other, "Graph execution error"),
    }
}

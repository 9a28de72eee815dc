//! Streaming types for graph runs.
//!
//! `CompiledStateGraph::stream` runs the step loop on a spawned task and forwards
//! [`StreamEvent`]s for the selected [`StreamMode`]s. The last event of every stream is
//! [`StreamEvent::Finished`] with the run outcome, whatever the modes.

use std::collections::HashSet;

use tokio::sync::mpsc;

use crate::graph::RunError;
use crate::state::{NodeUpdate, SharedState};

/// Which intermediate events a stream emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamMode {
    /// Full state after each step.
    Values,
    /// Each node's update, as returned by the node.
    Updates,
    /// Node start notifications.
    Tasks,
}

/// One event of a streamed run.
#[derive(Debug)]
pub enum StreamEvent {
    /// A node is about to run.
    TaskStart { node_id: String },
    /// A node returned this update (already merged into the state).
    Updates { node_id: String, update: NodeUpdate },
    /// State after a step.
    Values(SharedState),
    /// Run outcome; always the last event.
    Finished(Result<SharedState, RunError>),
}

/// Sender side used by the run loop; drops events for modes that are not enabled.
#[derive(Clone)]
pub(crate) struct StreamSink {
    tx: mpsc::Sender<StreamEvent>,
    modes: HashSet<StreamMode>,
}

impl StreamSink {
    pub(crate) fn new(tx: mpsc::Sender<StreamEvent>, modes: HashSet<StreamMode>) -> Self {
        Self { tx, modes }
    }

    pub(crate) async fn task_start(&self, node_id: &str) {
        if self.modes.contains(&StreamMode::Tasks) {
            let _ = self
                .tx
                .send(StreamEvent::TaskStart {
                    node_id: node_id.to_string(),
                })
                .await;
        }
    }

    pub(crate) fn wants_updates(&self) -> bool {
        self.modes.contains(&StreamMode::Updates)
    }

    pub(crate) async fn updates(&self, node_id: &str, update: NodeUpdate) {
        let _ = self
            .tx
            .send(StreamEvent::Updates {
                node_id: node_id.to_string(),
                update,
            })
            .await;
    }

    pub(crate) async fn values(&self, state: &SharedState) {
        if self.modes.contains(&StreamMode::Values) {
            let _ = self.tx.send(StreamEvent::Values(state.clone())).await;
        }
    }

    pub(crate) async fn finished(&self, outcome: Result<SharedState, RunError>) {
        let _ = self.tx.send(StreamEvent::Finished(outcome)).await;
    }
}

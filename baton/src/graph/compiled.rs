//! Compiled state graph: immutable, supports invoke and stream.
//!
//! Built by `StateGraph::compile`. Holds the node registry, the entry node and the
//! resolved edge table. Runs nodes strictly one at a time; the shared state is owned
//! by the run loop and only changed by merging node updates.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::message::Message;
use crate::state::SharedState;
use crate::stream::{StreamEvent, StreamMode, StreamSink};

use super::dispatch::DispatchStack;
use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_state_update,
};
use super::run_config::RunConfig;
use super::run_error::RunError;
use super::state_graph::END;
use super::{NextEntry, Node};

/// Compiled graph: immutable structure, supports `invoke` and `stream`.
///
/// Cloning is cheap (nodes are shared through `Arc`), and separate runs never share
/// state, so one compiled graph can serve many concurrent runs.
#[derive(Clone)]
pub struct CompiledStateGraph {
    pub(super) nodes: HashMap<String, Arc<dyn Node>>,
    /// First node to run (from START).
    pub(super) entry: String,
    /// Map from node id to how to get the next node.
    pub(super) next_map: HashMap<String, NextEntry>,
}

impl std::fmt::Debug for CompiledStateGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut nodes: Vec<&String> = self.nodes.keys().collect();
        nodes.sort();
        f.debug_struct("CompiledStateGraph")
            .field("entry", &self.entry)
            .field("nodes", &nodes)
            .field("next_map", &self.next_map)
            .finish()
    }
}

impl CompiledStateGraph {
    /// Entry node id.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Registered node ids, sorted.
    pub fn node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Resolves the successor of `current` from the post-merge state.
    fn resolve_next(
        &self,
        current: &str,
        state: &SharedState,
        dispatchers: &mut DispatchStack,
    ) -> Result<String, RunError> {
        match self.next_map.get(current) {
            Some(NextEntry::Fixed(to)) => Ok(to.clone()),
            Some(NextEntry::Conditional(router)) => {
                let label = router
                    .route(state)
                    .map_err(|e| RunError::from_agent(current, e))?;
                let target = match router.target_for(&label) {
                    Some(target) if target == END || self.nodes.contains_key(&target) => target,
                    _ => {
                        return Err(RunError::UnknownRoute {
                            node: current.to_string(),
                            label,
                        })
                    }
                };
                tracing::debug!(from = %current, label = %label, to = %target, "conditional routing");
                Ok(target)
            }
            Some(NextEntry::ReturnToDispatcher) => {
                dispatchers
                    .pop(current)
                    .ok_or_else(|| RunError::InvalidState {
                        node: current.to_string(),
                        reason: "no dispatcher recorded for return edge".to_string(),
                    })
            }
            None => Err(RunError::InvalidState {
                node: current.to_string(),
                reason: "node has no outgoing edge".to_string(),
            }),
        }
    }

    /// Shared run loop used by `invoke` and `stream`: steps through nodes until END or
    /// the step ceiling.
    async fn run_loop_inner(
        &self,
        mut state: SharedState,
        config: &RunConfig,
        sink: Option<&StreamSink>,
    ) -> Result<SharedState, RunError> {
        log_graph_start(&self.entry, config.step_limit);
        if state.is_empty() {
            let err = RunError::InvalidState {
                node: self.entry.clone(),
                reason: "seed history is empty".to_string(),
            };
            log_graph_error(&err);
            return Err(err);
        }

        let mut current = self.entry.clone();
        let mut dispatchers = DispatchStack::default();
        let mut steps = 0usize;

        loop {
            if steps >= config.step_limit {
                let err = RunError::StepLimitExceeded {
                    limit: config.step_limit,
                    state: Box::new(state),
                };
                log_graph_error(&err);
                return Err(err);
            }

            let node = match self.nodes.get(&current) {
                Some(node) => node.clone(),
                None => {
                    let err = RunError::InvalidState {
                        node: current.clone(),
                        reason: "node missing from compiled graph".to_string(),
                    };
                    log_graph_error(&err);
                    return Err(err);
                }
            };

            log_node_start(&current, steps);
            if let Some(sink) = sink {
                sink.task_start(&current).await;
            }

            let update = match node.run(&state).await {
                Ok(update) => update,
                Err(e) => {
                    let err = RunError::from_agent(&current, e);
                    log_graph_error(&err);
                    return Err(err);
                }
            };
            steps += 1;

            let appended = update.messages.len();
            if let Some(sink) = sink.filter(|s| s.wants_updates()) {
                sink.updates(&current, update.clone()).await;
            }
            state.merge(update);
            log_state_update(&current, appended, state.len());
            if let Some(sink) = sink {
                sink.values(&state).await;
            }

            let next = match self.resolve_next(&current, &state, &mut dispatchers) {
                Ok(next) => next,
                Err(err) => {
                    log_graph_error(&err);
                    return Err(err);
                }
            };
            log_node_complete(&current, &next);

            if next == END {
                log_graph_complete(steps);
                return Ok(state);
            }
            if matches!(self.next_map.get(&next), Some(NextEntry::ReturnToDispatcher)) {
                dispatchers.push(&current, &next);
            }
            current = next;
        }
    }

    /// Runs the graph from the entry node with `messages` as the seed history.
    ///
    /// Returns the final state when a route reaches END. Pass `None` for the default
    /// [`RunConfig`]. An empty seed fails fast with `RunError::InvalidState`.
    pub async fn invoke(
        &self,
        messages: Vec<Message>,
        config: Option<RunConfig>,
    ) -> Result<SharedState, RunError> {
        self.invoke_state(SharedState::new(messages), config).await
    }

    /// Like [`invoke`](Self::invoke) but starts from a prepared state.
    pub async fn invoke_state(
        &self,
        state: SharedState,
        config: Option<RunConfig>,
    ) -> Result<SharedState, RunError> {
        let config = config.unwrap_or_default();
        self.run_loop_inner(state, &config, None).await
    }

    /// Streams graph execution, emitting events via channel-backed Stream.
    ///
    /// The run happens on a spawned tokio task; dropping the stream does not cancel it
    /// before the current node returns. If a node panics the stream still ends with
    /// `Finished(Err(RunError::Aborted { .. }))`.
    pub fn stream(
        &self,
        messages: Vec<Message>,
        config: Option<RunConfig>,
        stream_mode: impl Into<HashSet<StreamMode>>,
    ) -> ReceiverStream<StreamEvent> {
        let (tx, rx) = mpsc::channel(128);
        let graph = self.clone();
        let sink = StreamSink::new(tx, stream_mode.into());
        let config = config.unwrap_or_default();

        tokio::spawn(async move {
            let run_sink = sink.clone();
            let run = tokio::spawn(async move {
                graph
                    .run_loop_inner(SharedState::new(messages), &config, Some(&run_sink))
                    .await
            });
            let outcome = match run.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    let err = RunError::Aborted {
                        reason: e.to_string(),
                    };
                    log_graph_error(&err);
                    Err(err)
                }
            };
            sink.finished(outcome).await;
        });

        ReceiverStream::new(rx)
    }
}

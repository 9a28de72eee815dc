//! Edge table entries: fixed edges, conditional edges and return-to-dispatcher edges.
//!
//! A conditional edge holds a routing function that maps the current state to a label;
//! the label is looked up in an optional per-edge path map to get the next node id.
//! The indirection lets one router label (e.g. `"call_tool"`) point at different
//! concrete nodes from different call sites.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AgentError;
use crate::state::SharedState;

/// Router function: reads the state and returns a routing label.
///
/// Must be pure. Returns `AgentError::InvalidState` rather than guessing when the
/// state cannot be routed (e.g. empty history).
pub type ConditionalRouterFn =
    Arc<dyn Fn(&SharedState) -> Result<String, AgentError> + Send + Sync>;

/// Conditional edge definition: routing function plus optional path map.
///
/// - When `path_map` is `None`, the label is used directly as the next node id (or END).
/// - When `path_map` is `Some(map)`, the map is the whole routing table: the next node
///   id is `map[label]`, and a label missing from it does not route anywhere.
#[derive(Clone)]
pub struct ConditionalRouter {
    pub(super) path: ConditionalRouterFn,
    pub(super) path_map: Option<HashMap<String, String>>,
}

impl ConditionalRouter {
    pub fn new(path: ConditionalRouterFn, path_map: Option<HashMap<String, String>>) -> Self {
        Self { path, path_map }
    }

    /// Applies the routing function to the state.
    pub fn route(&self, state: &SharedState) -> Result<String, AgentError> {
        (self.path)(state)
    }

    /// Maps a label through the path map. `None` when the map has no entry for it.
    pub fn target_for(&self, label: &str) -> Option<String> {
        match &self.path_map {
            Some(map) => map.get(label).cloned(),
            None => Some(label.to_string()),
        }
    }
}

/// How to determine the next node after a given node runs.
#[derive(Clone)]
pub enum NextEntry {
    /// Single fixed successor (or END).
    Fixed(String),
    /// Successor decided by the router from the post-merge state.
    Conditional(ConditionalRouter),
    /// Control goes back to the node that handed off to this one.
    ReturnToDispatcher,
}

impl std::fmt::Debug for NextEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(to) => write!(f, "Fixed({})", to),
            Self::Conditional(r) => write!(f, "Conditional(path_map={:?})", r.path_map),
            Self::ReturnToDispatcher => write!(f, "ReturnToDispatcher"),
        }
    }
}

//! State graph: nodes + explicit edges, conditional edges and return edges.
//!
//! Add nodes with `add_node`, set the entry with `set_entry_point` (or
//! `add_edge(START, id)`), wire successors with `add_edge(from, to)`,
//! `add_conditional_edges(source, router, path_map)` or `add_return_edge(node)`, then
//! `compile` to get a `CompiledStateGraph`.
//!
//! # Edge definitions
//!
//! Each node reachable from the entry must have exactly one outgoing edge definition:
//!
//! - **fixed**: `add_edge(from, to)`, `to` may be `END`;
//! - **conditional**: a router maps the post-merge state to a label, looked up in the
//!   optional path map;
//! - **return**: control goes back to whichever node transitioned into this one (used
//!   for a shared tool node called by several agents).
//!
//! All checks run in `compile`, so a malformed graph never reaches `invoke`.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledStateGraph;
use crate::graph::conditional::{ConditionalRouter, ConditionalRouterFn, NextEntry};
use crate::graph::node::Node;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit, and the terminal routing label.
pub const END: &str = "__end__";

/// Builder for an execution graph over [`SharedState`](crate::SharedState).
///
/// **Interaction**: Accepts `Arc<dyn Node>`; produces `CompiledStateGraph`.
#[derive(Default)]
pub struct StateGraph {
    nodes: HashMap<String, Arc<dyn Node>>,
    /// Ids passed to `add_node` more than once; reported by `compile`.
    duplicate_nodes: Vec<String>,
    /// Fixed edges (from_id, to_id), including the START edge.
    edges: Vec<(String, String)>,
    conditional_edges: Vec<(String, ConditionalRouter)>,
    return_edges: Vec<String>,
}

impl StateGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node under `id`. Registering the same id twice makes `compile` fail.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node>) -> &mut Self {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            self.duplicate_nodes.push(id);
        } else {
            self.nodes.insert(id, node);
        }
        self
    }

    /// Adds a fixed edge from `from_id` to `to_id`. Use `START`/`END` for entry/exit.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Designates the entry node; same as `add_edge(START, id)`.
    pub fn set_entry_point(&mut self, id: impl Into<String>) -> &mut Self {
        self.add_edge(START, id)
    }

    /// Adds conditional edges from `source`: next node is determined by `path(state)`.
    ///
    /// - When `path_map` is `None`, the label is the next node id (or END).
    /// - When `path_map` is `Some(map)`, the next node is `map[label]`; an unmapped
    ///   label fails the run with `RunError::UnknownRoute`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// graph.add_conditional_edges(
    ///     "researcher",
    ///     router.into_fn(),
    ///     Some([
    ///         ("continue".into(), "chart".into()),
    ///         ("call_tool".into(), "call_tool".into()),
    ///         (END.into(), END.into()),
    ///     ].into_iter().collect()),
    /// );
    /// ```
    pub fn add_conditional_edges(
        &mut self,
        source: impl Into<String>,
        path: ConditionalRouterFn,
        path_map: Option<HashMap<String, String>>,
    ) -> &mut Self {
        self.conditional_edges
            .push((source.into(), ConditionalRouter::new(path, path_map)));
        self
    }

    /// After `node` runs, control returns to the node that transitioned into it.
    pub fn add_return_edge(&mut self, node: impl Into<String>) -> &mut Self {
        self.return_edges.push(node.into());
        self
    }

    /// Validates the registry and edge table and builds the executable graph.
    pub fn compile(self) -> Result<CompiledStateGraph, CompilationError> {
        if let Some(id) = self.duplicate_nodes.first() {
            return Err(CompilationError::DuplicateNode(id.clone()));
        }

        let entries: Vec<String> = self
            .edges
            .iter()
            .filter(|(f, _)| f == START)
            .map(|(_, t)| t.clone())
            .collect();
        if entries.len() > 1 {
            return Err(CompilationError::MultipleEntries(entries));
        }
        let entry = entries
            .into_iter()
            .next()
            .ok_or(CompilationError::MissingStart)?;
        if !self.nodes.contains_key(&entry) {
            return Err(CompilationError::NodeNotFound(entry));
        }

        let mut next_map: HashMap<String, NextEntry> = HashMap::new();
        let mut insert = |source: &str, entry: NextEntry| -> Result<(), CompilationError> {
            if next_map.insert(source.to_string(), entry).is_some() {
                return Err(CompilationError::NodeHasMultipleEdges(source.to_string()));
            }
            Ok(())
        };

        for (from, to) in self.edges.iter().filter(|(f, _)| f != START) {
            if !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
            insert(from, NextEntry::Fixed(to.clone()))?;
        }
        for (source, router) in &self.conditional_edges {
            if !self.nodes.contains_key(source) {
                return Err(CompilationError::NodeNotFound(source.clone()));
            }
            if let Some(ref path_map) = router.path_map {
                for target in path_map.values() {
                    if target != END && !self.nodes.contains_key(target) {
                        return Err(CompilationError::InvalidConditionalPathMap(target.clone()));
                    }
                }
            }
            insert(source, NextEntry::Conditional(router.clone()))?;
        }
        for node in &self.return_edges {
            if !self.nodes.contains_key(node) {
                return Err(CompilationError::NodeNotFound(node.clone()));
            }
            insert(node, NextEntry::ReturnToDispatcher)?;
        }

        if matches!(next_map.get(&entry), Some(NextEntry::ReturnToDispatcher)) {
            return Err(CompilationError::EntryReturnsToDispatcher(entry));
        }

        let (reachable, reaches_end) = reachable_from(&entry, &self.nodes, &next_map);
        let mut missing: Vec<&String> = reachable
            .iter()
            .filter(|id| !next_map.contains_key(*id))
            .collect();
        missing.sort();
        if let Some(id) = missing.first() {
            return Err(CompilationError::MissingOutgoingEdge((*id).clone()));
        }
        if !reaches_end {
            return Err(CompilationError::MissingEnd);
        }

        Ok(CompiledStateGraph {
            nodes: self.nodes,
            entry,
            next_map,
        })
    }
}

/// Walks the edge table from `entry`. Returns the reachable node ids and whether any
/// reachable edge can lead to END.
///
/// A conditional edge without a path map may produce any label, so it makes every
/// node reachable and counts as able to end. With a path map only its targets count.
fn reachable_from(
    entry: &str,
    nodes: &HashMap<String, Arc<dyn Node>>,
    next_map: &HashMap<String, NextEntry>,
) -> (HashSet<String>, bool) {
    let mut seen: HashSet<String> = HashSet::new();
    let mut queue = VecDeque::from([entry.to_string()]);
    let mut reaches_end = false;
    seen.insert(entry.to_string());

    while let Some(id) = queue.pop_front() {
        let successors: Vec<String> = match next_map.get(&id) {
            Some(NextEntry::Fixed(to)) => vec![to.clone()],
            Some(NextEntry::Conditional(router)) => match router.path_map {
                Some(ref map) => map.values().cloned().collect(),
                None => {
                    reaches_end = true;
                    nodes.keys().cloned().collect()
                }
            },
            Some(NextEntry::ReturnToDispatcher) | None => vec![],
        };
        for next in successors {
            if next == END {
                reaches_end = true;
            } else if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    (seen, reaches_end)
}

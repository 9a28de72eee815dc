//! State types for the execution graph.
//!
//! [`SharedState`] flows through [`CompiledStateGraph`](crate::graph::CompiledStateGraph);
//! every node reads it and returns a [`NodeUpdate`] that the run loop merges back.
//!
//! # Example
//!
//! ```rust
//! use baton::{Message, NodeUpdate, SharedState};
//!
//! let mut state = SharedState::new(vec![Message::user("What is 2+2?")]);
//! state.merge(NodeUpdate::new(vec![Message::agent("math", "4")]).with_sender("math"));
//! assert_eq!(state.len(), 2);
//! assert_eq!(state.last_sender(), Some("math"));
//! ```

pub mod shared_state;

pub use shared_state::{NodeUpdate, SharedState};

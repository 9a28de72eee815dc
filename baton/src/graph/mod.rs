//! State graph: nodes, fixed/conditional/return edges, compile and run.
//!
//! `StateGraph`: add nodes and edges, compile, then invoke or stream with a seed
//! history.

mod compile_error;
mod compiled;
mod conditional;
mod dispatch;
mod logging;
mod node;
mod run_config;
mod run_error;
mod state_graph;
mod visualization;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use conditional::{ConditionalRouter, ConditionalRouterFn, NextEntry};
pub use logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_state_update,
};
pub use node::Node;
pub use run_config::{RunConfig, DEFAULT_STEP_LIMIT};
pub use run_error::RunError;
pub use state_graph::{StateGraph, END, START};
pub use visualization::{generate_dot, generate_text};

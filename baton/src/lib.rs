//! # Baton
//!
//! Multi-agent collaboration on a state graph. Several agents share one append-only
//! message history; after each turn a router hands the baton to a shared tool node,
//! to the next agent, or ends the run when an agent marks its reply as final.
//!
//! ## Design principles
//!
//! - **One shared state**: every node reads [`SharedState`] and returns a
//!   [`NodeUpdate`]; the run loop merges it. Nodes never pick their successor.
//! - **Routing in the edge table**: fixed edges, conditional edges (router label
//!   through a path map) and return edges (back to the dispatching node) are all
//!   checked by [`StateGraph::compile`] before anything runs.
//! - **Bounded runs**: a step ceiling ([`RunConfig::step_limit`]) stops agents that
//!   never agree, returning the partial history in [`RunError::StepLimitExceeded`].
//! - **Explicit collaborators**: LLMs ([`LlmClient`]) and tools ([`ToolSource`]) are
//!   passed in; the crate reads no environment variables.
//!
//! ## Main modules
//!
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`RunConfig`],
//!   [`RunError`], [`generate_dot`] / [`generate_text`].
//! - [`agent::collaboration`]: [`AgentNode`], [`ToolNode`], [`CollaborationRouter`],
//!   [`build_collaboration_graph`].
//! - [`state`] / [`message`]: [`SharedState`], [`NodeUpdate`], [`Message`], [`Origin`].
//! - [`llm`]: [`LlmClient`], [`MockLlm`].
//! - [`tool_source`] / [`tools`]: [`ToolSource`], [`ToolSpec`], [`ToolRegistry`],
//!   [`FnTool`], [`MockToolSource`].
//! - [`stream`]: [`StreamMode`], [`StreamEvent`] for [`CompiledStateGraph::stream`].
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use baton::{
//!     build_collaboration_graph, AgentNode, CollaborationConfig, Message, MockLlm,
//!     MockToolSource,
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let researcher = AgentNode::new("researcher", Arc::new(MockLlm::always("UK GDP: ...")));
//! let writer = AgentNode::new("writer", Arc::new(MockLlm::always("FINAL ANSWER: done")));
//! let graph = build_collaboration_graph(
//!     vec![researcher, writer],
//!     Arc::new(MockToolSource::new()),
//!     &CollaborationConfig::default(),
//! )
//! .unwrap();
//!
//! let state = graph.invoke(vec![Message::user("Chart the UK's GDP")], None).await.unwrap();
//! assert_eq!(state.last_sender(), Some("writer"));
//! # }
//! ```

pub mod agent;
pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod state;
pub mod stream;
pub mod tool_source;
pub mod tools;

pub use agent::collaboration::{
    build_collaboration_graph, collaboration_system_prompt, AgentNode, CollaborationConfig,
    CollaborationRouter, RouteDecision, ToolNode, DEFAULT_TERMINAL_MARKER,
    DEFAULT_TOOL_ERROR_TEMPLATE, ROUTE_CALL_TOOL, ROUTE_CONTINUE,
};
pub use error::AgentError;
pub use graph::{
    generate_dot, generate_text, CompilationError, CompiledStateGraph, ConditionalRouter,
    ConditionalRouterFn, NextEntry, Node, RunConfig, RunError, StateGraph, DEFAULT_STEP_LIMIT,
    END, START,
};
pub use llm::{LlmClient, LlmResponse, LlmUsage, MockLlm, RecordedCall};
pub use message::{ActionRequest, Message, Origin};
pub use state::{NodeUpdate, SharedState};
pub use stream::{StreamEvent, StreamMode};
pub use tool_source::{MockToolSource, ToolCallContent, ToolSource, ToolSourceError, ToolSpec};
pub use tools::{FnTool, Tool, ToolRegistry};

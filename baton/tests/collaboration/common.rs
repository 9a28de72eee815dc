//! Shared fixtures: scripted agents, a mock tool source, history helpers.

use std::sync::Arc;

use baton::{
    build_collaboration_graph, AgentNode, CollaborationConfig, CompiledStateGraph, Message,
    MockLlm, MockToolSource, SharedState, ToolSpec,
};

/// Tool source with `tavily_search` and `python_repl`.
pub fn tools() -> Arc<MockToolSource> {
    Arc::new(
        MockToolSource::new()
            .with_tool("tavily_search", "UK GDP 2019-2023: 2.8T, 2.7T, 3.1T, 3.1T, 3.3T")
            .with_tool("python_repl", "Successfully executed; chart saved to gdp.png"),
    )
}

pub fn researcher(llm: Arc<MockLlm>) -> AgentNode {
    AgentNode::new("researcher", llm)
        .with_tools(vec![ToolSpec::new("tavily_search", "Web search")])
        .with_system_message("You should provide accurate data for the chart_generator to use.")
}

pub fn chart_generator(llm: Arc<MockLlm>) -> AgentNode {
    AgentNode::new("chart_generator", llm)
        .with_tools(vec![ToolSpec::new("python_repl", "Run python code")])
        .with_system_message("Any charts you display will be visible by the user.")
}

/// researcher + chart_generator sharing `tools`, default config.
pub fn two_agent_graph(
    researcher_llm: Arc<MockLlm>,
    chart_llm: Arc<MockLlm>,
    tools: Arc<MockToolSource>,
) -> CompiledStateGraph {
    build_collaboration_graph(
        vec![researcher(researcher_llm), chart_generator(chart_llm)],
        tools,
        &CollaborationConfig::default(),
    )
    .expect("collaboration graph compiles")
}

pub fn seed() -> Vec<Message> {
    vec![Message::user(
        "Fetch the UK's GDP over the past 5 years, then draw a line graph of it.",
    )]
}

/// Origins of the history in order, e.g. `["user", "agent:researcher", "tool:python_repl"]`.
pub fn origins(state: &SharedState) -> Vec<String> {
    state
        .history()
        .iter()
        .map(|m| m.origin().to_string())
        .collect()
}

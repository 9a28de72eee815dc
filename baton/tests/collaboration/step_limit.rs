//! The step ceiling stops agents that never finish.

use std::sync::Arc;

use baton::{MockLlm, RunConfig, RunError, DEFAULT_STEP_LIMIT};

use crate::common::{origins, seed, tools, two_agent_graph};

/// **Scenario**: With a ceiling of 3 and agents that always continue, the run stops
/// after exactly 3 executions and hands back seed + 3 messages.
#[tokio::test]
async fn ceiling_of_three_returns_partial_history() {
    let researcher = Arc::new(MockLlm::always("more research needed"));
    let chart = Arc::new(MockLlm::always("need more data"));
    let graph = two_agent_graph(researcher.clone(), chart.clone(), tools());

    let err = graph
        .invoke(seed(), Some(RunConfig::with_step_limit(3)))
        .await
        .unwrap_err();

    let partial = err.partial_state().expect("step limit carries the partial state");
    assert_eq!(partial.len(), seed().len() + 3);
    assert_eq!(
        origins(partial),
        vec![
            "user",
            "agent:researcher",
            "agent:chart_generator",
            "agent:researcher"
        ]
    );
    assert!(matches!(err, RunError::StepLimitExceeded { limit: 3, .. }));
    assert_eq!(researcher.call_count() + chart.call_count(), 3);
}

/// **Scenario**: Tool node executions count as steps.
#[tokio::test]
async fn tool_steps_count_towards_the_ceiling() {
    let researcher = Arc::new(
        MockLlm::new(vec![]).then_call("tavily_search", "{}", "c1"),
    );
    let graph = two_agent_graph(researcher, Arc::new(MockLlm::always("x")), tools());

    let err = graph
        .invoke(seed(), Some(RunConfig::with_step_limit(4)))
        .await
        .unwrap_err();
    let partial = err.partial_state().unwrap();
    assert_eq!(
        origins(partial),
        vec![
            "user",
            "agent:researcher",
            "tool:tavily_search",
            "agent:researcher",
            "tool:tavily_search"
        ]
    );
}

/// **Scenario**: Default config uses the default ceiling.
#[tokio::test]
async fn default_ceiling_applies_without_config() {
    let graph = two_agent_graph(
        Arc::new(MockLlm::always("a")),
        Arc::new(MockLlm::always("b")),
        tools(),
    );
    let err = graph.invoke(seed(), None).await.unwrap_err();
    assert!(matches!(
        err,
        RunError::StepLimitExceeded { limit, ref state } if limit == DEFAULT_STEP_LIMIT
            && state.len() == 1 + DEFAULT_STEP_LIMIT
    ));
}

/// **Scenario**: Step ceiling from `[graph]` settings.
#[tokio::test]
async fn ceiling_from_graph_settings() {
    let settings = env_config::GraphSettings {
        step_limit: 2,
        ..Default::default()
    };
    let graph = two_agent_graph(
        Arc::new(MockLlm::always("a")),
        Arc::new(MockLlm::always("b")),
        tools(),
    );
    let err = graph
        .invoke(seed(), Some(RunConfig::from(&settings)))
        .await
        .unwrap_err();
    assert_eq!(err.partial_state().map(|s| s.len()), Some(3));
}

//! Control passes between agents until one emits the terminal marker.

use std::sync::Arc;

use baton::{
    build_collaboration_graph, AgentNode, CollaborationConfig, Message, MockLlm, RunError,
};

use crate::common::{origins, seed, tools, two_agent_graph};

/// **Scenario**: A plain reply from the first agent hands over to the second; the run
/// ends only when the second emits the marker, never after one visit.
#[tokio::test]
async fn first_agent_hands_over_then_second_finishes() {
    let researcher = Arc::new(MockLlm::always("UK GDP numbers are in the thread."));
    let chart = Arc::new(MockLlm::always("FINAL ANSWER: chart drawn"));
    let graph = two_agent_graph(researcher.clone(), chart.clone(), tools());

    let state = graph.invoke(seed(), None).await.unwrap();

    assert_eq!(
        origins(&state),
        vec!["user", "agent:researcher", "agent:chart_generator"]
    );
    assert_eq!(state.last_sender(), Some("chart_generator"));
    assert_eq!(researcher.call_count(), 1);
    assert_eq!(chart.call_count(), 1);
}

/// **Scenario**: Agents alternate A, B, A until A emits the marker.
#[tokio::test]
async fn agents_alternate_until_marker() {
    let researcher = Arc::new(
        MockLlm::always("here is the data")
            .then_say("FINAL ANSWER: data and chart delivered"),
    );
    let chart = Arc::new(MockLlm::always("I need the 2023 figure too"));
    let graph = two_agent_graph(researcher, chart, tools());

    let state = graph.invoke(seed(), None).await.unwrap();

    assert_eq!(
        origins(&state),
        vec![
            "user",
            "agent:researcher",
            "agent:chart_generator",
            "agent:researcher"
        ]
    );
    assert!(state.history()[3].content().starts_with("FINAL ANSWER"));
}

/// **Scenario**: The marker from the very first agent ends the run after one step.
#[tokio::test]
async fn marker_on_first_reply_ends_immediately() {
    let graph = two_agent_graph(
        Arc::new(MockLlm::always("FINAL ANSWER: nothing to do")),
        Arc::new(MockLlm::always("unreachable")),
        tools(),
    );
    let state = graph.invoke(seed(), None).await.unwrap();
    assert_eq!(origins(&state), vec!["user", "agent:researcher"]);
}

/// **Scenario**: Three agents form a ring: the last hands back to the first.
#[tokio::test]
async fn three_agents_ring_wraps_around() {
    let a = AgentNode::new("planner", Arc::new(MockLlm::always("plan").then_say("FINAL ANSWER")));
    let b = AgentNode::new("researcher", Arc::new(MockLlm::always("data")));
    let c = AgentNode::new("writer", Arc::new(MockLlm::always("draft")));
    let graph =
        build_collaboration_graph(vec![a, b, c], tools(), &CollaborationConfig::default()).unwrap();

    let state = graph.invoke(seed(), None).await.unwrap();

    assert_eq!(
        origins(&state),
        vec![
            "user",
            "agent:planner",
            "agent:researcher",
            "agent:writer",
            "agent:planner"
        ]
    );
}

/// **Scenario**: A configured marker replaces the default one.
#[tokio::test]
async fn custom_terminal_marker() {
    let config = CollaborationConfig {
        terminal_marker: "<<DONE>>".into(),
        ..CollaborationConfig::default()
    };
    let a = AgentNode::new("a", Arc::new(MockLlm::always("FINAL ANSWER is not ours")));
    let b = AgentNode::new("b", Arc::new(MockLlm::always("ok <<DONE>>")));
    let graph = build_collaboration_graph(vec![a, b], tools(), &config).unwrap();

    let state = graph.invoke(seed(), None).await.unwrap();
    assert_eq!(origins(&state), vec!["user", "agent:a", "agent:b"]);
}

/// **Scenario**: The seed history stays first and unchanged.
#[tokio::test]
async fn seed_history_is_preserved() {
    let seed_msgs = vec![
        Message::system("team rules"),
        Message::user("Fetch the UK's GDP"),
    ];
    let graph = two_agent_graph(
        Arc::new(MockLlm::always("FINAL ANSWER")),
        Arc::new(MockLlm::always("x")),
        tools(),
    );
    let state = graph.invoke(seed_msgs.clone(), None).await.unwrap();
    assert_eq!(&state.history()[..2], seed_msgs.as_slice());
}

/// **Scenario**: An LLM failure aborts the run and names the agent.
#[tokio::test]
async fn llm_failure_names_the_agent() {
    let graph = two_agent_graph(
        Arc::new(MockLlm::always("data")),
        Arc::new(MockLlm::failing("upstream 503")),
        tools(),
    );
    let err = graph.invoke(seed(), None).await.unwrap_err();
    assert!(matches!(err, RunError::NodeFailed { ref node, .. } if node == "chart_generator"));
    assert_eq!(err.node(), Some("chart_generator"));
}

/// **Scenario**: Empty seed is rejected before any agent runs.
#[tokio::test]
async fn empty_seed_is_invalid_state() {
    let researcher = Arc::new(MockLlm::always("x"));
    let graph = two_agent_graph(researcher.clone(), Arc::new(MockLlm::always("y")), tools());
    let err = graph.invoke(vec![], None).await.unwrap_err();
    assert!(matches!(err, RunError::InvalidState { .. }));
    assert_eq!(researcher.call_count(), 0);
}

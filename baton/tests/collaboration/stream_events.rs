//! Streaming a collaboration run: node starts, per-node updates, final outcome.

use std::collections::HashSet;
use std::sync::Arc;

use baton::{MockLlm, RunConfig, RunError, StreamEvent, StreamMode};
use tokio_stream::StreamExt;

use crate::common::{seed, tools, two_agent_graph};

/// **Scenario**: Task events follow the dispatch order, including the return from the
/// tool node, and the stream ends with the final state.
#[tokio::test]
async fn tasks_follow_dispatch_order() {
    let researcher = Arc::new(
        MockLlm::new(vec![])
            .then_call("tavily_search", "{}", "c1")
            .then_say("numbers attached"),
    );
    let chart = Arc::new(MockLlm::always("FINAL ANSWER: chart"));
    let graph = two_agent_graph(researcher, chart, tools());

    let events: Vec<StreamEvent> = graph
        .stream(seed(), None, HashSet::from([StreamMode::Tasks]))
        .collect()
        .await;

    let started: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            StreamEvent::TaskStart { node_id } => Some(node_id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        started,
        vec!["researcher", "call_tool", "researcher", "chart_generator"]
    );
    match events.last() {
        Some(StreamEvent::Finished(Ok(state))) => assert_eq!(state.len(), 5),
        other => panic!("expected Finished(Ok), got {:?}", other),
    }
}

/// **Scenario**: Updates carry each node's own messages; the tool node reports no sender.
#[tokio::test]
async fn updates_carry_node_output() {
    let researcher = Arc::new(
        MockLlm::new(vec![])
            .then_call("tavily_search", "{}", "c1")
            .then_say("FINAL ANSWER"),
    );
    let graph = two_agent_graph(researcher, Arc::new(MockLlm::always("x")), tools());

    let updates: Vec<(String, Option<String>, usize)> = graph
        .stream(seed(), None, HashSet::from([StreamMode::Updates]))
        .filter_map(|e| match e {
            StreamEvent::Updates { node_id, update } => {
                Some((node_id, update.sender, update.messages.len()))
            }
            _ => None,
        })
        .collect()
        .await;

    assert_eq!(
        updates,
        vec![
            ("researcher".to_string(), Some("researcher".to_string()), 1),
            ("call_tool".to_string(), None, 1),
            ("researcher".to_string(), Some("researcher".to_string()), 1),
        ]
    );
}

/// **Scenario**: A run that hits the ceiling still ends the stream with its outcome.
#[tokio::test]
async fn step_limit_is_the_last_event() {
    let graph = two_agent_graph(
        Arc::new(MockLlm::always("a")),
        Arc::new(MockLlm::always("b")),
        tools(),
    );
    let last = graph
        .stream(
            seed(),
            Some(RunConfig::with_step_limit(3)),
            HashSet::from([StreamMode::Values]),
        )
        .collect::<Vec<_>>()
        .await
        .pop();
    assert!(matches!(
        last,
        Some(StreamEvent::Finished(Err(RunError::StepLimitExceeded { limit: 3, .. })))
    ));
}

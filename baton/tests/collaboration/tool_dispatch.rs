//! Action requests go to the shared tool node and control returns to the requester.

use std::sync::Arc;

use baton::{ActionRequest, Message, MockLlm, Origin};

use crate::common::{origins, seed, tools, two_agent_graph};

/// **Scenario**: The first agent's request is executed once and control returns to it.
#[tokio::test]
async fn tool_call_returns_to_first_agent() {
    let researcher = Arc::new(
        MockLlm::new(vec![])
            .then_call("tavily_search", r#"{"query":"UK GDP 2019-2023"}"#, "call-1")
            .then_say("FINAL ANSWER: figures found"),
    );
    let tool_source = tools();
    let graph = two_agent_graph(
        researcher.clone(),
        Arc::new(MockLlm::always("unused")),
        tool_source.clone(),
    );

    let state = graph.invoke(seed(), None).await.unwrap();

    assert_eq!(
        origins(&state),
        vec![
            "user",
            "agent:researcher",
            "tool:tavily_search",
            "agent:researcher"
        ]
    );
    assert_eq!(state.history()[2].call_id(), Some("call-1"));
    assert_eq!(tool_source.calls().len(), 1);
    assert_eq!(tool_source.calls()[0].1["query"], "UK GDP 2019-2023");
    assert_eq!(researcher.call_count(), 2);
    // the second researcher call saw the tool result
    let second_request = &researcher.calls()[1].messages;
    assert_eq!(
        second_request.last().map(|m| m.origin().clone()),
        Some(Origin::tool("tavily_search"))
    );
}

/// **Scenario**: The second agent's request also returns to the second agent, not the first.
#[tokio::test]
async fn tool_call_returns_to_second_agent() {
    let chart = Arc::new(
        MockLlm::new(vec![])
            .then_call("python_repl", r#"{"code":"plt.plot(gdp)"}"#, "call-7")
            .then_say("FINAL ANSWER: chart saved"),
    );
    let graph = two_agent_graph(
        Arc::new(MockLlm::always("data: 2.8T, 2.7T, 3.1T")),
        chart,
        tools(),
    );

    let state = graph.invoke(seed(), None).await.unwrap();

    assert_eq!(
        origins(&state),
        vec![
            "user",
            "agent:researcher",
            "agent:chart_generator",
            "tool:python_repl",
            "agent:chart_generator"
        ]
    );
    // tool results do not change attribution
    assert_eq!(state.last_sender(), Some("chart_generator"));
}

/// **Scenario**: An unregistered tool yields one error message and the run goes on.
#[tokio::test]
async fn unknown_tool_is_reported_in_band() {
    let researcher = Arc::new(
        MockLlm::new(vec![])
            .then_call("web_browser", "{}", "call-x")
            .then_say("FINAL ANSWER: gave up on browsing"),
    );
    let graph = two_agent_graph(researcher, Arc::new(MockLlm::always("unused")), tools());

    let state = graph.invoke(seed(), None).await.unwrap();

    let tool_msgs: Vec<&Message> = state
        .history()
        .iter()
        .filter(|m| m.origin().is_tool())
        .collect();
    assert_eq!(tool_msgs.len(), 1);
    assert_eq!(tool_msgs[0].origin(), &Origin::tool("web_browser"));
    assert!(tool_msgs[0].content().contains("tool not found: web_browser"));
    assert!(tool_msgs[0].content().ends_with("Please fix your mistakes."));
    assert_eq!(
        origins(&state).last().map(String::as_str),
        Some("agent:researcher")
    );
}

/// **Scenario**: Several requests in one message produce results in request order.
#[tokio::test]
async fn multiple_requests_keep_order() {
    let researcher = Arc::new(MockLlm::new(vec![
        Message::agent("researcher", "").with_action_requests(vec![
            ActionRequest::new("python_repl", "{}").with_id("a"),
            ActionRequest::new("missing", "{}").with_id("b"),
            ActionRequest::new("tavily_search", "{}").with_id("c"),
        ]),
        Message::agent("researcher", "FINAL ANSWER"),
    ]));
    let graph = two_agent_graph(researcher, Arc::new(MockLlm::always("unused")), tools());

    let state = graph.invoke(seed(), None).await.unwrap();

    let ids: Vec<Option<&str>> = state.history()[2..5].iter().map(|m| m.call_id()).collect();
    assert_eq!(ids, vec![Some("a"), Some("b"), Some("c")]);
    assert_eq!(
        origins(&state)[2..5].to_vec(),
        vec!["tool:python_repl", "tool:missing", "tool:tavily_search"]
    );
    assert_eq!(state.len(), 6);
}

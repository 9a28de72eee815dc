//! Example: two agents collaborate on "fetch the UK's GDP, then chart it".
//!
//! The researcher looks the numbers up with `tavily_search`, the chart generator draws
//! them with `python_repl`; both tools run in the shared `call_tool` node, which hands
//! control back to whoever asked. LLMs are scripted with `MockLlm` so the example runs
//! offline; swap in any `LlmClient` for a live model.
//!
//! Settings come from `~/.config/baton/config.toml` (`[graph]`), `.env` is applied first.
//!
//! Run: `RUST_LOG=baton=debug cargo run -p baton-examples --example collaboration`

use std::collections::HashSet;
use std::sync::Arc;

use baton::{
    build_collaboration_graph, AgentNode, CollaborationConfig, FnTool, Message, MockLlm,
    RunConfig, StreamEvent, StreamMode, ToolRegistry, ToolSourceError, ToolSpec,
};
use tokio_stream::StreamExt;

fn tool_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry
        .register(Box::new(FnTool::sync(
            ToolSpec::new("tavily_search", "Search the web")
                .with_input_schema(serde_json::json!({
                    "type": "object",
                    "properties": { "query": { "type": "string" } },
                    "required": ["query"]
                })),
            |args| {
                let query = args["query"]
                    .as_str()
                    .ok_or_else(|| ToolSourceError::InvalidInput("query is required".into()))?;
                Ok(format!(
                    "Results for '{}': UK GDP (USD trillions) 2019: 2.85, 2020: 2.70, \
                     2021: 3.12, 2022: 3.09, 2023: 3.34",
                    query
                ))
            },
        )))
        .register(Box::new(FnTool::sync(
            ToolSpec::new("python_repl", "Execute python code; print output is returned")
                .with_input_schema(serde_json::json!({
                    "type": "object",
                    "properties": { "code": { "type": "string" } },
                    "required": ["code"]
                })),
            |args| {
                let code = args["code"]
                    .as_str()
                    .ok_or_else(|| ToolSourceError::InvalidInput("code is required".into()))?;
                Ok(format!(
                    "Successfully executed:\n```python\n{}\n```\nStdout: chart saved to uk_gdp.png",
                    code
                ))
            },
        )));
    registry
}

fn agents(registry: &ToolRegistry) -> Vec<AgentNode> {
    let spec = |name: &str| -> Vec<ToolSpec> {
        registry.list().into_iter().filter(|s| s.name == name).collect()
    };

    let researcher_llm = MockLlm::new(vec![])
        .then_call("tavily_search", r#"{"query":"UK GDP past 5 years"}"#, "call_1")
        .then_say("UK GDP (USD trillions): 2019 2.85, 2020 2.70, 2021 3.12, 2022 3.09, 2023 3.34.");
    let chart_llm = MockLlm::new(vec![])
        .then_call(
            "python_repl",
            r#"{"code":"import matplotlib.pyplot as plt\nplt.plot([2019,2020,2021,2022,2023],[2.85,2.70,3.12,3.09,3.34])\nplt.savefig('uk_gdp.png')"}"#,
            "call_2",
        )
        .then_say("FINAL ANSWER: the line chart of UK GDP 2019-2023 is saved as uk_gdp.png.");

    vec![
        AgentNode::new("researcher", Arc::new(researcher_llm))
            .with_tools(spec("tavily_search"))
            .with_system_message("You should provide accurate data for the chart_generator to use."),
        AgentNode::new("chart_generator", Arc::new(chart_llm))
            .with_tools(spec("python_repl"))
            .with_system_message("Any charts you display will be visible by the user."),
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_config::load_and_apply(env_config::DEFAULT_APP_NAME, None)?;
    env_config::init_tracing("baton=info");
    let settings = env_config::load_graph_settings(env_config::DEFAULT_APP_NAME)?;

    let registry = tool_registry();
    let agents = agents(&registry);
    let graph = build_collaboration_graph(
        agents,
        Arc::new(registry),
        &CollaborationConfig::from(&settings),
    )?;

    let input = std::env::args().nth(1).unwrap_or_else(|| {
        "Fetch the UK's GDP over the past 5 years, then draw a line graph of it. \
         Once you code it up, finish."
            .to_string()
    });

    let mut stream = graph.stream(
        vec![Message::user(input)],
        Some(RunConfig::from(&settings)),
        HashSet::from([StreamMode::Updates]),
    );
    while let Some(event) = stream.next().await {
        match event {
            StreamEvent::Updates { node_id, update } => {
                for message in &update.messages {
                    println!("[{}] {}: {}", node_id, message.origin(), message.content());
                    for request in message.action_requests() {
                        println!("    -> {}({})", request.name, request.arguments);
                    }
                }
                println!("----");
            }
            StreamEvent::Finished(Ok(state)) => {
                println!("done after {} messages", state.len());
            }
            StreamEvent::Finished(Err(e)) => {
                tracing::warn!(error = %e, "run did not finish");
                if let Some(state) = e.partial_state() {
                    println!("partial history: {} messages", state.len());
                }
                return Err(e.into());
            }
            _ => {}
        }
    }
    Ok(())
}

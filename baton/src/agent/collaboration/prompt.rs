//! System prompt shared by collaborating agents.

/// Builds the instruction each agent receives before the shared history.
///
/// Tells the agent that it works with other assistants, which tools it can request,
/// and that a final deliverable must be prefixed with `terminal_marker` so the team
/// stops. `system_message` (the agent's own role) is appended last.
pub fn collaboration_system_prompt(
    tool_names: &[&str],
    system_message: &str,
    terminal_marker: &str,
) -> String {
    let tools = if tool_names.is_empty() {
        "(none)".to_string()
    } else {
        tool_names.join(", ")
    };
    let mut prompt = format!(
        "You are a helpful AI assistant, collaborating with other assistants. \
         Use the provided tools to progress towards answering the question. \
         If you are unable to fully answer, that's OK, another assistant with different tools \
         will help where you left off. Execute what you can to make progress. \
         If you or any of the other assistants have the final answer or deliverable, \
         prefix your response with {marker} so the team knows to stop. \
         You have access to the following tools: {tools}.",
        marker = terminal_marker,
        tools = tools,
    );
    if !system_message.is_empty() {
        prompt.push('\n');
        prompt.push_str(system_message);
    }
    prompt
}

//! Span helpers for agent, tool and protocol operations.

use tracing::Span;

/// Create a span for one agent turn
///
/// # Example
/// ```
/// use finder_telemetry::agent_run_span;
/// let span = agent_run_span("Restaurant Agent", "task-123");
/// let _enter = span.enter();
/// ```
pub fn agent_run_span(agent_name: &str, task_id: &str) -> Span {
    tracing::info_span!("agent.run", agent.name = agent_name, task.id = task_id)
}

/// Create a span for tool execution
///
/// # Example
/// ```
/// use finder_telemetry::tool_execute_span;
/// let span = tool_execute_span("get_restaurants");
/// let _enter = span.enter();
/// ```
pub fn tool_execute_span(tool_name: &str) -> Span {
    tracing::info_span!("tool.execute", tool.name = tool_name)
}

/// Create a span for an inbound A2A JSON-RPC call
pub fn a2a_request_span(method: &str) -> Span {
    tracing::info_span!("a2a.request", rpc.method = method)
}

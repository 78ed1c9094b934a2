use crate::ServerConfig;
use crate::config::DEFAULT_TASK_CAPACITY;
use crate::a2a::{
    AgentCard, Executor, JsonRpcError, JsonRpcRequest, JsonRpcResponse, MessageSendParams, Task,
    TaskQueryParams, TaskState, TaskStatus, UpdateEvent, build_agent_card, jsonrpc,
};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Json},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};
use tokio::sync::RwLock;
use tracing::Instrument;

#[derive(Default)]
struct StoredTasks {
    tasks: HashMap<String, Task>,
    /// Insertion order, oldest first.
    order: VecDeque<String>,
}

/// In-memory task storage holding at most `capacity` tasks. Storing past
/// capacity evicts the oldest task.
pub struct TaskStore {
    inner: RwLock<StoredTasks>,
    capacity: usize,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TASK_CAPACITY)
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: RwLock::default(), capacity: capacity.max(1) }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn store(&self, task: Task) {
        let mut inner = self.inner.write().await;
        let id = task.id.clone();
        if inner.tasks.insert(id.clone(), task).is_none() {
            inner.order.push_back(id);
        }

        while inner.tasks.len() > self.capacity {
            let Some(oldest) = inner.order.pop_front() else { break };
            inner.tasks.remove(&oldest);
            tracing::debug!(task.id = %oldest, "evicted task from store");
        }
    }

    pub async fn get(&self, task_id: &str) -> Option<Task> {
        self.inner.read().await.tasks.get(task_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.tasks.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.tasks.is_empty()
    }
}

/// Controller for A2A protocol endpoints
#[derive(Clone)]
pub struct A2aController {
    config: ServerConfig,
    agent_card: AgentCard,
    task_store: Arc<TaskStore>,
}

impl A2aController {
    pub fn new(config: ServerConfig, base_url: &str) -> Self {
        let agent_card = build_agent_card(config.agent.as_ref(), base_url.trim_end_matches('/'));
        let task_store = Arc::new(TaskStore::with_capacity(config.task_capacity));
        Self { config, agent_card, task_store }
    }

    pub fn agent_card(&self) -> &AgentCard {
        &self.agent_card
    }

    pub fn task_store(&self) -> &Arc<TaskStore> {
        &self.task_store
    }
}

/// GET /.well-known/agent-card.json - Serve the agent card
pub async fn get_agent_card(State(controller): State<A2aController>) -> impl IntoResponse {
    Json(controller.agent_card.clone())
}

/// POST / - JSON-RPC endpoint for A2A protocol
pub async fn handle_jsonrpc(
    State(controller): State<A2aController>,
    payload: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> Json<JsonRpcResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return Json(JsonRpcResponse::error(
                None,
                JsonRpcError::parse_error(rejection.body_text()),
            ));
        }
    };

    if request.jsonrpc != "2.0" {
        return Json(JsonRpcResponse::error(
            request.id,
            JsonRpcError::invalid_request("Invalid JSON-RPC version"),
        ));
    }

    let span = finder_telemetry::a2a_request_span(&request.method);
    let response = async move {
        match request.method.as_str() {
            jsonrpc::methods::MESSAGE_SEND => {
                handle_message_send(&controller, request.params, request.id).await
            }
            jsonrpc::methods::TASKS_GET => {
                handle_tasks_get(&controller, request.params, request.id).await
            }
            jsonrpc::methods::TASKS_CANCEL => {
                handle_tasks_cancel(&controller, request.params, request.id).await
            }
            jsonrpc::methods::MESSAGE_STREAM | jsonrpc::methods::TASKS_RESUBSCRIBE => {
                JsonRpcResponse::error(
                    request.id,
                    JsonRpcError::unsupported_operation(&request.method),
                )
            }
            _ => JsonRpcResponse::error(
                request.id,
                JsonRpcError::method_not_found(&request.method),
            ),
        }
    }
    .instrument(span)
    .await;

    Json(response)
}

fn parse_params<T: DeserializeOwned>(
    params: Option<Value>,
) -> std::result::Result<T, JsonRpcError> {
    match params {
        Some(p) => {
            serde_json::from_value(p).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
        }
        None => Err(JsonRpcError::invalid_params("Missing params")),
    }
}

fn to_result(controller: &A2aController, id: Option<Value>, task: &Task) -> JsonRpcResponse {
    match serde_json::to_value(task) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(
            id,
            JsonRpcError::internal_error_sanitized(
                &e,
                controller.config.security.expose_error_details,
            ),
        ),
    }
}

/// Keep only the most recent `length` history entries.
fn trim_history(mut task: Task, length: Option<u32>) -> Task {
    if let (Some(history), Some(length)) = (task.history.as_mut(), length) {
        let keep = length as usize;
        if history.len() > keep {
            history.drain(..history.len() - keep);
        }
    }
    task
}

async fn handle_message_send(
    controller: &A2aController,
    params: Option<Value>,
    id: Option<Value>,
) -> JsonRpcResponse {
    let params: MessageSendParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return JsonRpcResponse::error(id, e),
    };

    let context_id =
        params.message.context_id.clone().unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let task_id =
        params.message.task_id.clone().unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let executor = Executor::new(controller.config.agent.clone());

    let events = match executor.execute(&context_id, &task_id, &params.message).await {
        Ok(events) => events,
        Err(e) => return JsonRpcResponse::error(id, JsonRpcError::invalid_params(e.to_string())),
    };

    let mut message = params.message;
    message.task_id = Some(task_id.clone());
    message.context_id = Some(context_id.clone());

    // Build task from events
    let mut task = Task {
        id: task_id,
        context_id: Some(context_id),
        status: TaskStatus::new(TaskState::Submitted),
        artifacts: Some(vec![]),
        history: Some(vec![message]),
    };

    for event in events {
        match event {
            UpdateEvent::TaskStatusUpdate(status) => {
                task.status = status.status;
            }
            UpdateEvent::TaskArtifactUpdate(artifact) => {
                if let Some(ref mut artifacts) = task.artifacts {
                    artifacts.push(artifact.artifact);
                }
            }
        }
    }

    tracing::info!(task.id = %task.id, state = ?task.status.state, "task finished");

    // Store task for later retrieval
    controller.task_store.store(task.clone()).await;

    let history_length = params.config.and_then(|c| c.history_length);
    to_result(controller, id, &trim_history(task, history_length))
}

async fn handle_tasks_get(
    controller: &A2aController,
    params: Option<Value>,
    id: Option<Value>,
) -> JsonRpcResponse {
    let params: TaskQueryParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return JsonRpcResponse::error(id, e),
    };

    match controller.task_store.get(&params.id).await {
        Some(task) => to_result(controller, id, &trim_history(task, params.history_length)),
        None => JsonRpcResponse::error(id, JsonRpcError::task_not_found(&params.id)),
    }
}

async fn handle_tasks_cancel(
    controller: &A2aController,
    params: Option<Value>,
    id: Option<Value>,
) -> JsonRpcResponse {
    let params: TaskQueryParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return JsonRpcResponse::error(id, e),
    };

    // Every task reaches a terminal state inside message/send.
    match controller.task_store.get(&params.id).await {
        Some(task) if task.status.state.is_terminal() => {
            JsonRpcResponse::error(id, JsonRpcError::task_not_cancelable(&params.id))
        }
        Some(mut task) => {
            task.status = TaskStatus::new(TaskState::Canceled);
            controller.task_store.store(task.clone()).await;
            to_result(controller, id, &task)
        }
        None => JsonRpcResponse::error(id, JsonRpcError::task_not_found(&params.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            context_id: None,
            status: TaskStatus::new(TaskState::Completed),
            artifacts: None,
            history: None,
        }
    }

    #[tokio::test]
    async fn test_store_evicts_oldest_past_capacity() {
        let store = TaskStore::with_capacity(2);
        store.store(task("a")).await;
        store.store(task("b")).await;
        store.store(task("c")).await;

        assert_eq!(store.len().await, 2);
        assert!(store.get("a").await.is_none());
        assert!(store.get("b").await.is_some());
        assert!(store.get("c").await.is_some());
    }

    #[tokio::test]
    async fn test_restoring_a_task_keeps_its_slot() {
        let store = TaskStore::with_capacity(2);
        store.store(task("a")).await;
        store.store(task("b")).await;

        let mut canceled = task("a");
        canceled.status = TaskStatus::new(TaskState::Canceled);
        store.store(canceled).await;
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get("a").await.unwrap().status.state, TaskState::Canceled);

        store.store(task("c")).await;
        assert!(store.get("a").await.is_none());
        assert!(store.get("b").await.is_some());
    }

    #[test]
    fn test_zero_capacity_keeps_latest_task() {
        assert_eq!(TaskStore::with_capacity(0).capacity(), 1);
        assert_eq!(TaskStore::new().capacity(), DEFAULT_TASK_CAPACITY);
        assert!(TaskStore::default().capacity() > 1);
    }
}

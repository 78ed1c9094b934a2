use crate::a2a::{
    Message, Part, Role, TaskArtifactUpdateEvent, TaskState, TaskStatus, TaskStatusUpdateEvent,
    UpdateEvent,
    events::{content_to_artifact, message_to_content},
};
use finder_core::{Agent, Result};
use std::sync::Arc;
use tracing::Instrument;

/// Name given to the artifact that carries the agent's reply.
pub const RESULT_ARTIFACT_NAME: &str = "result";

pub struct Executor {
    agent: Arc<dyn Agent>,
}

impl Executor {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self { agent }
    }

    /// Run one agent turn for `message` and report its lifecycle as update
    /// events: submitted, working, then either an artifact and completed, or
    /// failed. Only a message the agent cannot read is an `Err`.
    pub async fn execute(
        &self,
        context_id: &str,
        task_id: &str,
        message: &Message,
    ) -> Result<Vec<UpdateEvent>> {
        let content = message_to_content(message)?;

        let status = |state: TaskState, message: Option<Message>, final_update: bool| {
            UpdateEvent::TaskStatusUpdate(TaskStatusUpdateEvent {
                task_id: task_id.to_string(),
                context_id: Some(context_id.to_string()),
                status: TaskStatus { state, message },
                final_update,
            })
        };

        let mut results = vec![
            status(TaskState::Submitted, None, false),
            status(TaskState::Working, None, false),
        ];

        let span = finder_telemetry::agent_run_span(self.agent.name(), task_id);
        match self.agent.run(content).instrument(span).await {
            Ok(reply) => {
                results.push(UpdateEvent::TaskArtifactUpdate(TaskArtifactUpdateEvent {
                    task_id: task_id.to_string(),
                    context_id: Some(context_id.to_string()),
                    artifact: content_to_artifact(&reply, RESULT_ARTIFACT_NAME),
                    last_chunk: true,
                }));
                results.push(status(TaskState::Completed, None, true));
            }
            Err(e) => {
                tracing::warn!(task.id = task_id, error = %e, "agent run failed");
                let reason = Message::builder()
                    .role(Role::Agent)
                    .parts(vec![Part::text(e.to_string())])
                    .task_id(task_id.to_string())
                    .context_id(context_id.to_string())
                    .build();
                results.push(status(TaskState::Failed, Some(reason), true));
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use finder_core::{Content, FinderError};

    struct EchoAgent;

    #[async_trait]
    impl Agent for EchoAgent {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "echoes"
        }

        async fn run(&self, input: Content) -> finder_core::Result<Content> {
            match input.text() {
                Some("fail") => Err(FinderError::Agent("asked to fail".into())),
                Some(text) => Ok(Content::new("agent").with_text(text)),
                None => Ok(Content::new("agent")),
            }
        }
    }

    fn user_message(text: &str) -> Message {
        Message::builder().role(Role::User).parts(vec![Part::text(text.to_string())]).build()
    }

    fn states(events: &[UpdateEvent]) -> Vec<TaskState> {
        events
            .iter()
            .filter_map(|e| match e {
                UpdateEvent::TaskStatusUpdate(s) => Some(s.status.state),
                UpdateEvent::TaskArtifactUpdate(_) => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_execute_success_lifecycle() {
        let executor = Executor::new(Arc::new(EchoAgent));
        let events = executor.execute("ctx", "task", &user_message("hello")).await.unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(
            states(&events),
            vec![TaskState::Submitted, TaskState::Working, TaskState::Completed]
        );
        match &events[2] {
            UpdateEvent::TaskArtifactUpdate(a) => {
                assert_eq!(a.artifact.name.as_deref(), Some(RESULT_ARTIFACT_NAME));
                assert!(a.last_chunk);
            }
            other => panic!("expected artifact, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_failure_lifecycle() {
        let executor = Executor::new(Arc::new(EchoAgent));
        let events = executor.execute("ctx", "task", &user_message("fail")).await.unwrap();

        assert_eq!(
            states(&events),
            vec![TaskState::Submitted, TaskState::Working, TaskState::Failed]
        );
        match events.last() {
            Some(UpdateEvent::TaskStatusUpdate(s)) => {
                assert!(s.final_update);
                let reason = s.status.message.as_ref().unwrap();
                assert_eq!(reason.role, Role::Agent);
                assert_eq!(reason.task_id.as_deref(), Some("task"));
                assert_eq!(reason.text(), "Agent error: asked to fail");
            }
            other => panic!("expected final status, got {other:?}"),
        }
    }
}

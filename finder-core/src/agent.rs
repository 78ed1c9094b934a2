use crate::{Content, Result, Skill};
use async_trait::async_trait;

/// Content types understood when an agent does not say otherwise.
pub const DEFAULT_CONTENT_TYPES: [&str; 2] = ["text", "text/plain"];

#[async_trait]
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    fn skills(&self) -> Vec<Skill> {
        Vec::new()
    }

    fn content_types(&self) -> Vec<String> {
        DEFAULT_CONTENT_TYPES.iter().map(|s| s.to_string()).collect()
    }

    /// Handle one inbound message and produce the reply.
    async fn run(&self, input: Content) -> Result<Content>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestAgent {
        name: String,
    }

    #[async_trait]
    impl Agent for TestAgent {
        fn name(&self) -> &str {
            &self.name
        }

        fn description(&self) -> &str {
            "test agent"
        }

        async fn run(&self, input: Content) -> Result<Content> {
            let text = input.text().unwrap_or_default().to_uppercase();
            Ok(Content::new("agent").with_text(text))
        }
    }

    #[tokio::test]
    async fn test_agent_trait() {
        let agent = TestAgent { name: "test".to_string() };
        assert_eq!(agent.name(), "test");
        assert!(agent.skills().is_empty());
        assert_eq!(agent.content_types(), vec!["text", "text/plain"]);

        let reply = agent.run(Content::new("user").with_text("hi")).await.unwrap();
        assert_eq!(reply.role, "agent");
        assert_eq!(reply.text(), Some("HI"));
    }
}

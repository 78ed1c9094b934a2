use crate::a2a::{AgentCapabilities, AgentCard, AgentSkill};
use finder_core::Agent;

/// Skills advertised for `agent`. Agents that declare none get a single
/// skill named after the agent itself.
pub fn build_agent_skills(agent: &dyn Agent) -> Vec<AgentSkill> {
    let declared = agent.skills();
    if declared.is_empty() {
        return build_primary_skills(agent);
    }
    declared.into_iter().map(AgentSkill::from).collect()
}

fn build_primary_skills(agent: &dyn Agent) -> Vec<AgentSkill> {
    vec![AgentSkill::new(
        agent.name().to_string(),
        agent.name().to_string(),
        agent.description().to_string(),
        vec!["agent".to_string()],
    )]
}

pub fn build_agent_card(agent: &dyn Agent, base_url: &str) -> AgentCard {
    let modes = agent.content_types();
    AgentCard::builder()
        .name(agent.name().to_string())
        .description(agent.description().to_string())
        .url(base_url.to_string())
        .version("1.0.0".to_string())
        .default_input_modes(modes.clone())
        .default_output_modes(modes)
        .capabilities(AgentCapabilities {
            streaming: false,
            push_notifications: false,
            state_transition_history: false,
        })
        .skills(build_agent_skills(agent))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use finder_core::{Content, Result, Skill};

    struct TestAgent {
        skills: Vec<Skill>,
    }

    #[async_trait]
    impl Agent for TestAgent {
        fn name(&self) -> &str {
            "test_agent"
        }

        fn description(&self) -> &str {
            "A test agent"
        }

        fn skills(&self) -> Vec<Skill> {
            self.skills.clone()
        }

        async fn run(&self, input: Content) -> Result<Content> {
            Ok(input)
        }
    }

    #[test]
    fn test_build_agent_skills_fallback() {
        let agent = TestAgent { skills: vec![] };
        let skills = build_agent_skills(&agent);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].id, "test_agent");
        assert_eq!(skills[0].tags, vec!["agent"]);
    }

    #[test]
    fn test_build_agent_skills_declared() {
        let agent = TestAgent {
            skills: vec![Skill::new("lookup", "Lookup", "Looks things up").with_examples(["x"])],
        };
        let skills = build_agent_skills(&agent);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].id, "lookup");
        assert_eq!(skills[0].examples.as_deref(), Some(&["x".to_string()][..]));
    }

    #[test]
    fn test_build_agent_card() {
        let agent = TestAgent { skills: vec![] };
        let card = build_agent_card(&agent, "http://localhost:10002");
        assert_eq!(card.name, "test_agent");
        assert_eq!(card.url, "http://localhost:10002");
        assert_eq!(card.version, "1.0.0");
        assert_eq!(card.default_input_modes, vec!["text", "text/plain"]);
        assert!(!card.capabilities.streaming);
    }
}

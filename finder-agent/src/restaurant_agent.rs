use crate::request::tool_args_from_content;
use async_trait::async_trait;
use finder_core::{Agent, Content, FinderError, Result, Skill, Tool};
use finder_tool::{RestaurantFinder, restaurant_tool};
use serde_json::Value;
use std::sync::Arc;

pub const AGENT_NAME: &str = "Restaurant Agent";
pub const AGENT_DESCRIPTION: &str = "This agent helps find restaurants based on user criteria.";

/// Answers restaurant requests by calling the `get_restaurants` tool once
/// and replying with its JSON text.
pub struct RestaurantAgent {
    name: String,
    description: String,
    tool: Arc<dyn Tool>,
}

impl RestaurantAgent {
    pub fn new(finder: Arc<RestaurantFinder>) -> Self {
        Self::with_tool(Arc::new(restaurant_tool(finder)))
    }

    /// Build around any tool that takes `get_restaurants` style arguments.
    pub fn with_tool(tool: Arc<dyn Tool>) -> Self {
        Self { name: AGENT_NAME.to_string(), description: AGENT_DESCRIPTION.to_string(), tool }
    }

    pub fn tool(&self) -> &Arc<dyn Tool> {
        &self.tool
    }
}

#[async_trait]
impl Agent for RestaurantAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn skills(&self) -> Vec<Skill> {
        vec![
            Skill::new(
                "find_restaurants",
                "Find Restaurants Tool",
                "Helps find restaurants based on user criteria (e.g., cuisine, location).",
            )
            .with_tags(["restaurant", "finder"])
            .with_examples(["Find me the top 10 chinese restaurants in the US"]),
        ]
    }

    async fn run(&self, input: Content) -> Result<Content> {
        let args = tool_args_from_content(&input)?;
        tracing::info!(tool = self.tool.name(), args = %args, "dispatching restaurant lookup");

        let output = self.tool.execute(args).await?;

        let text = match output {
            Value::String(text) => text,
            other => {
                return Err(FinderError::Agent(format!(
                    "{} returned {} instead of JSON text",
                    self.tool.name(),
                    other
                )));
            }
        };

        Ok(Content::new("agent").with_text(text))
    }
}

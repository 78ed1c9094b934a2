use super::finder::RestaurantFinder;
use super::query::RestaurantQuery;
use crate::FunctionTool;
use finder_core::FinderError;
use serde_json::{Value, json};
use std::sync::Arc;

pub const TOOL_NAME: &str = "get_restaurants";

const TOOL_DESCRIPTION: &str = "Call this tool to get a list of restaurants based on a cuisine \
     and location. 'count' is the number of restaurants to return.";

/// Expose a [`RestaurantFinder`] as the `get_restaurants` tool.
///
/// The tool returns the JSON array text as a string value. Unusable
/// arguments are a [`FinderError::Tool`]; missing or broken data is not an
/// error and yields `"[]"`.
pub fn restaurant_tool(finder: Arc<RestaurantFinder>) -> FunctionTool {
    FunctionTool::new(TOOL_NAME, TOOL_DESCRIPTION, move |args: Value| {
        let finder = finder.clone();
        async move {
            let query: RestaurantQuery = serde_json::from_value(args).map_err(|e| {
                FinderError::Tool(format!("invalid arguments for {TOOL_NAME}: {e}"))
            })?;

            let lookup = tokio::task::spawn_blocking(move || finder.find(&query))
                .await
                .map_err(|e| FinderError::Tool(format!("restaurant lookup failed: {e}")))?;

            Ok(Value::String(lookup.to_json()))
        }
    })
    .with_parameters_schema(json!({
        "type": "object",
        "properties": {
            "cuisine": { "type": "string", "description": "Cuisine to look for" },
            "location": { "type": "string", "description": "City or area, e.g. New York" },
            "count": {
                "type": "integer",
                "description": "Number of restaurants to return",
                "default": super::DEFAULT_COUNT
            }
        },
        "required": ["location"]
    }))
}

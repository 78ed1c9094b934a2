//! Turning an inbound message into `get_restaurants` arguments.

use finder_core::{Content, FinderError, Part, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,6})\b").expect("count pattern is valid"));

static CUISINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([a-z][a-z-]*)\s+(?:restaurants?|food|places|spots)\b")
        .expect("cuisine pattern is valid")
});

static LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:in|near|around)\s+([^.?!]+)").expect("location pattern is valid")
});

/// Words that can sit before "restaurants" without naming a cuisine.
const NON_CUISINE_WORDS: [&str; 15] = [
    "top", "best", "good", "some", "the", "any", "few", "great", "find", "show", "me", "list",
    "get", "recommend", "nearby",
];

/// Build tool arguments from a message.
///
/// A data part carrying `location` wins and is passed through as-is.
/// Otherwise the first text part is read: the first integer is the count,
/// the word before "restaurants" is the cuisine, and whatever follows
/// "in", "near" or "around" is the location. A message with neither yields
/// an empty location, which the tool answers with no results.
pub fn tool_args_from_content(content: &Content) -> Result<Value> {
    for part in &content.parts {
        if let Part::Data { data } = part {
            if data.contains_key("location") {
                return Ok(Value::Object(data.clone()));
            }
        }
    }

    let text = content
        .text()
        .ok_or_else(|| FinderError::Agent("message has no text or data to search with".into()))?;

    Ok(Value::Object(parse_text(text)))
}

fn parse_text(text: &str) -> Map<String, Value> {
    let mut args = Map::new();

    let cuisine = CUISINE
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .find(|word| !NON_CUISINE_WORDS.contains(&word.to_lowercase().as_str()))
        .unwrap_or_default();
    args.insert("cuisine".to_string(), Value::String(cuisine));

    let location = LOCATION
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();
    args.insert("location".to_string(), Value::String(location));

    if let Some(count) = COUNT.captures(text).and_then(|c| c[1].parse::<i64>().ok()) {
        args.insert("count".to_string(), Value::from(count));
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> Content {
        Content::new("user").with_text(s)
    }

    #[test]
    fn test_parses_full_request() {
        let request = text("Find me the top 10 chinese restaurants in New York");
        let args = tool_args_from_content(&request).unwrap();
        assert_eq!(args, json!({"cuisine": "chinese", "location": "New York", "count": 10}));
    }

    #[test]
    fn test_count_is_optional() {
        let args = tool_args_from_content(&text("Any good thai food near Brooklyn, NY?")).unwrap();
        assert_eq!(args, json!({"cuisine": "thai", "location": "Brooklyn, NY"}));
    }

    #[test]
    fn test_skips_non_cuisine_words() {
        let args = tool_args_from_content(&text("best restaurants in the US")).unwrap();
        assert_eq!(args["cuisine"], "");
        assert_eq!(args["location"], "the US");
    }

    #[test]
    fn test_leading_verb_is_not_a_cuisine() {
        for request in ["Find restaurants in New York", "show me restaurants near NY"] {
            let args = tool_args_from_content(&text(request)).unwrap();
            assert_eq!(args["cuisine"], "", "{request}");
        }

        let args = tool_args_from_content(&text("List korean restaurants in NY")).unwrap();
        assert_eq!(args["cuisine"], "korean");
    }

    #[test]
    fn test_missing_location_is_empty() {
        let args = tool_args_from_content(&text("italian restaurants please")).unwrap();
        assert_eq!(args["location"], "");
        assert_eq!(args["cuisine"], "italian");
    }

    #[test]
    fn test_data_part_is_passed_through() {
        let mut data = Map::new();
        data.insert("location".to_string(), json!("NY"));
        data.insert("count".to_string(), json!(2));
        let content = Content::new("user").with_text("ignored in 3 places").with_data(data);

        let args = tool_args_from_content(&content).unwrap();
        assert_eq!(args, json!({"location": "NY", "count": 2}));
    }

    #[test]
    fn test_empty_message_is_an_error() {
        let err = tool_args_from_content(&Content::new("user")).unwrap_err();
        assert!(matches!(err, FinderError::Agent(_)));
    }
}

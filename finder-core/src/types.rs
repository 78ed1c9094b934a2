use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into(), parts: Vec::new() }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Text { text: text.into() });
        self
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.parts.push(Part::Data { data });
        self
    }

    /// First text part, if any.
    pub fn text(&self) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            Part::Text { text } => Some(text.as_str()),
            Part::Data { .. } => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    Data { data: Map<String, Value> },
}

/// Capability an agent advertises on its card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub examples: Vec<String>,
}

impl Skill {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            tags: Vec::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_text_skips_data_parts() {
        let mut data = Map::new();
        data.insert("location".to_string(), json!("NY"));
        let content = Content::new("user").with_data(data).with_text("hello");
        assert_eq!(content.text(), Some("hello"));
        assert_eq!(content.parts.len(), 2);
    }

    #[test]
    fn test_part_untagged_serialization() {
        let part = Part::Text { text: "hi".to_string() };
        assert_eq!(serde_json::to_value(&part).unwrap(), json!({"text": "hi"}));

        let parsed: Part = serde_json::from_value(json!({"data": {"count": 3}})).unwrap();
        assert!(matches!(parsed, Part::Data { .. }));
    }

    #[test]
    fn test_skill_builder() {
        let skill = Skill::new("find", "Find", "Finds things")
            .with_tags(["a", "b"])
            .with_examples(["find me things"]);
        assert_eq!(skill.tags, vec!["a", "b"]);
        assert_eq!(skill.examples.len(), 1);
    }
}

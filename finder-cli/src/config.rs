use finder_core::FinderError;
use std::fmt;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const VERTEX_AI_VAR: &str = "GOOGLE_GENAI_USE_VERTEXAI";

/// Model platform credentials required before the server may start.
#[derive(Clone, PartialEq, Eq)]
pub enum ModelCredentials {
    ApiKey(String),
    VertexAi,
}

impl ModelCredentials {
    pub fn from_env() -> Result<Self, FinderError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Vertex AI needs no key here; otherwise a non-empty API key is required.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FinderError> {
        if lookup(VERTEX_AI_VAR).as_deref() == Some("TRUE") {
            return Ok(ModelCredentials::VertexAi);
        }

        match lookup(API_KEY_VAR) {
            Some(key) if !key.is_empty() => Ok(ModelCredentials::ApiKey(key)),
            _ => Err(FinderError::Config(format!(
                "{API_KEY_VAR} environment variable not set and {VERTEX_AI_VAR} is not TRUE."
            ))),
        }
    }

    pub fn platform(&self) -> &'static str {
        match self {
            ModelCredentials::ApiKey(_) => "gemini-api",
            ModelCredentials::VertexAi => "vertex-ai",
        }
    }
}

impl fmt::Debug for ModelCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelCredentials::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
            ModelCredentials::VertexAi => f.write_str("VertexAi"),
        }
    }
}

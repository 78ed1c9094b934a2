#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinderError::Tool("missing location".to_string());
        assert_eq!(err.to_string(), "Tool error: missing location");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinderError = io_err.into();
        assert!(matches!(err, FinderError::Io(_)));
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FinderError = serde_err.into();
        assert!(matches!(err, FinderError::Serde(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }
}

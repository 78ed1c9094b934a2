use finder_core::Agent;
use std::{path::PathBuf, sync::Arc, time::Duration};

/// Tasks kept for `tasks/get` before the oldest are evicted.
pub const DEFAULT_TASK_CAPACITY: usize = 1024;

/// Origin of the bundled web client during development.
pub const DEV_CLIENT_ORIGIN: &str = "http://localhost:5173";

/// Security configuration for the server.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Allowed origins for CORS. Empty allows any origin, without credentials.
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes (default: 1MB)
    pub max_body_size: usize,
    /// Request timeout duration (default: 30 seconds)
    pub request_timeout: Duration,
    /// Whether to include detailed error messages in responses (default: false)
    pub expose_error_details: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_size: 1024 * 1024,
            request_timeout: Duration::from_secs(30),
            expose_error_details: false,
        }
    }
}

impl SecurityConfig {
    /// Development configuration: the local web client origin, detailed errors.
    pub fn development() -> Self {
        Self {
            allowed_origins: vec![DEV_CLIENT_ORIGIN.to_string()],
            request_timeout: Duration::from_secs(60),
            expose_error_details: true,
            ..Self::default()
        }
    }

    /// Production configuration with specific allowed origins
    pub fn production(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins, ..Self::default() }
    }
}

/// Configuration for the A2A server.
#[derive(Clone)]
pub struct ServerConfig {
    pub agent: Arc<dyn Agent>,
    /// Directory served under `/static`, when it exists.
    pub static_dir: Option<PathBuf>,
    pub security: SecurityConfig,
    /// Maximum number of tasks remembered for `tasks/get`.
    pub task_capacity: usize,
}

impl ServerConfig {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self {
            agent,
            static_dir: None,
            security: SecurityConfig::default(),
            task_capacity: DEFAULT_TASK_CAPACITY,
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    /// Configure allowed CORS origins
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.security.allowed_origins = origins;
        self
    }

    /// Configure maximum request body size
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.security.max_body_size = size;
        self
    }

    /// Configure request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.security.request_timeout = timeout;
        self
    }

    pub fn with_task_capacity(mut self, capacity: usize) -> Self {
        self.task_capacity = capacity;
        self
    }

    /// Enable detailed error messages (for development only)
    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.security.expose_error_details = expose;
        self
    }
}

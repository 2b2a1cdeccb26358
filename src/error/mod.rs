//! Error types for Drover.

use thiserror::Error;

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Server,
    Api,
    Configuration,
    Serialization,
    Action,
    Run,
    Canceled,
    Unknown,
}

/// Primary error type for all Drover operations.
#[derive(Error, Debug)]
pub enum DroverError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Action '{action}' failed: {message}")]
    ActionExecution { action: String, message: String },

    /// A tool call named an action the registry does not hold. The
    /// orchestrator catches and logs this kind instead of propagating it;
    /// the call contributes no output to the submitted batch.
    #[error("No action registered for tool '{0}'")]
    UnknownAction(String),

    #[error("Run {run_id} ended in status '{status}'")]
    RunFailed { run_id: String, status: String },

    #[error("Run {run_id} timed out after {waited_ms}ms")]
    RunTimedOut { run_id: String, waited_ms: u64 },

    #[error("Operation canceled")]
    Canceled,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DroverError {
    /// Create an API error from a status code and body text.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::RateLimited { .. } => ErrorCategory::RateLimit,
            Self::Network(_) => ErrorCategory::Network,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::ActionExecution { .. } | Self::UnknownAction(_) => ErrorCategory::Action,
            Self::RunFailed { .. } | Self::RunTimedOut { .. } => ErrorCategory::Run,
            Self::Canceled => ErrorCategory::Canceled,
            Self::InvalidArgument(_) => ErrorCategory::Unknown,
        }
    }

    /// Whether this error is potentially retryable by re-driving the run.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit | ErrorCategory::Network | ErrorCategory::Server
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DroverError>;

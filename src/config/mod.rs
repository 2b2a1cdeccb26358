//! Client configuration.

use std::time::Duration;

use crate::error::{DroverError, Result};

/// Default API root, overridable for compatible services.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// How long the orchestrator sleeps between run polls unless configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for an [`Assistant`](crate::assistant::Assistant).
///
/// Run state is entirely in-process; the only persistent inputs are the
/// credential and identifiers held here.
#[derive(Debug, Clone)]
pub struct DroverConfig {
    /// Bearer credential for the conversation service.
    pub api_key: String,
    /// API root URL, without a trailing slash.
    pub base_url: String,
    /// Assistant used when `send_message_to_thread` is not given one.
    pub assistant_id: String,
    /// Pause between run polls.
    pub poll_interval: Duration,
    /// Upper bound on how long a single run may be driven. `None` polls
    /// until the run reaches a terminal status.
    pub run_timeout: Option<Duration>,
}

impl DroverConfig {
    pub fn new(api_key: impl Into<String>, assistant_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            assistant_id: assistant_id.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            run_timeout: None,
        }
    }

    /// Load from environment variables (`OPENAI_API_KEY`,
    /// `DROVER_ASSISTANT_ID`, optional `DROVER_BASE_URL`).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| DroverError::Configuration("OPENAI_API_KEY is not set".to_string()))?;
        let assistant_id = std::env::var("DROVER_ASSISTANT_ID").map_err(|_| {
            DroverError::Configuration("DROVER_ASSISTANT_ID is not set".to_string())
        })?;

        let mut config = Self::new(api_key, assistant_id);
        if let Ok(base_url) = std::env::var("DROVER_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_run_timeout(mut self, timeout: Duration) -> Self {
        self.run_timeout = Some(timeout);
        self
    }
}

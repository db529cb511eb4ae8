//! Client configuration.

use std::env;
use std::time::Duration;

use url::Url;

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "TASKDECK_API_URL";

/// Base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Per-request upper bound. Exceeding it surfaces as a network error and
/// never enters the refresh path.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for an [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration pointing at the given API root.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read the base URL from `TASKDECK_API_URL`, falling back to the
    /// localhost default.
    pub fn from_env() -> Result<Self, url::ParseError> {
        let base = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

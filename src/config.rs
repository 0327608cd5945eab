//! Client configuration.
//!
//! [`ClientConfig`] carries everything fixed at construction time: the API
//! token, base URL, optional visitor identifier, request timeout and the
//! retry policy. Nothing here mutates after the client is built.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::defaults;
use crate::error::{Result, TcaError};
use crate::retry::RetryPolicy;

/// Configuration for a [`crate::Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API token, sent as `Authorization: Basic <token>`
    pub api_token: SecretString,
    /// Base URL, without a trailing slash
    pub api_base_url: String,
    /// Optional visitor identifier, sent as `Tca-Visitor-Id`
    pub visitor_id: Option<String>,
    /// Request timeout (covers a single attempt, not the retry budget)
    pub timeout: Duration,
    /// Retry policy for transient failures
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Create a configuration with the given API token and defaults for
    /// everything else.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: SecretString::from(api_token.into()),
            api_base_url: defaults::http::API_BASE_URL.to_string(),
            visitor_id: None,
            timeout: defaults::http::REQUEST_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }

    /// Override the base URL. A trailing slash is trimmed so path joining
    /// stays predictable.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Attach a visitor identifier for request attribution.
    pub fn with_visitor_id(mut self, visitor_id: impl Into<String>) -> Self {
        self.visitor_id = Some(visitor_id.into());
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Build a configuration from environment variables.
    ///
    /// Reads `TCA_API_TOKEN` (required), `TCA_API_URL`, `TCA_VISITOR_ID`
    /// and `TCA_TIMEOUT` (seconds).
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(defaults::env::API_TOKEN).map_err(|_| {
            TcaError::Configuration(format!("{} is not set", defaults::env::API_TOKEN))
        })?;
        let mut config = Self::new(token);
        if let Ok(url) = std::env::var(defaults::env::API_URL) {
            config = config.with_base_url(url);
        }
        if let Ok(visitor_id) = std::env::var(defaults::env::VISITOR_ID) {
            config = config.with_visitor_id(visitor_id);
        }
        if let Ok(timeout) = std::env::var(defaults::env::TIMEOUT) {
            let secs: u64 = timeout.parse().map_err(|_| {
                TcaError::Configuration(format!(
                    "{} must be a number of seconds, got `{timeout}`",
                    defaults::env::TIMEOUT
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration. An empty token is a fatal configuration
    /// error at construction time, before any network activity.
    pub fn validate(&self) -> Result<()> {
        if self.api_token.expose_secret().is_empty() {
            return Err(TcaError::Configuration("api_token is required".into()));
        }
        Ok(())
    }
}

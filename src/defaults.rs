//! Default Configuration Values
//!
//! Centralizes the default values used throughout the SDK so they are easy
//! to find, document and adjust.

use std::time::Duration;

/// HTTP client defaults
pub mod http {
    use super::*;

    /// Default base URL for The Companies API
    pub const API_BASE_URL: &str = "https://api.thecompaniesapi.com";

    /// Default request timeout.
    ///
    /// Set to 300 seconds: analytics and AI-assisted operations can run for
    /// minutes on large result sets.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

    /// User-Agent string identifying the SDK and its version
    pub const USER_AGENT: &str = concat!("thecompaniesapi-rust-sdk/", env!("CARGO_PKG_VERSION"));

    /// Header carrying the optional visitor identifier (attribution, not auth)
    pub const VISITOR_ID_HEADER: &str = "Tca-Visitor-Id";
}

/// Retry and backoff defaults
pub mod retry {
    use super::*;

    /// Maximum number of retries after the initial attempt
    pub const MAX_RETRIES: u32 = 3;

    /// Base delay for exponential backoff
    pub const INITIAL_DELAY: Duration = Duration::from_millis(1000);

    /// Upper bound for any single backoff delay
    pub const MAX_DELAY: Duration = Duration::from_secs(30);

    /// Exponential backoff multiplier
    pub const BACKOFF_MULTIPLIER: f64 = 2.0;

    /// Jitter factor applied to delays (0.0 to 1.0)
    pub const JITTER_FACTOR: f64 = 0.1;
}

/// Environment variable names recognized by [`crate::ClientConfig::from_env`]
pub mod env {
    /// API token (required)
    pub const API_TOKEN: &str = "TCA_API_TOKEN";

    /// Base URL override (optional)
    pub const API_URL: &str = "TCA_API_URL";

    /// Visitor identifier (optional)
    pub const VISITOR_ID: &str = "TCA_VISITOR_ID";

    /// Request timeout in seconds (optional)
    pub const TIMEOUT: &str = "TCA_TIMEOUT";
}

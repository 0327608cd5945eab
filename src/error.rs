//! Error Handling Module
//!
//! Typed errors for The Companies API SDK. Errors fall into a small
//! taxonomy: configuration problems (fatal, never retried), unknown
//! operation names, and transport failures (network errors, timeouts and
//! non-2xx statuses after retries are exhausted).

use thiserror::Error;

/// Errors surfaced by the SDK.
#[derive(Error, Debug, Clone)]
pub enum TcaError {
    /// Invalid client configuration or a malformed operations table
    /// (e.g. a descriptor with an unrecognized HTTP method).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The invoked operation name is not present in the operations table.
    #[error("No such operation: {0}")]
    UnknownOperation(String),

    /// The API answered with a non-2xx status after retries were exhausted.
    #[error("Request failed: HTTP {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Human-readable message (status reason or body snippet)
        message: String,
        /// Parsed response body, when the API returned a JSON error envelope
        details: Option<serde_json::Value>,
    },

    /// Transport-level failure (connection refused, DNS, TLS, protocol).
    #[error("Request failed: {0}")]
    Http(String),

    /// The request exceeded the configured timeout.
    #[error("Request failed: timeout: {0}")]
    Timeout(String),

    /// A response body that was required to be JSON could not be parsed.
    /// Note that 2xx responses with non-JSON bodies are not errors; they
    /// are returned as a `{data, status}` fallback payload instead.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Coarse error category, mirroring the taxonomy in the SDK docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Construction-time or operations-table configuration problems
    Configuration,
    /// Caller invoked a name absent from the operations table
    UnknownOperation,
    /// 4xx statuses
    Client,
    /// 5xx statuses
    Server,
    /// Connection-level failures and timeouts
    Network,
    /// Response parsing failures
    Parsing,
}

/// HTTP statuses the transport treats as transient and retries.
pub const TRANSIENT_STATUS_CODES: &[u16] = &[429, 500, 502, 503, 504];

impl TcaError {
    /// Create an API error from a status code and message.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create an API error carrying the parsed response body.
    pub fn api_error_with_details(
        code: u16,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: Some(details),
        }
    }

    /// HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Classify the error into a coarse category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::UnknownOperation(_) => ErrorCategory::UnknownOperation,
            Self::ApiError { code, .. } if *code >= 500 => ErrorCategory::Server,
            Self::ApiError { .. } => ErrorCategory::Client,
            Self::Http(_) | Self::Timeout(_) => ErrorCategory::Network,
            Self::Parse(_) => ErrorCategory::Parsing,
        }
    }

    /// Whether the transport retry policy may retry this error.
    ///
    /// Transient statuses (429, 500, 502, 503, 504) and connection-level
    /// failures are retryable; everything else surfaces immediately.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ApiError { code, .. } => TRANSIENT_STATUS_CODES.contains(code),
            Self::Http(_) => true,
            _ => false,
        }
    }
}

/// Result type for SDK operations.
pub type Result<T> = std::result::Result<T, TcaError>;

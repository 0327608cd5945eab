//! Default header construction.
//!
//! Every request carries the JSON content headers, the SDK user agent, the
//! `Basic` authorization header when a token is configured, and the
//! visitor-identifying header when a visitor id is configured.

use std::collections::HashMap;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use secrecy::ExposeSecret;

use crate::config::ClientConfig;
use crate::defaults;
use crate::error::{Result, TcaError};

/// Build the default header set for a client configuration.
pub fn build_default_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(defaults::http::USER_AGENT),
    );

    let token = config.api_token.expose_secret();
    if !token.is_empty() {
        let auth_value = format!("Basic {token}");
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value)
                .map_err(|e| TcaError::Configuration(format!("Invalid API token format: {e}")))?,
        );
    }

    if let Some(visitor_id) = &config.visitor_id {
        headers.insert(
            HeaderName::from_static("tca-visitor-id"),
            HeaderValue::from_str(visitor_id)
                .map_err(|e| TcaError::Configuration(format!("Invalid visitor id: {e}")))?,
        );
    }

    Ok(headers)
}

/// Merge per-request headers into a base set.
///
/// Extra headers override base headers of the same name; invalid names or
/// values are configuration errors rather than being dropped silently.
pub fn merge_headers(mut base: HeaderMap, extra: &HashMap<String, String>) -> Result<HeaderMap> {
    for (key, value) in extra {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| TcaError::Configuration(format!("Invalid header name `{key}`: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| TcaError::Configuration(format!("Invalid header value for `{key}`: {e}")))?;
        base.insert(name, value);
    }
    Ok(base)
}

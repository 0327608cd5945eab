//! Reqwest-backed HTTP transport.
//!
//! Wraps a [`reqwest::Client`] with the SDK's auth/visitor headers, query
//! serialization, retry policy and response normalization. Non-2xx statuses
//! become [`TcaError::ApiError`] after the retry budget is exhausted; 2xx
//! responses with non-JSON bodies are returned as a `{data, status}`
//! fallback payload rather than failing.

use std::collections::HashMap;

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{Result, TcaError};
use crate::http::{headers, query};
use crate::operations::HttpMethod;
use crate::retry::RetryExecutor;

/// Fallback payload for 2xx responses whose body is not JSON.
///
/// Some successful endpoints answer with plain text; rather than failing,
/// the transport hands the raw body back in this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawResponse {
    /// Raw response body text
    pub data: String,
    /// HTTP status code
    pub status: u16,
}

/// HTTP transport shared by all operations of one client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
    config: ClientConfig,
    default_headers: HeaderMap,
}

impl HttpTransport {
    /// Create a transport from a configuration, building a dedicated
    /// `reqwest::Client` with the configured timeout.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TcaError::Configuration(format!("Failed to build HTTP client: {e}")))?;
        Self::with_http_client(config, http_client)
    }

    /// Create a transport reusing a caller-supplied `reqwest::Client`.
    ///
    /// The caller keeps responsibility for timeouts and pooling on the
    /// supplied client.
    pub fn with_http_client(config: ClientConfig, http_client: reqwest::Client) -> Result<Self> {
        config.validate()?;
        let default_headers = headers::build_default_headers(&config)?;
        Ok(Self {
            http_client,
            config,
            default_headers,
        })
    }

    /// The configuration this transport was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform a request against the API.
    ///
    /// Arguments in `query` are serialized per the SDK's query rules; `body`
    /// is sent as JSON; `extra_headers` override the defaults per request.
    /// Transient failures are retried under the configured policy.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&Map<String, Value>>,
        body: Option<&Value>,
        extra_headers: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        let url = self.prepare_url(path);
        let query_pairs = query.map(query::serialize_query);
        let effective_headers = match extra_headers {
            Some(extra) => headers::merge_headers(self.default_headers.clone(), extra)?,
            None => self.default_headers.clone(),
        };
        let request_id = Uuid::new_v4();

        let executor = RetryExecutor::new(self.config.retry.clone());
        executor
            .execute(|| {
                self.execute_once(
                    method,
                    &url,
                    query_pairs.as_deref(),
                    body,
                    &effective_headers,
                    request_id,
                )
            })
            .await
    }

    /// GET request with optional query arguments.
    pub async fn get(&self, path: &str, query: Option<&Map<String, Value>>) -> Result<Value> {
        self.request(HttpMethod::Get, path, query, None, None).await
    }

    /// POST request with an optional JSON body.
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(HttpMethod::Post, path, None, body, None).await
    }

    /// PUT request with an optional JSON body.
    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(HttpMethod::Put, path, None, body, None).await
    }

    /// PATCH request with an optional JSON body.
    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(HttpMethod::Patch, path, None, body, None)
            .await
    }

    /// DELETE request with optional query arguments.
    pub async fn delete(&self, path: &str, query: Option<&Map<String, Value>>) -> Result<Value> {
        self.request(HttpMethod::Delete, path, query, None, None)
            .await
    }

    fn prepare_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.config.api_base_url, path)
        } else {
            format!("{}/{}", self.config.api_base_url, path)
        }
    }

    async fn execute_once(
        &self,
        method: HttpMethod,
        url: &str,
        query: Option<&[(String, String)]>,
        body: Option<&Value>,
        headers: &HeaderMap,
        request_id: Uuid,
    ) -> Result<Value> {
        let mut rb = self
            .http_client
            .request(method.into(), url)
            .headers(headers.clone());
        if let Some(pairs) = query {
            if !pairs.is_empty() {
                rb = rb.query(pairs);
            }
        }
        if let Some(body) = body {
            rb = rb.json(body);
        }

        tracing::debug!(%request_id, %method, url, "sending request");
        let response = rb.send().await.map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(%request_id, status = status.as_u16(), "request failed");
            return Err(error_for_status(status, &text));
        }

        let status_code = status.as_u16();
        let text = response.text().await.map_err(classify_transport_error)?;
        tracing::debug!(%request_id, status = status_code, bytes = text.len(), "request succeeded");

        match serde_json::from_str::<Value>(&text) {
            Ok(parsed) => Ok(parsed),
            // Some successful responses are not JSON; hand the raw text back
            // instead of failing.
            Err(_) => {
                let fallback = RawResponse {
                    data: text,
                    status: status_code,
                };
                serde_json::to_value(fallback).map_err(|e| TcaError::Parse(e.to_string()))
            }
        }
    }
}

fn classify_transport_error(error: reqwest::Error) -> TcaError {
    if error.is_timeout() {
        TcaError::Timeout(error.to_string())
    } else {
        TcaError::Http(error.to_string())
    }
}

fn error_for_status(status: reqwest::StatusCode, body: &str) -> TcaError {
    let message = status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| {
            let snippet: String = body.chars().take(200).collect();
            if snippet.is_empty() {
                "api error".to_string()
            } else {
                snippet
            }
        });
    match serde_json::from_str::<Value>(body) {
        Ok(details) => TcaError::api_error_with_details(status.as_u16(), message, details),
        Err(_) => TcaError::api_error(status.as_u16(), message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base_url: &str) -> HttpTransport {
        let config = ClientConfig::new("test-token").with_base_url(base_url);
        HttpTransport::new(config).unwrap()
    }

    #[test]
    fn prepare_url_joins_paths() {
        let t = transport("https://api.example.com");
        assert_eq!(
            t.prepare_url("/v2/health"),
            "https://api.example.com/v2/health"
        );
        assert_eq!(
            t.prepare_url("v2/health"),
            "https://api.example.com/v2/health"
        );
        assert_eq!(
            t.prepare_url("companies/search"),
            "https://api.example.com/companies/search"
        );
    }

    #[test]
    fn empty_token_fails_before_any_network_activity() {
        let config = ClientConfig::new("");
        let err = HttpTransport::new(config).unwrap_err();
        assert!(matches!(err, TcaError::Configuration(_)));
    }

    #[test]
    fn error_for_status_keeps_json_details() {
        let status = reqwest::StatusCode::UNPROCESSABLE_ENTITY;
        let err = error_for_status(status, r#"{"error":"invalid attribute"}"#);
        match err {
            TcaError::ApiError { code, details, .. } => {
                assert_eq!(code, 422);
                assert_eq!(details.unwrap()["error"], "invalid attribute");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

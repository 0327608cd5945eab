//! thecompaniesapi
//!
//! Rust SDK for [The Companies API](https://www.thecompaniesapi.com).
//!
//! The client maps a schema-generated operations table (HTTP method, path
//! template, path-parameter names) into callable operations. Authentication,
//! query/body serialization, retries with backoff, and response parsing are
//! handled by a shared reqwest-backed transport.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use serde_json::json;
//! use thecompaniesapi::Client;
//!
//! #[tokio::main]
//! async fn main() -> thecompaniesapi::Result<()> {
//!     let client = Client::builder().api_token("my-token").build()?;
//!
//!     // Search companies by keyword.
//!     let results = client
//!         .invoke("searchCompanies", json!({ "search": "technology", "size": 5 }))
//!         .await?;
//!
//!     // Fetch a single company; `domain` fills the path template.
//!     let company = client
//!         .invoke("fetchCompany", json!({ "domain": "apple.com" }))
//!         .await?;
//!
//!     println!("{results}\n{company}");
//!     Ok(())
//! }
//! ```
//!
//! Arguments named in an operation's path parameters fill the `{param}`
//! placeholders of its path template; remaining arguments are sent as query
//! parameters for GET/DELETE operations and as a JSON body for
//! POST/PUT/PATCH. Object- and array-valued query parameters are serialized
//! to compact JSON and percent-encoded, matching the wire behavior of the
//! deployed SDKs.
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod error;
pub mod generated;
pub mod http;
pub mod operations;
pub mod retry;

pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{ErrorCategory, Result, TcaError};
pub use http::{HttpTransport, RawResponse};
pub use operations::{HttpMethod, Operation, OperationsMap};
pub use retry::RetryPolicy;

/// Convenience re-exports for callers.
pub mod prelude {
    pub use crate::client::{Client, ClientBuilder};
    pub use crate::config::ClientConfig;
    pub use crate::error::{Result, TcaError};
    pub use crate::operations::{HttpMethod, Operation, OperationsMap};
    pub use crate::retry::RetryPolicy;
}

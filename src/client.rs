//! Client facade.
//!
//! [`Client`] ties together the configuration, the HTTP transport and the
//! operation dispatcher. Construction validates the configuration (a
//! missing API token fails here, before any network activity); afterwards
//! the client is immutable and cheap to clone.

use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::error::{Result, TcaError};
use crate::generated;
use crate::http::HttpTransport;
use crate::operations::OperationsMap;
use crate::retry::RetryPolicy;

/// Client for The Companies API.
#[derive(Debug, Clone)]
pub struct Client {
    dispatcher: Dispatcher,
}

impl Client {
    /// Start building a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client from a configuration, using the generated
    /// operations table.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self {
            dispatcher: Dispatcher::new(transport, generated::operations_map().clone()),
        })
    }

    /// Create a client configured from `TCA_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Invoke an operation by name with keyword-style arguments.
    ///
    /// Arguments listed in the operation's path parameters fill the path
    /// template; the rest become query parameters (GET/DELETE) or the JSON
    /// body (POST/PUT/PATCH).
    ///
    /// ```rust,no_run
    /// # async fn example() -> thecompaniesapi::Result<()> {
    /// use serde_json::json;
    /// use thecompaniesapi::Client;
    ///
    /// let client = Client::builder().api_token("my-token").build()?;
    /// let company = client
    ///     .invoke("fetchCompany", json!({ "domain": "apple.com" }))
    ///     .await?;
    /// println!("{company}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn invoke(&self, operation: &str, args: Value) -> Result<Value> {
        let args = match args {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(TcaError::Configuration(format!(
                    "operation arguments must be a JSON object, got {other}"
                )));
            }
        };
        self.invoke_with_args(operation, args).await
    }

    /// Invoke an operation with an argument map.
    pub async fn invoke_with_args(
        &self,
        operation: &str,
        args: Map<String, Value>,
    ) -> Result<Value> {
        self.dispatcher.invoke(operation, args).await
    }

    /// The underlying transport, for raw requests outside the table.
    pub fn http(&self) -> &HttpTransport {
        self.dispatcher.transport()
    }

    /// Names of all operations this client can invoke.
    pub fn operation_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.dispatcher.operation_names().collect();
        names.sort_unstable();
        names
    }
}

/// Builder for [`Client`].
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    api_token: Option<String>,
    base_url: Option<String>,
    visitor_id: Option<String>,
    timeout: Option<std::time::Duration>,
    retry: Option<RetryPolicy>,
    operations: Option<OperationsMap>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API token (required).
    pub fn api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    /// Override the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Attach a visitor identifier for request attribution.
    pub fn visitor_id(mut self, visitor_id: impl Into<String>) -> Self {
        self.visitor_id = Some(visitor_id.into());
        self
    }

    /// Override the request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the retry policy.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Use a custom operations table instead of the generated one.
    pub fn operations(mut self, operations: OperationsMap) -> Self {
        self.operations = Some(operations);
        self
    }

    /// Reuse a caller-supplied `reqwest::Client`. The caller keeps
    /// responsibility for timeouts and pooling.
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Build the client. Fails with a configuration error when the API
    /// token is missing or empty; no network activity happens here.
    pub fn build(self) -> Result<Client> {
        let token = self
            .api_token
            .ok_or_else(|| TcaError::Configuration("api_token is required".into()))?;
        let mut config = ClientConfig::new(token);
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(visitor_id) = self.visitor_id {
            config = config.with_visitor_id(visitor_id);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(retry) = self.retry {
            config = config.with_retry(retry);
        }

        let transport = match self.http_client {
            Some(http_client) => HttpTransport::with_http_client(config, http_client)?,
            None => HttpTransport::new(config)?,
        };
        let operations = self
            .operations
            .unwrap_or_else(|| generated::operations_map().clone());
        Ok(Client {
            dispatcher: Dispatcher::new(transport, operations),
        })
    }
}

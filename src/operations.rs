//! Operation descriptors.
//!
//! An [`Operation`] is the static record describing how a logical call name
//! turns into an HTTP request: a path template with `{param}` placeholders,
//! an HTTP method, and the ordered list of parameter names that belong in
//! the path. Descriptors are schema-generated data (see [`crate::generated`])
//! keyed by operation name; the dispatcher consumes them without hardcoding
//! any specific name.

use std::collections::HashMap;

use crate::error::{Result, TcaError};

/// HTTP methods supported by the operations table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Parse a schema-supplied method string.
    ///
    /// Anything outside GET/POST/PUT/PATCH/DELETE indicates a malformed
    /// operations table and fails fast as a configuration error.
    pub fn parse(method: &str) -> Result<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Err(TcaError::Configuration(format!(
                "unsupported HTTP method `{other}` in operations table"
            ))),
        }
    }

    /// Canonical upper-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether call arguments ride in the query string (GET/DELETE) rather
    /// than in a JSON body (POST/PUT/PATCH).
    pub const fn sends_query(&self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static descriptor for one logical operation.
///
/// The method is kept as the schema text (not pre-parsed) so that a
/// malformed table surfaces as a configuration error at resolution time,
/// not as a silent mis-route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Path template, with `{param}` placeholders
    pub path: &'static str,
    /// HTTP method as schema text (GET/POST/PUT/PATCH/DELETE)
    pub method: &'static str,
    /// Names of call arguments substituted into the path template
    pub path_params: &'static [&'static str],
}

/// Mapping from operation name to descriptor.
pub type OperationsMap = HashMap<&'static str, Operation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_methods() {
        assert_eq!(HttpMethod::parse("GET").unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::parse("post").unwrap(), HttpMethod::Post);
        assert_eq!(HttpMethod::parse("Patch").unwrap(), HttpMethod::Patch);
    }

    #[test]
    fn parse_unknown_method_is_configuration_error() {
        let err = HttpMethod::parse("TRACE").unwrap_err();
        assert!(matches!(err, TcaError::Configuration(_)));
        assert!(err.to_string().contains("TRACE"));
    }

    #[test]
    fn query_routing_by_method() {
        assert!(HttpMethod::Get.sends_query());
        assert!(HttpMethod::Delete.sends_query());
        assert!(!HttpMethod::Post.sends_query());
        assert!(!HttpMethod::Put.sends_query());
        assert!(!HttpMethod::Patch.sends_query());
    }
}

//! Operation dispatch.
//!
//! Turns a logical operation name into an HTTP call: the name is looked up
//! in the operations table, call-time arguments are split into path
//! substitutions and the remainder, and the call is delegated to the
//! transport verb matching the descriptor. Resolution (method parsing and
//! path-template splitting) happens once per name and is memoized; the
//! cache is an optimization, not a correctness requirement, so concurrent
//! population of the same name is harmless.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::{Map, Value};

use crate::error::{Result, TcaError};
use crate::http::HttpTransport;
use crate::http::query::plain_string;
use crate::operations::{HttpMethod, Operation, OperationsMap};

/// One piece of a pre-split path template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    Literal(&'static str),
    Param(&'static str),
}

/// A descriptor resolved into its executable form.
#[derive(Debug)]
pub(crate) struct ResolvedOperation {
    method: HttpMethod,
    segments: Vec<PathSegment>,
    path_params: &'static [&'static str],
}

impl ResolvedOperation {
    fn from_descriptor(descriptor: &Operation) -> Result<Self> {
        Ok(Self {
            method: HttpMethod::parse(descriptor.method)?,
            segments: split_template(descriptor.path),
            path_params: descriptor.path_params,
        })
    }

    /// Substitute path arguments into the template.
    ///
    /// Substitution is literal: values are not escaped, and a placeholder
    /// whose argument was not supplied is left as-is.
    fn render_path(&self, path_args: &HashMap<&'static str, Value>) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            match segment {
                PathSegment::Literal(text) => path.push_str(text),
                PathSegment::Param(name) => match path_args.get(name) {
                    Some(value) => path.push_str(&plain_string(value)),
                    None => {
                        path.push('{');
                        path.push_str(name);
                        path.push('}');
                    }
                },
            }
        }
        path
    }
}

/// Split a path template into literal chunks and `{param}` placeholders.
fn split_template(template: &'static str) -> Vec<PathSegment> {
    let mut segments = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let Some(close_offset) = rest[open..].find('}') else {
            break;
        };
        if open > 0 {
            segments.push(PathSegment::Literal(&rest[..open]));
        }
        segments.push(PathSegment::Param(&rest[open + 1..open + close_offset]));
        rest = &rest[open + close_offset + 1..];
    }
    if !rest.is_empty() {
        segments.push(PathSegment::Literal(rest));
    }
    segments
}

/// Dispatcher over one operations table and one transport.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    transport: HttpTransport,
    operations: OperationsMap,
    resolved: Arc<RwLock<HashMap<&'static str, Arc<ResolvedOperation>>>>,
}

impl Dispatcher {
    /// Create a dispatcher for the given table.
    pub fn new(transport: HttpTransport, operations: OperationsMap) -> Self {
        Self {
            transport,
            operations,
            resolved: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The transport this dispatcher delegates to.
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Names of all registered operations.
    pub fn operation_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operations.keys().copied()
    }

    /// Invoke an operation by name.
    ///
    /// Arguments named in the descriptor's path parameters are consumed to
    /// fill the path template; the remainder is sent as query parameters
    /// for GET/DELETE and as a JSON body for POST/PUT/PATCH.
    pub async fn invoke(&self, operation: &str, mut args: Map<String, Value>) -> Result<Value> {
        let resolved = self.resolve(operation)?;

        let mut path_args: HashMap<&'static str, Value> = HashMap::new();
        for name in resolved.path_params.iter().copied() {
            if let Some(value) = args.remove(name) {
                path_args.insert(name, value);
            }
        }
        let path = resolved.render_path(&path_args);
        tracing::debug!(operation, method = %resolved.method, path = %path, "dispatching operation");

        if resolved.method.sends_query() {
            self.transport
                .request(resolved.method, &path, Some(&args), None, None)
                .await
        } else {
            let body = Value::Object(args);
            self.transport
                .request(resolved.method, &path, None, Some(&body), None)
                .await
        }
    }

    /// Resolve an operation name, memoizing the result.
    fn resolve(&self, operation: &str) -> Result<Arc<ResolvedOperation>> {
        if let Ok(cache) = self.resolved.read() {
            if let Some(found) = cache.get(operation) {
                return Ok(found.clone());
            }
        }

        let (name, descriptor) = self
            .operations
            .get_key_value(operation)
            .ok_or_else(|| TcaError::UnknownOperation(operation.to_string()))?;
        let resolved = Arc::new(ResolvedOperation::from_descriptor(descriptor)?);

        if let Ok(mut cache) = self.resolved.write() {
            // Memoizing the same descriptor twice is idempotent; keep the
            // first entry so concurrent resolvers agree.
            return Ok(cache
                .entry(*name)
                .or_insert_with(|| resolved.clone())
                .clone());
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolved(path: &'static str, method: &'static str, params: &'static [&'static str]) -> ResolvedOperation {
        ResolvedOperation::from_descriptor(&Operation {
            path,
            method,
            path_params: params,
        })
        .unwrap()
    }

    #[test]
    fn split_template_without_params() {
        assert_eq!(
            split_template("/v2/companies"),
            vec![PathSegment::Literal("/v2/companies")]
        );
    }

    #[test]
    fn split_template_with_params() {
        assert_eq!(
            split_template("/v2/companies/{domain}/ask"),
            vec![
                PathSegment::Literal("/v2/companies/"),
                PathSegment::Param("domain"),
                PathSegment::Literal("/ask"),
            ]
        );
    }

    #[test]
    fn render_substitutes_supplied_params() {
        let op = resolved("/v2/companies/{domain}", "GET", &["domain"]);
        let mut args = HashMap::new();
        args.insert("domain", json!("x.com"));
        assert_eq!(op.render_path(&args), "/v2/companies/x.com");
    }

    #[test]
    fn render_keeps_placeholder_when_param_missing() {
        let op = resolved("/v2/companies/{domain}", "GET", &["domain"]);
        assert_eq!(op.render_path(&HashMap::new()), "/v2/companies/{domain}");
    }

    #[test]
    fn render_substitutes_numeric_params() {
        let op = resolved("/v2/lists/{listId}", "DELETE", &["listId"]);
        let mut args = HashMap::new();
        args.insert("listId", json!(42));
        assert_eq!(op.render_path(&args), "/v2/lists/42");
    }

    #[test]
    fn unsupported_method_is_configuration_error() {
        let err = ResolvedOperation::from_descriptor(&Operation {
            path: "/v2/companies",
            method: "TRACE",
            path_params: &[],
        })
        .unwrap_err();
        assert!(matches!(err, TcaError::Configuration(_)));
    }
}

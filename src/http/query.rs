//! Query parameter serialization.
//!
//! Mirrors the wire behavior of the deployed SDKs: primitives become their
//! plain string form, booleans serialize lowercase, `null` values are
//! dropped, and objects/arrays are serialized to compact JSON and
//! percent-encoded into a single string value. The HTTP client encodes
//! query values once more when building the URL, so JSON-valued parameters
//! are double-encoded on the wire; this is observable behavior that
//! existing captures and server-side logs depend on.

use serde_json::{Map, Value};

/// Serialize call arguments into query pairs.
///
/// `null` values never appear in the output.
pub fn serialize_query(params: &Map<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| {
            serialize_query_value(value).map(|serialized| (key.clone(), serialized))
        })
        .collect()
}

/// Serialize a single query value, or `None` for `null`.
pub fn serialize_query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => {
            // Compact JSON, then percent-encoded as a single value. Matches
            // encodeURIComponent(JSON.stringify(value)) in the JS SDK.
            let json = value.to_string();
            Some(urlencoding::encode(&json).into_owned())
        }
    }
}

/// Plain string form of a scalar, used for path-template substitution.
///
/// Strings substitute as-is (no quoting); everything else uses the same
/// form as query serialization.
pub fn plain_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

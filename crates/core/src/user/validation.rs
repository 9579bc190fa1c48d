//! Pure validation functions for username payloads.

use serde_json::Value;

/// Returns true if the value counts as missing for the create operation.
///
/// `null`, `false`, numeric zero, the empty string, the empty array, and
/// the empty object are all rejected; everything else is accepted.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        Value::Array(values) => values.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

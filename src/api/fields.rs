//! Loosely-typed field access for upstream JSON records.
//!
//! Upstream payloads drift often enough that every field is read optimistically:
//! a missing key, a `null`, or a value of an unexpected shape all count as absent
//! and the caller picks the default.

use serde_json::Value;

/// Read a scalar field as text. Numbers keep their JSON rendering (`84.5`, `500`).
pub fn text(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read a scalar field as text, falling back to `default`
pub fn text_or(record: &Value, key: &str, default: &str) -> String {
    text(record, key).unwrap_or_else(|| default.to_string())
}

/// Borrow an array field, if present
pub fn list<'a>(record: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    record.get(key).and_then(Value::as_array)
}

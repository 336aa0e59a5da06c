//! Helpers for sequences of untyped JSON values.
//!
//! The facade's dynamic entry points accept `serde_json::Value`; this module
//! supplies the array check and a documented total order so `order_by` can
//! sort heterogeneous values deterministically.

use std::cmp::Ordering;

use serde_json::Value;

use crate::error::{Error, Result};

/// Unwrap a JSON array into its elements, or fail with `InvalidInput`.
pub fn array_values(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(Error::InvalidInput(format!(
            "expected a JSON array, got {}",
            kind(&other)
        ))),
    }
}

/// Human-readable type name of a JSON value, for error messages.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Total order over JSON values: null < booleans < numbers < strings
/// < arrays < objects. Arrays compare elementwise then by length.
///
/// Objects are unordered and compare equal; a stable sort therefore keeps
/// their relative source order. Sort keys should target scalar fields.
pub fn total_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => number_cmp(x, y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => {
            for (xi, yi) in x.iter().zip(y.iter()) {
                match total_cmp(xi, yi) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            x.len().cmp(&y.len())
        }
        (Value::Object(_), Value::Object(_)) => Ordering::Equal,
        _ => rank(a).cmp(&rank(b)),
    }
}

fn number_cmp(x: &serde_json::Number, y: &serde_json::Number) -> Ordering {
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        // u64/i64 values outside the f64-exact range; fall back to text.
        _ => x.to_string().cmp(&y.to_string()),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

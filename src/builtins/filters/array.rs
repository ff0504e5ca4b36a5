/// Formatters operating on arrays
use serde_json::value::Value;

use crate::context::ValueRender;

/// Number of elements; anything that isn't an array counts as `0`.
pub fn count(value: &Value) -> String {
    match value {
        Value::Array(arr) => arr.len().to_string(),
        _ => "0".to_string(),
    }
}

/// Joins the rendered elements with `sep`. Other values render as usual.
pub fn join(value: &Value, sep: &str) -> String {
    match value {
        Value::Array(arr) => arr.iter().map(|v| v.render()).collect::<Vec<_>>().join(sep),
        _ => value.render().into_owned(),
    }
}

/// Splits the text on `pat` and joins the trimmed, non-empty pieces with commas.
pub fn split(s: &str, pat: &str) -> String {
    let tokens: Vec<&str> = if pat.trim().is_empty() {
        s.split_whitespace().collect()
    } else {
        s.split(pat).map(str::trim).filter(|t| !t.is_empty()).collect()
    };
    tokens.join(",")
}

/// Reverses the elements of an array or the characters of anything else.
pub fn reverse(value: &Value) -> String {
    match value {
        Value::Array(arr) => arr.iter().rev().map(|v| v.render()).collect::<Vec<_>>().join(","),
        _ => value.render().chars().rev().collect(),
    }
}

//! Step-text helpers for behavioural test suites.

use amalgam::{Number, Value};

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(trimmed)
}

/// Reads a scalar written in a feature file.
///
/// Quoted text is a string, `true`/`false` are booleans, `nil` is the absent
/// value, numerals are document numbers and everything else is an unquoted
/// string.
#[must_use]
pub fn scalar(value: &str) -> Value {
    let trimmed = value.trim();
    let unquoted = unquote(trimmed);
    if unquoted.len() != trimmed.len() {
        return Value::from(unquoted);
    }
    match trimmed {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "nil" => Value::Nil,
        other => other
            .parse::<i64>()
            .map(Number::from)
            .or_else(|_| other.parse::<f64>().map(Number::from))
            .map_or_else(|_| Value::from(other), Value::Number),
    }
}

//! Sample documents used across merge tests.
//!
//! # Examples
//!
//! ```
//! use amalgam::merge_mappings;
//! use amalgam_test_helpers::documents;
//!
//! let merged = merge_mappings(documents::target(), documents::source(), None)?;
//! assert_eq!(merged, documents::expected());
//! # Ok::<(), amalgam::MergeError>(())
//! ```

use amalgam::{Mapping, Value};
use serde_json::json;

/// Converts a `serde_json` literal into a dynamic mapping.
///
/// Non-object literals yield an empty mapping.
#[must_use]
pub fn mapping(doc: serde_json::Value) -> Mapping {
    match Value::from(doc) {
        Value::Mapping(mapping) => mapping,
        _ => Mapping::dynamic(),
    }
}

/// Target document with a nested mapping.
#[must_use]
pub fn target() -> Mapping {
    mapping(json!({
        "A": "wrong",
        "B": 1,
        "C": { "foo": "unchanged", "bar": "orig" },
    }))
}

/// Source document overriding and extending [`target`].
#[must_use]
pub fn source() -> Mapping {
    mapping(json!({
        "A": "correct",
        "B": 2,
        "C": { "bar": "newVal", "safe": "added" },
    }))
}

/// Result of merging [`source`] into [`target`] with overwrite enabled.
#[must_use]
pub fn expected() -> Mapping {
    mapping(json!({
        "A": "correct",
        "B": 2,
        "C": { "foo": "unchanged", "bar": "newVal", "safe": "added" },
    }))
}

/// Target whose nested value disagrees in type with [`mismatched_source`].
#[must_use]
pub fn mismatched_target() -> Mapping {
    mapping(json!({ "C": { "bar": "orig" } }))
}

/// Source carrying an integer where [`mismatched_target`] holds a string.
#[must_use]
pub fn mismatched_source() -> Mapping {
    mapping(json!({ "C": { "bar": 1 } }))
}

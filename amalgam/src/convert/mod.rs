//! Conversions between parsed documents and value trees.
//!
//! Callers parse their documents first; these conversions only reshape the
//! resulting trees. Objects and tables become mappings with dynamic slots,
//! arrays become sequences with dynamic elements.

#[cfg(feature = "serde_json")]
mod json;
mod serialize;
#[cfg(feature = "toml")]
mod toml_doc;

#[cfg(feature = "serde_json")]
pub(crate) use json::json_type_name;

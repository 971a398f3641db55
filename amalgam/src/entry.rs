//! Public merge entry points.
//!
//! Every entry point merges into a copy of the target and writes the result
//! back only once the whole merge has succeeded, so a failed merge leaves the
//! caller's target untouched.

use std::borrow::Cow;

use tracing::debug;

use crate::driver::merge_values;
use crate::error::{MergeError, MergeResult};
use crate::options::Options;
use crate::reflect::Reflect;
use crate::value::{Mapping, Value, ValueType};

fn resolve_options(options: Option<&Options>) -> Cow<'_, Options> {
    options.map_or_else(|| Cow::Owned(Options::new()), Cow::Borrowed)
}

fn check_result(expected: &ValueType, merged: &Value) -> MergeResult<()> {
    if expected.accepts(&merged.value_type()) {
        Ok(())
    } else {
        Err(MergeError::ResultType {
            expected: expected.clone(),
            found: merged.type_name(),
        })
    }
}

/// Merge `source` into the dynamic value `target`.
///
/// `None` for `options` behaves like [`Options::new`]. The merged value must
/// have the target's type (any type when the target is a dynamic slot
/// holding nothing typed).
///
/// # Errors
///
/// - [`MergeError::ZeroTarget`] when `target` is [`Value::Nil`].
/// - [`MergeError::ResultType`] when the result does not fit the target type.
/// - Any error raised while merging. `target` is left unchanged.
///
/// # Examples
///
/// ```
/// use amalgam::{Mapping, Value, ValueType, merge_value};
///
/// let mut target = Value::Mapping(Mapping::from_entries(ValueType::Any, [("A", "wrong")]));
/// let source = Value::Mapping(Mapping::from_entries(ValueType::Any, [("A", "correct")]));
/// merge_value(&mut target, source, None)?;
/// assert_eq!(target.pointer(&["A"]), Some(&Value::from("correct")));
/// # Ok::<(), amalgam::MergeError>(())
/// ```
pub fn merge_value(target: &mut Value, source: Value, options: Option<&Options>) -> MergeResult<()> {
    if matches!(target, Value::Nil) {
        return Err(MergeError::ZeroTarget);
    }
    let policy = resolve_options(options);
    let expected = target.value_type();
    debug!(
        target_type = %expected,
        overwrite = policy.overwrite,
        error_on_unexported = policy.error_on_unexported,
        "merging value"
    );
    let merged = merge_values(target.clone(), source, &policy)?;
    check_result(&expected, &merged)?;
    *target = merged;
    Ok(())
}

/// Merge `source` into the typed value `target`.
///
/// Both values are converted to [`Value`] trees through [`Reflect`], merged,
/// and the result converted back before it replaces `target`.
///
/// # Errors
///
/// - [`MergeError::ZeroTarget`] when `target` converts to [`Value::Nil`], as a
///   null [`Value`] or `serde_json::Value` does.
/// - [`MergeError::ResultType`] when the result does not have type `T`.
/// - [`MergeError::Conversion`] when the result cannot be turned back into
///   `T`.
/// - Any error raised while merging. `target` is left unchanged.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use amalgam::merge;
///
/// let mut limits = BTreeMap::from([(String::from("cpu"), 2_u32)]);
/// let overrides = BTreeMap::from([(String::from("memory"), 512_u32)]);
/// merge(&mut limits, overrides, None)?;
/// assert_eq!(limits.len(), 2);
/// # Ok::<(), amalgam::MergeError>(())
/// ```
pub fn merge<T>(target: &mut T, source: T, options: Option<&Options>) -> MergeResult<()>
where
    T: Reflect + Clone,
{
    let current = target.clone().into_value();
    if matches!(current, Value::Nil) {
        return Err(MergeError::ZeroTarget);
    }
    let policy = resolve_options(options);
    let expected = T::value_type();
    debug!(
        target_type = %expected,
        overwrite = policy.overwrite,
        error_on_unexported = policy.error_on_unexported,
        "merging typed value"
    );
    let merged = merge_values(current, source.into_value(), &policy)?;
    if !matches!(merged, Value::Nil) {
        check_result(&expected, &merged)?;
    }
    *target = T::from_value(merged)?;
    Ok(())
}

/// Merge two string-keyed mappings and return the merged mapping.
///
/// # Errors
///
/// Returns [`MergeError::NotAMapping`] when a custom merge function turns the
/// result into something other than a mapping, plus any error raised while
/// merging.
pub fn merge_mappings(
    target: Mapping,
    source: Mapping,
    options: Option<&Options>,
) -> MergeResult<Mapping> {
    let policy = resolve_options(options);
    debug!(
        target_keys = target.len(),
        source_keys = source.len(),
        overwrite = policy.overwrite,
        "merging mappings"
    );
    match merge_values(Value::Mapping(target), Value::Mapping(source), &policy)? {
        Value::Mapping(merged) => Ok(merged),
        other => Err(MergeError::NotAMapping {
            found: other.type_name(),
        }),
    }
}

/// Merge two JSON objects and return the merged object.
///
/// # Errors
///
/// Returns [`MergeError::NotAMapping`] when the merge does not produce an
/// object, [`MergeError::Conversion`] when the merged tree holds values JSON
/// cannot represent, plus any error raised while merging.
///
/// # Examples
///
/// ```
/// use amalgam::merge_json_objects;
/// use serde_json::json;
///
/// let defaults = json!({ "server": { "port": 80, "host": "localhost" } });
/// let overrides = json!({ "server": { "port": 8080 }, "debug": true });
/// let (Some(t), Some(s)) = (defaults.as_object(), overrides.as_object()) else {
///     unreachable!("literals are objects");
/// };
///
/// let merged = merge_json_objects(t.clone(), s.clone(), None)?;
/// assert_eq!(
///     serde_json::Value::Object(merged),
///     json!({ "server": { "port": 8080, "host": "localhost" }, "debug": true })
/// );
/// # Ok::<(), amalgam::MergeError>(())
/// ```
#[cfg(feature = "serde_json")]
pub fn merge_json_objects(
    target: serde_json::Map<String, serde_json::Value>,
    source: serde_json::Map<String, serde_json::Value>,
    options: Option<&Options>,
) -> MergeResult<serde_json::Map<String, serde_json::Value>> {
    let merged = merge_mappings(Mapping::from(target), Mapping::from(source), options)?;
    match serde_json::Value::try_from(Value::Mapping(merged))? {
        serde_json::Value::Object(object) => Ok(object),
        other => Err(MergeError::NotAMapping {
            found: crate::convert::json_type_name(&other).to_owned(),
        }),
    }
}

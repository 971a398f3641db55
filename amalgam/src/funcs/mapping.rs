//! Key-by-key mapping merge.

use tracing::trace;

use crate::driver::merge_values;
use crate::error::{MergeError, MergeResult};
use crate::options::Options;
use crate::result_ext::MergeResultExt;
use crate::value::{Kind, Value, ValueType};

/// Merge two mappings key by key.
///
/// An empty target yields the source wholesale. Otherwise every source entry
/// is visited in key order: empty source values are skipped so they never
/// erase a target value, keys missing from the target are inserted as they
/// are, and keys present on both sides are merged recursively through
/// [`merge_values`].
///
/// # Errors
///
/// - [`MergeError::UnexpectedKind`] when either side is not a mapping.
/// - [`MergeError::TypeMismatch`] when the declared slot types differ.
/// - Any nested failure, wrapped in [`MergeError::Key`]. A result the slot
///   type cannot hold is reported as [`MergeError::NotAssignable`].
///
/// # Examples
///
/// ```
/// use amalgam::{Mapping, Options, Value, merge_mapping};
///
/// let target = Mapping::from_entries(amalgam::ValueType::Any, [("A", Value::from("wrong"))]);
/// let source = Mapping::from_entries(amalgam::ValueType::Any, [("A", "correct"), ("B", "new")]);
///
/// let merged = merge_mapping(target.into(), source.into(), &Options::new())?;
/// assert_eq!(merged.pointer(&["A"]), Some(&Value::from("correct")));
/// assert_eq!(merged.pointer(&["B"]), Some(&Value::from("new")));
/// # Ok::<(), amalgam::MergeError>(())
/// ```
pub fn merge_mapping(target: Value, source: Value, options: &Options) -> MergeResult<Value> {
    let (mut merged, incoming) = match (target, source) {
        (Value::Mapping(target_map), Value::Mapping(source_map)) => (target_map, source_map),
        (other_target, other_source) => {
            return Err(MergeError::unexpected_kind(
                Kind::Mapping,
                &other_target,
                &other_source,
            ));
        }
    };
    if merged.value_type() != incoming.value_type() {
        return Err(MergeError::TypeMismatch {
            target_type: ValueType::mapping(merged.value_type().clone()).to_string(),
            source_type: ValueType::mapping(incoming.value_type().clone()).to_string(),
        });
    }
    if merged.is_empty() {
        trace!("target mapping is empty; taking source mapping");
        return Ok(Value::Mapping(incoming));
    }

    let slot = merged.value_type().clone();
    for (key, value) in incoming.into_entries() {
        if value.is_nil() {
            trace!(%key, "skipping empty source value");
            continue;
        }
        let Some(existing) = merged.remove(&key) else {
            trace!(%key, "inserting key missing from target");
            merged.insert(key, value);
            continue;
        };
        let result = merge_values(existing, value, options).at_key(&key)?;
        let found = result.value_type();
        if !slot.accepts(&found) {
            return Err(MergeError::NotAssignable {
                expected: slot,
                found,
            }
            .at_key(key));
        }
        merged.insert(key, result);
    }
    Ok(Value::Mapping(merged))
}

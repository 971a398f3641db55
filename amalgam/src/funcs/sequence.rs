//! Append-only sequence merge.

use crate::error::{MergeError, MergeResult};
use crate::options::Options;
use crate::value::{Kind, Value, ValueType};

/// Concatenate two sequences: target items followed by source items.
///
/// Items are never merged positionally and duplicates are kept.
///
/// # Errors
///
/// - [`MergeError::UnexpectedKind`] when either side is not a sequence.
/// - [`MergeError::SequenceTypeMismatch`] when the element types differ.
///
/// # Examples
///
/// ```
/// use amalgam::{Options, Sequence, Value, merge_sequence};
///
/// let target = Sequence::from_items(amalgam::ValueType::Any, [Value::from("unchanged"), Value::Int(0)]);
/// let source = Sequence::from_items(amalgam::ValueType::Any, [Value::from("added"), Value::Int(1)]);
///
/// let merged = merge_sequence(target.into(), source.into(), &Options::new())?;
/// assert_eq!(merged.as_sequence().map(Sequence::len), Some(4));
/// # Ok::<(), amalgam::MergeError>(())
/// ```
pub fn merge_sequence(target: Value, source: Value, _options: &Options) -> MergeResult<Value> {
    match (target, source) {
        (Value::Sequence(mut merged), Value::Sequence(incoming)) => {
            if merged.element_type() != incoming.element_type() {
                return Err(MergeError::SequenceTypeMismatch {
                    target_type: ValueType::sequence(merged.element_type().clone()),
                    source_type: ValueType::sequence(incoming.element_type().clone()),
                });
            }
            merged.extend(incoming);
            Ok(Value::Sequence(merged))
        }
        (other_target, other_source) => Err(MergeError::unexpected_kind(
            Kind::Sequence,
            &other_target,
            &other_source,
        )),
    }
}

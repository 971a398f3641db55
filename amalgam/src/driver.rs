//! The recursive merge driver.

use tracing::trace;

use crate::error::{MergeError, MergeResult};
use crate::options::Options;
use crate::value::Value;

/// Merge `source` into `target`, returning the result.
///
/// This is the single recursion point of the engine: the public entry points
/// call it once and the built-in merge functions call it for every nested
/// key, item or field, so the same rules apply at every depth.
///
/// 1. An empty source yields the target unchanged, even when the target is
///    empty too.
/// 2. An empty target yields the source.
/// 3. Values of different concrete types fail. Dynamic slots always hold
///    concrete values, so no unwrapping is needed.
/// 4. Otherwise the function resolved by the policy's selector decides.
///
/// # Errors
///
/// Returns [`MergeError::TypeMismatch`] for values of different types and
/// propagates any error raised by the resolved merge function unchanged.
///
/// # Examples
///
/// ```
/// use amalgam::{Options, Value, merge_values};
///
/// let options = Options::new();
/// assert_eq!(merge_values(Value::Int(1), Value::Nil, &options)?, Value::Int(1));
/// assert_eq!(merge_values(Value::Nil, Value::Int(2), &options)?, Value::Int(2));
/// assert!(merge_values(Value::Int(1), Value::from("x"), &options).is_err());
/// # Ok::<(), amalgam::MergeError>(())
/// ```
pub fn merge_values(target: Value, source: Value, options: &Options) -> MergeResult<Value> {
    if source.is_nil() {
        trace!("source is empty; keeping target");
        return Ok(target);
    }
    if target.is_nil() {
        trace!("target is empty; taking source");
        return Ok(source);
    }
    if target.value_type() != source.value_type() {
        return Err(MergeError::type_mismatch(&target, &source));
    }
    let func = options.selector().resolve(&target);
    func(target, source, options)
}

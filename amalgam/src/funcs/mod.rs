//! Built-in merge functions.
//!
//! [`crate::FunctionSelector::new`] registers [`merge_mapping`],
//! [`merge_sequence`] and [`merge_record`] by kind and [`default_merge`] as the
//! fallback. They are public so callers can re-register them on a custom
//! selector or call them from their own merge functions.

mod mapping;
mod record;
mod sequence;

pub use mapping::merge_mapping;
pub use record::merge_record;
pub use sequence::merge_sequence;

use crate::error::MergeResult;
use crate::options::Options;
use crate::value::Value;

/// Terminal merge behaviour: the source when overwriting, else the target.
///
/// # Errors
///
/// Never fails; the `Result` matches the merge function signature.
///
/// # Examples
///
/// ```
/// use amalgam::{Options, Value, default_merge};
///
/// let mut options = Options::new();
/// assert_eq!(default_merge(Value::Int(1), Value::Int(2), &options)?, Value::Int(2));
/// options.overwrite = false;
/// assert_eq!(default_merge(Value::Int(1), Value::Int(2), &options)?, Value::Int(1));
/// # Ok::<(), amalgam::MergeError>(())
/// ```
pub fn default_merge(target: Value, source: Value, options: &Options) -> MergeResult<Value> {
    Ok(if options.overwrite { source } else { target })
}

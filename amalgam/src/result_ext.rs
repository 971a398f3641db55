//! Extensions for attaching merge context to results concisely.
//!
//! These helpers replace repetitive `.map_err(|e| e.at_key(k))` chains inside
//! merge functions and turn foreign error types into [`MergeError::Custom`].
//!
//! - Use [`MergeResultExt::at_key`] and [`MergeResultExt::in_field`] to
//!   localise a nested failure.
//! - Use [`IntoMergeResult::into_merge`] inside custom merge functions whose
//!   helpers return their own error types.
//!
//! # Examples
//!
//! ```
//! use amalgam::{IntoMergeResult, MergeResult, Options, Value};
//!
//! fn parse_port(_: Value, source: Value, _: &Options) -> MergeResult<Value> {
//!     let text = source.as_str().unwrap_or_default();
//!     let port: u16 = text.parse().into_merge()?;
//!     Ok(Value::from(u64::from(port)))
//! }
//!
//! let err = parse_port(Value::Nil, Value::from("http"), &Options::new()).unwrap_err();
//! assert_eq!(err.to_string(), "invalid digit found in string");
//! ```

use crate::error::{MergeError, MergeResult};
use crate::value::RecordType;

/// Attach positional context to a failed merge.
pub trait MergeResultExt<T> {
    /// Localise an error to the mapping key `key`.
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`MergeError::Key`].
    fn at_key(self, key: &str) -> MergeResult<T>;

    /// Localise an error to `record.field`.
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`MergeError::Field`].
    fn in_field(self, record: RecordType, field: &'static str) -> MergeResult<T>;
}

impl<T> MergeResultExt<T> for MergeResult<T> {
    fn at_key(self, key: &str) -> MergeResult<T> {
        self.map_err(|err| err.at_key(key))
    }

    fn in_field(self, record: RecordType, field: &'static str) -> MergeResult<T> {
        self.map_err(|err| err.in_field(record, field))
    }
}

/// Generic extension for mapping any `Result<T, E>` into a [`MergeResult`].
pub trait IntoMergeResult<T> {
    /// Convert `Result<T, E>` into `MergeResult<T>` as a
    /// [`MergeError::Custom`].
    ///
    /// # Errors
    ///
    /// Propagates the original error boxed inside [`MergeError::Custom`].
    fn into_merge(self) -> MergeResult<T>;
}

impl<T, E> IntoMergeResult<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn into_merge(self) -> MergeResult<T> {
        self.map_err(MergeError::custom)
    }
}

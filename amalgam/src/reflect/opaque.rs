//! Opaque host values carried through a merge as handles.

use std::any::Any;

use super::Reflect;
use crate::error::{MergeError, MergeResult};
use crate::value::{Handle, HandleType, Value, ValueType};

/// Wraps a host type the engine cannot look into.
///
/// The wrapped value travels as a [`Handle`]: without a registered exact-type
/// merge function it merges like a scalar, so the overwrite flag decides
/// which side wins.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use amalgam::{MergeResult, Opaque, Options, Value, merge};
///
/// let mut options = Options::new();
/// options.set_type_merge_func_for::<Opaque<Duration>>(|t: Value, s: Value, _: &Options| -> MergeResult<Value> {
///     let longest = match (t.as_handle::<Duration>(), s.as_handle::<Duration>()) {
///         (Some(a), Some(b)) => (*a).max(*b),
///         _ => Duration::ZERO,
///     };
///     Ok(Opaque(longest).into())
/// });
///
/// let mut timeout = Opaque(Duration::from_secs(30));
/// merge(&mut timeout, Opaque(Duration::from_secs(5)), Some(&options))?;
/// assert_eq!(timeout.0, Duration::from_secs(30));
/// # Ok::<(), amalgam::MergeError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Opaque<T>(pub T);

impl<T> Reflect for Opaque<T>
where
    T: Any + Send + Sync + Clone,
{
    fn value_type() -> ValueType {
        ValueType::Handle(HandleType::of::<T>())
    }

    fn into_value(self) -> Value {
        Value::Handle(Handle::new(self.0))
    }

    fn from_value(value: Value) -> MergeResult<Self> {
        value.as_handle::<T>().cloned().map(Self).ok_or_else(|| {
            MergeError::conversion(HandleType::of::<T>().name(), value.type_name())
        })
    }
}

impl<T> From<Opaque<T>> for Value
where
    T: Any + Send + Sync + Clone,
{
    fn from(opaque: Opaque<T>) -> Self {
        opaque.into_value()
    }
}

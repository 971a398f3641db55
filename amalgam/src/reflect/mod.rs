//! Bridge between typed Rust values and the dynamic [`Value`] tree.
//!
//! [`Reflect`] is implemented here for scalars, strings, options, vectors
//! and string-keyed maps. Structs opt in through `#[derive(Record)]`; opaque
//! host types can travel through a merge wrapped in [`Opaque`].

mod opaque;

pub use opaque::Opaque;

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::{MergeError, MergeResult};
use crate::value::{Mapping, Optional, Sequence, Value, ValueType};

/// Conversion of a Rust type to and from a [`Value`] tree.
///
/// `value_type` must describe exactly the type of every value `into_value`
/// produces, since the engine compares types to decide whether two values can
/// be merged.
pub trait Reflect: Sized {
    /// Type of the values produced by [`Reflect::into_value`].
    fn value_type() -> ValueType;

    /// Convert into a value tree.
    fn into_value(self) -> Value;

    /// Rebuild from a value tree.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Conversion`] when `value` has the wrong shape or
    /// does not fit the type, or [`MergeError::MissingField`] when a record
    /// lacks a field.
    fn from_value(value: Value) -> MergeResult<Self>;
}

fn mismatch<T>(expected: &ValueType, found: &Value) -> MergeResult<T> {
    Err(MergeError::conversion(expected.to_string(), found.type_name()))
}

impl Reflect for bool {
    fn value_type() -> ValueType {
        ValueType::Bool
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: Value) -> MergeResult<Self> {
        match value {
            Value::Bool(flag) => Ok(flag),
            other => mismatch(&ValueType::Bool, &other),
        }
    }
}

macro_rules! reflect_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            fn value_type() -> ValueType {
                ValueType::Int
            }

            fn into_value(self) -> Value {
                Value::Int(i64::from(self))
            }

            fn from_value(value: Value) -> MergeResult<Self> {
                value
                    .as_i64()
                    .and_then(|number| Self::try_from(number).ok())
                    .map_or_else(
                        || Err(MergeError::conversion(stringify!($ty), value.type_name())),
                        Ok,
                    )
            }
        }
    )*};
}

macro_rules! reflect_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            fn value_type() -> ValueType {
                ValueType::Uint
            }

            fn into_value(self) -> Value {
                Value::Uint(u64::from(self))
            }

            fn from_value(value: Value) -> MergeResult<Self> {
                value
                    .as_u64()
                    .and_then(|number| Self::try_from(number).ok())
                    .map_or_else(
                        || Err(MergeError::conversion(stringify!($ty), value.type_name())),
                        Ok,
                    )
            }
        }
    )*};
}

reflect_signed!(i8, i16, i32, i64);
reflect_unsigned!(u8, u16, u32, u64);

impl Reflect for isize {
    fn value_type() -> ValueType {
        ValueType::Int
    }

    fn into_value(self) -> Value {
        i64::try_from(self).map_or(Value::Nil, Value::Int)
    }

    fn from_value(value: Value) -> MergeResult<Self> {
        value
            .as_i64()
            .and_then(|number| Self::try_from(number).ok())
            .map_or_else(|| mismatch(&ValueType::Int, &value), Ok)
    }
}

impl Reflect for usize {
    fn value_type() -> ValueType {
        ValueType::Uint
    }

    fn into_value(self) -> Value {
        u64::try_from(self).map_or(Value::Nil, Value::Uint)
    }

    fn from_value(value: Value) -> MergeResult<Self> {
        value
            .as_u64()
            .and_then(|number| Self::try_from(number).ok())
            .map_or_else(|| mismatch(&ValueType::Uint, &value), Ok)
    }
}

impl Reflect for f64 {
    fn value_type() -> ValueType {
        ValueType::Float
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: Value) -> MergeResult<Self> {
        match value {
            Value::Float(number) => Ok(number),
            Value::Number(number) => Ok(number.as_f64()),
            other => mismatch(&ValueType::Float, &other),
        }
    }
}

impl Reflect for f32 {
    fn value_type() -> ValueType {
        ValueType::Float
    }

    fn into_value(self) -> Value {
        Value::Float(f64::from(self))
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "f32 fields round-trip through f64 and narrow back on return"
    )]
    fn from_value(value: Value) -> MergeResult<Self> {
        match value {
            Value::Float(number) => Ok(number as Self),
            Value::Number(number) => Ok(number.as_f64() as Self),
            other => mismatch(&ValueType::Float, &other),
        }
    }
}

impl Reflect for String {
    fn value_type() -> ValueType {
        ValueType::String
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: Value) -> MergeResult<Self> {
        match value {
            Value::String(text) => Ok(text),
            other => mismatch(&ValueType::String, &other),
        }
    }
}

impl Reflect for Value {
    fn value_type() -> ValueType {
        ValueType::Any
    }

    fn into_value(self) -> Self {
        self
    }

    fn from_value(value: Self) -> MergeResult<Self> {
        Ok(value)
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn value_type() -> ValueType {
        ValueType::optional(T::value_type())
    }

    fn into_value(self) -> Value {
        Value::Optional(self.map_or_else(
            || Optional::none(T::value_type()),
            |inner| Optional::some(T::value_type(), inner.into_value()),
        ))
    }

    fn from_value(value: Value) -> MergeResult<Self> {
        match value {
            Value::Nil => Ok(None),
            Value::Optional(optional) => optional.into_inner().map(T::from_value).transpose(),
            other => mismatch(&Self::value_type(), &other),
        }
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn value_type() -> ValueType {
        ValueType::sequence(T::value_type())
    }

    fn into_value(self) -> Value {
        Value::Sequence(Sequence::from_items(
            T::value_type(),
            self.into_iter().map(Reflect::into_value),
        ))
    }

    fn from_value(value: Value) -> MergeResult<Self> {
        match value {
            Value::Nil => Ok(Self::new()),
            Value::Sequence(sequence) => sequence
                .into_items()
                .into_iter()
                .map(T::from_value)
                .collect(),
            other => mismatch(&Self::value_type(), &other),
        }
    }
}

fn into_mapping<T, I>(entries: I) -> Value
where
    T: Reflect,
    I: IntoIterator<Item = (String, T)>,
{
    Value::Mapping(Mapping::from_entries(
        T::value_type(),
        entries
            .into_iter()
            .map(|(key, entry)| (key, entry.into_value())),
    ))
}

fn from_mapping<T, C>(value: Value) -> MergeResult<C>
where
    T: Reflect,
    C: Default + FromIterator<(String, T)>,
{
    match value {
        Value::Nil => Ok(C::default()),
        Value::Mapping(mapping) => mapping
            .into_entries()
            .into_iter()
            .map(|(key, entry)| T::from_value(entry).map(|converted| (key, converted)))
            .collect(),
        other => mismatch(&ValueType::mapping(T::value_type()), &other),
    }
}

impl<T: Reflect> Reflect for BTreeMap<String, T> {
    fn value_type() -> ValueType {
        ValueType::mapping(T::value_type())
    }

    fn into_value(self) -> Value {
        into_mapping(self)
    }

    fn from_value(value: Value) -> MergeResult<Self> {
        from_mapping::<T, Self>(value)
    }
}

impl<T, S> Reflect for HashMap<String, T, S>
where
    T: Reflect,
    S: BuildHasher + Default,
{
    fn value_type() -> ValueType {
        ValueType::mapping(T::value_type())
    }

    fn into_value(self) -> Value {
        into_mapping(self)
    }

    fn from_value(value: Value) -> MergeResult<Self> {
        from_mapping::<T, Self>(value)
    }
}

#[cfg(feature = "serde_json")]
impl Reflect for serde_json::Value {
    fn value_type() -> ValueType {
        ValueType::Any
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }

    fn from_value(value: Value) -> MergeResult<Self> {
        Self::try_from(value)
    }
}

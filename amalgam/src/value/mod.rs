//! Dynamic value tree the merge engine operates on.
//!
//! Every merge works on [`Value`]s. Typed Rust data enters and leaves the tree
//! through [`crate::Reflect`]; parsed JSON and TOML documents enter through
//! `From` conversions.

mod containers;
mod number;
mod record;
mod types;

pub use containers::{Handle, Mapping, Optional, Sequence};
pub use number::Number;
pub use record::{Field, Record};
pub use types::{HandleType, Kind, RecordType, ValueType};

/// A node in the dynamic value tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absent value: a missing slot or a JSON `null`.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A floating point number.
    Float(f64),
    /// A number read from a parsed document.
    Number(Number),
    /// A string.
    String(String),
    /// A string-keyed mapping.
    Mapping(Mapping),
    /// An ordered sequence.
    Sequence(Sequence),
    /// A fixed-field record.
    Record(Record),
    /// One level of optional indirection.
    Optional(Optional),
    /// An opaque host value.
    Handle(Handle),
}

impl Value {
    /// Exact runtime type of the value.
    ///
    /// [`Value::Nil`] reports [`ValueType::Any`] because an absent value has
    /// no concrete type of its own.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Nil => ValueType::Any,
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Uint(_) => ValueType::Uint,
            Self::Float(_) => ValueType::Float,
            Self::Number(_) => ValueType::Number,
            Self::String(_) => ValueType::String,
            Self::Mapping(mapping) => ValueType::mapping(mapping.value_type().clone()),
            Self::Sequence(sequence) => ValueType::sequence(sequence.element_type().clone()),
            Self::Record(record) => ValueType::Record(record.record_type()),
            Self::Optional(optional) => ValueType::optional(optional.inner_type().clone()),
            Self::Handle(handle) => ValueType::Handle(handle.handle_type()),
        }
    }

    /// Structural category of the value; `None` for [`Value::Nil`].
    #[must_use]
    pub const fn kind(&self) -> Option<Kind> {
        Some(match self {
            Self::Nil => return None,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Float(_) => Kind::Float,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Mapping(_) => Kind::Mapping,
            Self::Sequence(_) => Kind::Sequence,
            Self::Record(_) => Kind::Record,
            Self::Optional(_) => Kind::Optional,
            Self::Handle(_) => Kind::Handle,
        })
    }

    /// Whether the value counts as empty for merge short-circuits.
    ///
    /// Nil values, nil mappings and sequences, unset optionals and unset
    /// handles are empty. A mapping or sequence with an entry table of length
    /// zero is *not* empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use amalgam::{Mapping, Value, ValueType};
    ///
    /// assert!(Value::Nil.is_nil());
    /// assert!(Value::Mapping(Mapping::nil(ValueType::Any)).is_nil());
    /// assert!(!Value::Mapping(Mapping::dynamic()).is_nil());
    /// assert!(!Value::Int(0).is_nil());
    /// ```
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Mapping(mapping) => mapping.is_nil(),
            Self::Sequence(sequence) => sequence.is_nil(),
            Self::Optional(optional) => optional.is_none(),
            Self::Handle(handle) => handle.is_none(),
            Self::Bool(_)
            | Self::Int(_)
            | Self::Uint(_)
            | Self::Float(_)
            | Self::Number(_)
            | Self::String(_)
            | Self::Record(_) => false,
        }
    }

    /// Name of the value's type for diagnostics; `nil` for [`Value::Nil`].
    #[must_use]
    pub fn type_name(&self) -> String {
        if matches!(self, Self::Nil) {
            String::from("nil")
        } else {
            self.value_type().to_string()
        }
    }

    /// Returns the boolean payload, if any.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the value as a signed integer when it fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            Self::Uint(number) => i64::try_from(*number).ok(),
            Self::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    /// Returns the value as an unsigned integer when it fits.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(number) => u64::try_from(*number).ok(),
            Self::Uint(number) => Some(*number),
            Self::Number(number) => number.as_u64(),
            _ => None,
        }
    }

    /// Returns the floating point payload, or a document number as `f64`.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(number) => Some(*number),
            Self::Number(number) => Some(number.as_f64()),
            _ => None,
        }
    }

    /// Returns the document number payload, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the mapping payload, if any.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the sequence payload, if any.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Returns the record payload, if any.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the optional payload, if any.
    #[must_use]
    pub const fn as_optional(&self) -> Option<&Optional> {
        match self {
            Self::Optional(optional) => Some(optional),
            _ => None,
        }
    }

    /// Borrows the host value of a set handle holding a `T`.
    #[must_use]
    pub fn as_handle<T: std::any::Any>(&self) -> Option<&T> {
        match self {
            Self::Handle(handle) => handle.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Follows the key path through nested mappings and records.
    ///
    /// # Examples
    ///
    /// ```
    /// use amalgam::{Mapping, Value};
    ///
    /// let mut inner = Mapping::dynamic();
    /// inner.insert("bar", "orig");
    /// let mut outer = Mapping::dynamic();
    /// outer.insert("C", inner);
    ///
    /// let doc = Value::Mapping(outer);
    /// assert_eq!(doc.pointer(&["C", "bar"]), Some(&Value::from("orig")));
    /// assert_eq!(doc.pointer(&["C", "missing"]), None);
    /// ```
    #[must_use]
    pub fn pointer(&self, path: &[&str]) -> Option<&Self> {
        path.iter().try_fold(self, |node, segment| match node {
            Self::Mapping(mapping) => mapping.get(segment),
            Self::Record(record) => record.get(segment),
            Self::Optional(optional) => optional.get().and_then(|inner| match inner {
                Self::Record(record) => record.get(segment),
                Self::Mapping(mapping) => mapping.get(segment),
                _ => None,
            }),
            _ => None,
        })
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<u64> for Value {
    fn from(number: u64) -> Self {
        Self::Uint(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        Self::Sequence(sequence)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Optional> for Value {
    fn from(optional: Optional) -> Self {
        Self::Optional(optional)
    }
}

impl From<Handle> for Value {
    fn from(handle: Handle) -> Self {
        Self::Handle(handle)
    }
}

#[cfg(test)]
mod tests;

//! Fixed-field records.

use super::{RecordType, Value, ValueType};
use crate::error::{MergeError, MergeResult};

/// A named field of a [`Record`].
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    name: &'static str,
    declared: ValueType,
    exported: bool,
    value: Value,
}

impl Field {
    /// An exported field named `name` declared as `declared`.
    #[must_use]
    pub const fn new(name: &'static str, declared: ValueType, value: Value) -> Self {
        Self {
            name,
            declared,
            exported: true,
            value,
        }
    }

    /// A field the merge engine may not set field-by-field.
    #[must_use]
    pub const fn unexported(name: &'static str, declared: ValueType, value: Value) -> Self {
        Self {
            name,
            declared,
            exported: false,
            value,
        }
    }

    /// Override whether the field is exported.
    #[must_use]
    pub const fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type of the field.
    #[must_use]
    pub const fn declared(&self) -> &ValueType {
        &self.declared
    }

    /// Whether the field may be merged field-by-field.
    #[must_use]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Replace the current value, returning the previous one.
    pub fn set_value(&mut self, value: Value) -> Value {
        std::mem::replace(&mut self.value, value)
    }

    /// Move the value out, leaving [`Value::Nil`] behind.
    pub fn take_value(&mut self) -> Value {
        std::mem::take(&mut self.value)
    }

    /// Consume the field, returning its value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// A fixed, named set of typed fields.
///
/// Records are normally produced by `#[derive(Record)]`, which lists every
/// field of a struct in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    record_type: RecordType,
    fields: Vec<Field>,
}

impl Record {
    /// Create a record of `record_type` with `fields`.
    #[must_use]
    pub const fn new(record_type: RecordType, fields: Vec<Field>) -> Self {
        Self {
            record_type,
            fields,
        }
    }

    /// Unwrap a record of `record_type` from `value`.
    ///
    /// Accepts the record directly or behind one level of optional
    /// indirection.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Conversion`] when `value` is not a record of the
    /// requested type.
    pub fn expect(value: Value, record_type: RecordType) -> MergeResult<Self> {
        match value {
            Value::Record(record) if record.record_type == record_type => Ok(record),
            Value::Optional(optional) if optional.get().is_some() => {
                let inner = optional.into_inner().unwrap_or_default();
                Self::expect(inner, record_type)
            }
            other => Err(MergeError::conversion(
                record_type.to_string(),
                other.type_name(),
            )),
        }
    }

    /// Type of the record.
    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Mutable access to the fields.
    pub fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }

    /// Consume the record, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    /// Value of the field named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.field(name).map(Field::value)
    }

    /// Field named `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// First field the engine may not set, if any.
    #[must_use]
    pub fn first_unexported(&self) -> Option<&Field> {
        self.fields.iter().find(|field| !field.exported)
    }

    /// Move the value of the field named `name` out of the record.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::MissingField`] when no such field exists.
    pub fn take_field(&mut self, name: &'static str) -> MergeResult<Value> {
        let record = self.record_type;
        self.fields
            .iter_mut()
            .find(|field| field.name == name)
            .map(Field::take_value)
            .ok_or(MergeError::MissingField {
                record,
                field: name,
            })
    }
}

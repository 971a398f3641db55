//! `toml` document conversions.

use toml::{Table, Value as Toml};

use crate::value::{Mapping, Number, Sequence, Value, ValueType};

/// Integers and floats both become [`Value::Number`], matching JSON documents.
/// Datetimes have no counterpart in the value tree and become strings in
/// their RFC 3339 form.
impl From<Toml> for Value {
    fn from(toml: Toml) -> Self {
        match toml {
            Toml::String(text) => Self::String(text),
            Toml::Integer(number) => Self::Number(Number::from(number)),
            Toml::Float(number) => Self::Number(Number::from(number)),
            Toml::Boolean(flag) => Self::Bool(flag),
            Toml::Datetime(datetime) => Self::String(datetime.to_string()),
            Toml::Array(items) => Self::Sequence(Sequence::from_items(
                ValueType::Any,
                items.into_iter().map(Self::from),
            )),
            Toml::Table(table) => Self::Mapping(Mapping::from(table)),
        }
    }
}

impl From<Table> for Mapping {
    fn from(table: Table) -> Self {
        Self::from_entries(
            ValueType::Any,
            table.into_iter().map(|(key, entry)| (key, Value::from(entry))),
        )
    }
}

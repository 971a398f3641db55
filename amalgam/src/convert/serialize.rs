use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::{Number, Value};

/// Records serialise as maps of their fields in declaration order. Nil values,
/// nil containers and handles serialise as unit.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil | Self::Handle(_) => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Int(number) => serializer.serialize_i64(*number),
            Self::Uint(number) => serializer.serialize_u64(*number),
            Self::Float(number) => serializer.serialize_f64(*number),
            Self::Number(number) => number.serialize(serializer),
            Self::String(text) => serializer.serialize_str(text),
            Self::Mapping(mapping) => match mapping.entries() {
                Some(entries) => serializer.collect_map(entries),
                None => serializer.serialize_unit(),
            },
            Self::Sequence(sequence) if sequence.is_nil() => serializer.serialize_unit(),
            Self::Sequence(sequence) => serializer.collect_seq(sequence.items()),
            Self::Record(record) => {
                let mut map = serializer.serialize_map(Some(record.fields().len()))?;
                for field in record.fields() {
                    map.serialize_entry(field.name(), field.value())?;
                }
                map.end()
            }
            Self::Optional(optional) => match optional.get() {
                Some(inner) => serializer.serialize_some(inner),
                None => serializer.serialize_none(),
            },
        }
    }
}

/// Integers serialise as integers and floats as floats, as they were read.
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(signed) = self.as_i64() {
            serializer.serialize_i64(signed)
        } else if let Some(unsigned) = self.as_u64() {
            serializer.serialize_u64(unsigned)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

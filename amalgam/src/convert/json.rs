//! `serde_json` document conversions.

use serde_json::{Map, Number as JsonNumber, Value as Json};

use crate::error::{MergeError, MergeResult};
use crate::value::{Mapping, Number, Sequence, Value, ValueType};

fn number_to_value(number: &JsonNumber) -> Value {
    if let Some(signed) = number.as_i64() {
        Value::Number(Number::from(signed))
    } else if let Some(unsigned) = number.as_u64() {
        Value::Number(Number::from(unsigned))
    } else {
        number
            .as_f64()
            .map_or(Value::Nil, |float| Value::Number(Number::from(float)))
    }
}

/// Every JSON number becomes a [`Value::Number`], so `1` and `0.5` under the
/// same key merge like any two values of one type.
impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Self::Nil,
            Json::Bool(flag) => Self::Bool(flag),
            Json::Number(number) => number_to_value(&number),
            Json::String(text) => Self::String(text),
            Json::Array(items) => Self::Sequence(Sequence::from_items(
                ValueType::Any,
                items.into_iter().map(Self::from),
            )),
            Json::Object(object) => Self::Mapping(Mapping::from(object)),
        }
    }
}

impl From<Map<String, Json>> for Mapping {
    fn from(object: Map<String, Json>) -> Self {
        Self::from_entries(
            ValueType::Any,
            object.into_iter().map(|(key, entry)| (key, Value::from(entry))),
        )
    }
}

impl TryFrom<Value> for Json {
    type Error = MergeError;

    fn try_from(value: Value) -> MergeResult<Self> {
        serde_json::to_value(&value)
            .map_err(|_| MergeError::conversion("JSON value", value.type_name()))
    }
}

pub(crate) const fn json_type_name(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

//! Field-by-field record merge.

use tracing::trace;

use crate::driver::merge_values;
use crate::error::{MergeError, MergeResult};
use crate::options::Options;
use crate::result_ext::MergeResultExt;
use crate::value::{Field, Kind, Optional, Record, RecordType, Value};

use super::default_merge;

/// Merge two records of the same type field by field.
///
/// Either side may be a record or a set optional wrapping one. When the target
/// is wrapped, the merged record is wrapped the same way.
///
/// Records with unexported fields cannot be merged field by field. With
/// [`Options::error_on_unexported`] unset they are merged as a whole through
/// [`default_merge`].
///
/// # Errors
///
/// - [`MergeError::UnexpectedKind`] when either side is not a record.
/// - [`MergeError::TypeMismatch`] when the record types differ.
/// - [`MergeError::UnexportedField`] when an unexported field is present and
///   [`Options::error_on_unexported`] is set.
/// - Any nested failure, wrapped in [`MergeError::Field`]. A nil result for a
///   concretely typed field is [`MergeError::InvalidResult`]; a result of
///   another type is [`MergeError::ResultType`].
pub fn merge_record(target: Value, source: Value, options: &Options) -> MergeResult<Value> {
    let (Some(record_type), Some(source_type)) = (record_type_of(&target), record_type_of(&source))
    else {
        return Err(MergeError::unexpected_kind(Kind::Record, &target, &source));
    };
    if record_type != source_type {
        return Err(MergeError::type_mismatch(&target, &source));
    }

    let unexported = unwrap_ref(&target)
        .and_then(Record::first_unexported)
        .map(Field::name);
    if let Some(field) = unexported {
        if options.error_on_unexported {
            return Err(MergeError::UnexportedField {
                record: record_type,
                field,
            });
        }
        trace!(%record_type, field, "record has unexported fields; merging as a whole");
        return default_merge(target, source, options);
    }

    let wrapper = match &target {
        Value::Optional(optional) => Some(optional.inner_type().clone()),
        _ => None,
    };
    let mut merged = Record::expect(target, record_type)?;
    let mut incoming = Record::expect(source, record_type)?;
    for field in merged.fields_mut() {
        let name = field.name();
        let source_value = incoming.take_field(name).in_field(record_type, name)?;
        let result = merge_values(field.take_value(), source_value, options)
            .and_then(|value| check_field_result(record_type, field, value))
            .in_field(record_type, name)?;
        field.set_value(result);
    }

    let record = Value::Record(merged);
    Ok(match wrapper {
        Some(inner) => Value::Optional(Optional::some(inner, record)),
        None => record,
    })
}

fn unwrap_ref(value: &Value) -> Option<&Record> {
    match value {
        Value::Record(record) => Some(record),
        Value::Optional(optional) => optional.get().and_then(Value::as_record),
        _ => None,
    }
}

fn record_type_of(value: &Value) -> Option<RecordType> {
    unwrap_ref(value).map(Record::record_type)
}

fn check_field_result(record: RecordType, field: &Field, value: Value) -> MergeResult<Value> {
    let declared = field.declared();
    if matches!(value, Value::Nil) {
        return if declared.is_any() {
            Ok(value)
        } else {
            Err(MergeError::InvalidResult {
                record,
                field: field.name(),
            })
        };
    }
    if declared.accepts(&value.value_type()) {
        Ok(value)
    } else {
        Err(MergeError::ResultType {
            expected: declared.clone(),
            found: value.type_name(),
        })
    }
}


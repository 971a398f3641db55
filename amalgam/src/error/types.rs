//! Primary error enum for merge flows.

use thiserror::Error;

use crate::value::{Kind, RecordType, ValueType};

/// Errors that abort a merge.
///
/// Nested failures are wrapped in [`MergeError::Key`] and
/// [`MergeError::Field`] so the message reads as a path to the fault, for
/// example ``key 'C': key 'bar': types do not match: string, int``.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    /// The target passed to a public entry point was the absent value.
    #[error("target can not be zero value")]
    ZeroTarget,

    /// Target and source have different concrete types.
    #[error("types do not match: {target_type}, {source_type}")]
    TypeMismatch {
        /// Type name of the target value.
        target_type: String,
        /// Type name of the source value.
        source_type: String,
    },

    /// A built-in merge function was applied to a value of the wrong kind.
    #[error("got non-{expected} value: target is {target_kind}, source is {source_kind}")]
    UnexpectedKind {
        /// Kind the merge function handles.
        expected: Kind,
        /// Type name of the target value.
        target_kind: String,
        /// Type name of the source value.
        source_kind: String,
    },

    /// Two sequences declare different element types.
    #[error("sequences must have the same type: {target_type}, {source_type}")]
    SequenceTypeMismatch {
        /// Type of the target sequence.
        target_type: ValueType,
        /// Type of the source sequence.
        source_type: ValueType,
    },

    /// A failure while merging the value stored under a mapping key.
    #[error("key '{key}': {source}")]
    Key {
        /// Mapping key being merged.
        key: String,
        /// Failure raised for that key.
        #[source]
        source: Box<MergeError>,
    },

    /// A failure while merging a record field.
    #[error("failed to merge field `{record}.{field}`: {source}")]
    Field {
        /// Record containing the field.
        record: RecordType,
        /// Field being merged.
        field: &'static str,
        /// Failure raised for that field.
        #[source]
        source: Box<MergeError>,
    },

    /// A record holds a field the engine may not set.
    #[error("record of type {record} has unexported field: {field}")]
    UnexportedField {
        /// Record containing the field.
        record: RecordType,
        /// Name of the unexported field.
        field: &'static str,
    },

    /// A mapping slot cannot hold the merged value.
    #[error("value of type {found} is not assignable to type {expected}")]
    NotAssignable {
        /// Declared slot type.
        expected: ValueType,
        /// Type of the merged value.
        found: ValueType,
    },

    /// A merge function returned the absent value for a concretely typed
    /// record field.
    #[error("merged value is invalid")]
    InvalidResult {
        /// Record containing the field.
        record: RecordType,
        /// Field that received the absent value.
        field: &'static str,
    },

    /// A merge result does not have the type required where it is stored.
    #[error("merge failed: expected merged result to be {expected} but got {found}")]
    ResultType {
        /// Required type.
        expected: ValueType,
        /// Type name of the value actually produced.
        found: String,
    },

    /// A mapping merge did not produce a mapping.
    #[error("expected merged result to be a mapping but got {found}")]
    NotAMapping {
        /// Type name of the value actually produced.
        found: String,
    },

    /// A value could not be converted into the requested Rust type.
    #[error("cannot convert {found} into {expected}")]
    Conversion {
        /// Name of the requested type.
        expected: String,
        /// Type name of the value supplied.
        found: String,
    },

    /// A record value lacks a field its Rust type declares.
    #[error("record of type {record} has no field `{field}`")]
    MissingField {
        /// Record being converted.
        record: RecordType,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A failure raised by a user-supplied merge function.
    #[error("{source}")]
    Custom {
        /// Error reported by the merge function.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result alias used throughout the crate.
pub type MergeResult<T> = Result<T, MergeError>;

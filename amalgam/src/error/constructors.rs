//! Convenience constructors for `MergeError`.

use super::MergeError;
use crate::value::{Kind, RecordType, Value};

impl MergeError {
    /// Wrap an arbitrary error raised by a custom merge function.
    ///
    /// # Examples
    ///
    /// ```
    /// use amalgam::MergeError;
    ///
    /// let err = MergeError::custom("returns error");
    /// assert_eq!(err.to_string(), "returns error");
    /// ```
    #[must_use]
    pub fn custom<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Custom {
            source: error.into(),
        }
    }

    /// Type mismatch between `target` and `source`.
    #[must_use]
    pub fn type_mismatch(target: &Value, source: &Value) -> Self {
        Self::TypeMismatch {
            target_type: target.type_name(),
            source_type: source.type_name(),
        }
    }

    /// A merge function for `expected` values received something else.
    #[must_use]
    pub fn unexpected_kind(expected: Kind, target: &Value, source: &Value) -> Self {
        Self::UnexpectedKind {
            expected,
            target_kind: target.type_name(),
            source_kind: source.type_name(),
        }
    }

    /// A value of type `found` could not become `expected`.
    #[must_use]
    pub fn conversion(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::Conversion {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Localise this error to the mapping key `key`.
    #[must_use]
    pub fn at_key(self, key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            source: Box::new(self),
        }
    }

    /// Localise this error to `record.field`.
    #[must_use]
    pub fn in_field(self, record: RecordType, field: &'static str) -> Self {
        Self::Field {
            record,
            field,
            source: Box::new(self),
        }
    }

    /// Innermost error once key and field context is stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use amalgam::MergeError;
    ///
    /// let err = MergeError::ZeroTarget.at_key("b").at_key("a");
    /// assert_eq!(err.to_string(), "key 'a': key 'b': target can not be zero value");
    /// assert!(matches!(err.root(), MergeError::ZeroTarget));
    /// ```
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Key { source, .. } | Self::Field { source, .. } => source.root(),
            other => other,
        }
    }

    /// Mapping keys and record fields leading to the innermost error,
    /// outermost first.
    #[must_use]
    pub fn path(&self) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = self;
        loop {
            match current {
                Self::Key { key, source } => {
                    segments.push(key.clone());
                    current = &**source;
                }
                Self::Field {
                    record,
                    field,
                    source,
                } => {
                    segments.push(format!("{record}.{field}"));
                    current = &**source;
                }
                _ => return segments,
            }
        }
    }
}

//! Type descriptors used for merge dispatch and compatibility checks.

use std::any::{Any, TypeId, type_name};
use std::fmt;

/// Identity of a record type.
///
/// Records compare by their full Rust type path and display by their short
/// name, so two structs called `Config` in different modules never collide.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RecordType {
    name: &'static str,
    path: &'static str,
}

impl RecordType {
    /// Build a record type from a display name and a unique type path.
    #[must_use]
    pub const fn new(name: &'static str, path: &'static str) -> Self {
        Self { name, path }
    }

    /// Build the record type describing `T`, displayed as `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use amalgam::RecordType;
    ///
    /// struct Server;
    /// let ty = RecordType::of::<Server>("Server");
    /// assert_eq!(ty.to_string(), "Server");
    /// assert!(ty.path().ends_with("Server"));
    /// ```
    #[must_use]
    pub fn of<T: ?Sized>(name: &'static str) -> Self {
        Self::new(name, type_name::<T>())
    }

    /// Short name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Fully qualified path identifying the record type.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Identity of an opaque host type carried by a [`crate::Handle`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HandleType {
    name: &'static str,
    id: TypeId,
}

impl HandleType {
    /// Describe the host type `T`.
    #[must_use]
    pub fn of<T: Any>() -> Self {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Rust type name of the handle's payload.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// [`TypeId`] of the handle's payload.
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }
}

impl fmt::Display for HandleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Exact runtime type of a [`crate::Value`].
///
/// Used as the key for exact-type merge function registration and for every
/// type-compatibility check the engine performs. [`ValueType::Any`] describes a
/// dynamic slot that can hold a value of any concrete type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ValueType {
    /// A dynamic slot accepting any concrete type.
    Any,
    /// Booleans.
    Bool,
    /// Signed integers.
    Int,
    /// Unsigned integers.
    Uint,
    /// Floating point numbers.
    Float,
    /// Numbers read from parsed documents.
    Number,
    /// UTF-8 strings.
    String,
    /// String-keyed mappings whose slots hold the given type.
    Mapping(Box<ValueType>),
    /// Ordered sequences of the given element type.
    Sequence(Box<ValueType>),
    /// Records of the given type.
    Record(RecordType),
    /// Optional values of the given inner type.
    Optional(Box<ValueType>),
    /// Opaque host values.
    Handle(HandleType),
}

impl ValueType {
    /// Mapping type with slots of type `values`.
    #[must_use]
    pub fn mapping(values: Self) -> Self {
        Self::Mapping(Box::new(values))
    }

    /// Sequence type with elements of type `items`.
    #[must_use]
    pub fn sequence(items: Self) -> Self {
        Self::Sequence(Box::new(items))
    }

    /// Optional type wrapping `inner`.
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Structural category of the type; `None` for [`ValueType::Any`].
    #[must_use]
    pub const fn kind(&self) -> Option<Kind> {
        Some(match self {
            Self::Any => return None,
            Self::Bool => Kind::Bool,
            Self::Int => Kind::Int,
            Self::Uint => Kind::Uint,
            Self::Float => Kind::Float,
            Self::Number => Kind::Number,
            Self::String => Kind::String,
            Self::Mapping(_) => Kind::Mapping,
            Self::Sequence(_) => Kind::Sequence,
            Self::Record(_) => Kind::Record,
            Self::Optional(_) => Kind::Optional,
            Self::Handle(_) => Kind::Handle,
        })
    }

    /// Returns `true` for the dynamic slot type.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Whether a value of type `found` may be stored in a slot of this type.
    ///
    /// # Examples
    ///
    /// ```
    /// use amalgam::ValueType;
    ///
    /// assert!(ValueType::Any.accepts(&ValueType::Int));
    /// assert!(ValueType::String.accepts(&ValueType::String));
    /// assert!(!ValueType::String.accepts(&ValueType::Int));
    /// ```
    #[must_use]
    pub fn accepts(&self, found: &Self) -> bool {
        self.is_any() || self == found
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Uint => f.write_str("uint"),
            Self::Float => f.write_str("float"),
            Self::Number => f.write_str("number"),
            Self::String => f.write_str("string"),
            Self::Mapping(values) => write!(f, "map<string, {values}>"),
            Self::Sequence(items) => write!(f, "seq<{items}>"),
            Self::Record(record) => fmt::Display::fmt(record, f),
            Self::Optional(inner) => write!(f, "option<{inner}>"),
            Self::Handle(handle) => fmt::Display::fmt(handle, f),
        }
    }
}

/// Structural category of a value, the fallback dispatch key.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Booleans.
    Bool,
    /// Signed integers.
    Int,
    /// Unsigned integers.
    Uint,
    /// Floating point numbers.
    Float,
    /// Document numbers.
    Number,
    /// Strings.
    String,
    /// String-keyed mappings.
    Mapping,
    /// Ordered sequences.
    Sequence,
    /// Fixed-field records.
    Record,
    /// Optional (pointer-like) values.
    Optional,
    /// Opaque host values.
    Handle,
}

impl Kind {
    /// Lower-case name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Number => "number",
            Self::String => "string",
            Self::Mapping => "mapping",
            Self::Sequence => "sequence",
            Self::Record => "record",
            Self::Optional => "optional",
            Self::Handle => "handle",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

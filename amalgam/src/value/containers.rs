//! Mapping, sequence, optional and handle payloads of [`Value`].

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::{HandleType, Value, ValueType};

/// A string-keyed mapping with a declared slot type.
///
/// The entry table is optional: a *nil* mapping has no table at all and counts
/// as empty, whereas a mapping with a table of length zero does not.
#[derive(Clone, Debug, PartialEq)]
pub struct Mapping {
    value_type: ValueType,
    entries: Option<BTreeMap<String, Value>>,
}

impl Mapping {
    /// Create an empty mapping whose slots hold `value_type`.
    #[must_use]
    pub const fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            entries: Some(BTreeMap::new()),
        }
    }

    /// Create a nil mapping whose slots would hold `value_type`.
    #[must_use]
    pub const fn nil(value_type: ValueType) -> Self {
        Self {
            value_type,
            entries: None,
        }
    }

    /// Create an empty mapping with dynamic (`any`) slots, the shape of a
    /// parsed document.
    #[must_use]
    pub const fn dynamic() -> Self {
        Self::new(ValueType::Any)
    }

    /// Create a mapping from key/value pairs.
    #[must_use]
    pub fn from_entries<I, K, V>(value_type: ValueType, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            value_type,
            entries: Some(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }

    /// Declared type of the mapping's slots.
    #[must_use]
    pub const fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    /// Returns `true` when the mapping has no entry table.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.entries.is_none()
    }

    /// Number of entries; zero for a nil mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, BTreeMap::len)
    }

    /// Returns `true` when the mapping is nil or has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.as_ref().and_then(|entries| entries.get(key))
    }

    /// Returns `true` when `key` has an entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Store `value` under `key`, creating the entry table of a nil mapping.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into())
    }

    /// Remove and return the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.as_mut().and_then(|entries| entries.remove(key))
    }

    /// Iterate over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter().flatten()
    }

    /// Borrow the entry table; `None` for a nil mapping.
    #[must_use]
    pub const fn entries(&self) -> Option<&BTreeMap<String, Value>> {
        self.entries.as_ref()
    }

    /// Consume the mapping, returning its entries; empty for a nil mapping.
    #[must_use]
    pub fn into_entries(self) -> BTreeMap<String, Value> {
        self.entries.unwrap_or_default()
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::from_entries(ValueType::Any, iter)
    }
}

/// An ordered sequence with a declared element type.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    element_type: ValueType,
    items: Option<Vec<Value>>,
}

impl Sequence {
    /// Create an empty sequence of `element_type`.
    #[must_use]
    pub const fn new(element_type: ValueType) -> Self {
        Self {
            element_type,
            items: Some(Vec::new()),
        }
    }

    /// Create a nil sequence of `element_type`.
    #[must_use]
    pub const fn nil(element_type: ValueType) -> Self {
        Self {
            element_type,
            items: None,
        }
    }

    /// Create a sequence holding `items`.
    #[must_use]
    pub fn from_items<I, V>(element_type: ValueType, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            element_type,
            items: Some(items.into_iter().map(Into::into).collect()),
        }
    }

    /// Declared element type.
    #[must_use]
    pub const fn element_type(&self) -> &ValueType {
        &self.element_type
    }

    /// Returns `true` when the sequence has no item table.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.items.is_none()
    }

    /// Number of items; zero for a nil sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    /// Returns `true` when the sequence is nil or has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the items; an empty slice for a nil sequence.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Append `value`, creating the item table of a nil sequence.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.get_or_insert_with(Vec::new).push(value.into());
    }

    /// Append every item of `other` after the existing items.
    pub fn extend(&mut self, other: Self) {
        if let Some(tail) = other.items {
            self.items.get_or_insert_with(Vec::new).extend(tail);
        }
    }

    /// Consume the sequence, returning its items; empty for a nil sequence.
    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        self.items.unwrap_or_default()
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_items(ValueType::Any, iter)
    }
}

/// One level of optional indirection around a value of `inner` type.
#[derive(Clone, Debug, PartialEq)]
pub struct Optional {
    inner: ValueType,
    value: Option<Box<Value>>,
}

impl Optional {
    /// An unset optional of `inner` type.
    #[must_use]
    pub const fn none(inner: ValueType) -> Self {
        Self { inner, value: None }
    }

    /// A set optional of `inner` type holding `value`.
    #[must_use]
    pub fn some(inner: ValueType, value: Value) -> Self {
        Self {
            inner,
            value: Some(Box::new(value)),
        }
    }

    /// Declared type of the wrapped value.
    #[must_use]
    pub const fn inner_type(&self) -> &ValueType {
        &self.inner
    }

    /// Returns `true` when unset.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the wrapped value.
    #[must_use]
    pub fn get(&self) -> Option<&Value> {
        self.value.as_deref()
    }

    /// Consume the optional, returning the wrapped value.
    #[must_use]
    pub fn into_inner(self) -> Option<Value> {
        self.value.map(|boxed| *boxed)
    }
}

/// An opaque host value tagged with its Rust type.
///
/// Handles let callers route domain types the engine cannot see into (such as
/// timestamps or error objects) through exact-type merge functions.
#[derive(Clone)]
pub struct Handle {
    handle_type: HandleType,
    value: Option<Arc<dyn Any + Send + Sync>>,
}

impl Handle {
    /// Wrap `value`.
    #[must_use]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            handle_type: HandleType::of::<T>(),
            value: Some(Arc::new(value)),
        }
    }

    /// An unset handle for type `T`.
    #[must_use]
    pub fn none<T: Any>() -> Self {
        Self {
            handle_type: HandleType::of::<T>(),
            value: None,
        }
    }

    /// Type of the wrapped host value.
    #[must_use]
    pub const fn handle_type(&self) -> HandleType {
        self.handle_type
    }

    /// Returns `true` when unset.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the wrapped value as `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value
            .as_ref()
            .and_then(|shared| (**shared).downcast_ref::<T>())
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("handle_type", &self.handle_type.name())
            .field("set", &self.value.is_some())
            .finish()
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.handle_type == other.handle_type
            && match (&self.value, &other.value) {
                (Some(lhs), Some(rhs)) => Arc::ptr_eq(lhs, rhs),
                (None, None) => true,
                _ => false,
            }
    }
}

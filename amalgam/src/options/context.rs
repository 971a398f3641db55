//! Type-indexed pass-through bag carried by [`super::Options`].

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Opaque values merge functions may read while a merge runs.
///
/// The engine never inspects the bag. Custom merge functions read entries by
/// type and may hand a derived policy with extra entries to nested calls via
/// [`super::Options::with_context`].
#[derive(Clone, Default)]
pub struct Context {
    entries: HashMap<TypeId, (&'static str, Arc<dyn Any + Send + Sync>)>,
}

impl Context {
    /// An empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, replacing any previous entry of the same type.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) {
        self.entries
            .insert(TypeId::of::<T>(), (type_name::<T>(), Arc::new(value)));
    }

    /// Builder form of [`Context::insert`].
    #[must_use]
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Borrow the entry of type `T`.
    #[must_use]
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|(_, shared)| (**shared).downcast_ref::<T>())
    }

    /// Returns `true` when an entry of type `T` is present.
    #[must_use]
    pub fn contains<T: Any>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the bag holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.entries.values().map(|(name, _)| name))
            .finish()
    }
}

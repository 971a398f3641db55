//! Merge policy: flags, registered merge functions and the context bag.

mod context;
mod settings;

pub use context::Context;
pub use settings::MergeSettings;

use std::any::Any;

use crate::error::MergeResult;
use crate::reflect::Reflect;
use crate::selector::FunctionSelector;
use crate::value::{Kind, Value, ValueType};

/// Policy consulted by every merge call.
///
/// A fresh policy overwrites leaf values, tolerates unexported record fields
/// and routes mappings, sequences and records to the built-in merge
/// functions. Each policy owns its own [`FunctionSelector`], so independent
/// merges never observe each other's registrations.
///
/// # Examples
///
/// ```
/// use amalgam::{Kind, MergeResult, Options, Value, merge_value};
///
/// let mut options = Options::new();
/// options.set_kind_merge_func(Kind::Int, |t: Value, s: Value, _: &Options| -> MergeResult<Value> {
///     Ok(Value::Int(t.as_i64().unwrap_or(0) + s.as_i64().unwrap_or(0)))
/// });
///
/// let mut total = Value::Int(2);
/// merge_value(&mut total, Value::Int(3), Some(&options))?;
/// assert_eq!(total, Value::Int(5));
/// # Ok::<(), amalgam::MergeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Options {
    /// Whether source values replace target values at the leaves.
    pub overwrite: bool,
    /// Whether records with unexported fields fail instead of merging as a
    /// whole.
    pub error_on_unexported: bool,
    selector: FunctionSelector,
    context: Context,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    /// Default policy with the built-in merge functions registered.
    #[must_use]
    pub fn new() -> Self {
        Self::from_settings(MergeSettings::default())
    }

    /// Default policy carrying the flags in `settings`.
    #[must_use]
    pub fn from_settings(settings: MergeSettings) -> Self {
        Self {
            overwrite: settings.overwrite,
            error_on_unexported: settings.error_on_unexported,
            selector: FunctionSelector::new(),
            context: Context::new(),
        }
    }

    /// Current flags as serialisable settings.
    #[must_use]
    pub const fn settings(&self) -> MergeSettings {
        MergeSettings {
            overwrite: self.overwrite,
            error_on_unexported: self.error_on_unexported,
        }
    }

    /// Use `func` for every value whose exact type is `value_type`.
    pub fn set_type_merge_func<F>(&mut self, value_type: ValueType, func: F)
    where
        F: Fn(Value, Value, &Self) -> MergeResult<Value> + Send + Sync + 'static,
    {
        self.selector.set_type_merge_func(value_type, func);
    }

    /// Use `func` for every value of the Rust type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use amalgam::{MergeResult, Options, Value, merge};
    ///
    /// let mut options = Options::new();
    /// options.set_type_merge_func_for::<Vec<String>>(|_: Value, s: Value, _: &Options| -> MergeResult<Value> {
    ///     Ok(s)
    /// });
    ///
    /// let mut hosts = vec![String::from("a")];
    /// merge(&mut hosts, vec![String::from("b")], Some(&options))?;
    /// assert_eq!(hosts, vec![String::from("b")]);
    /// # Ok::<(), amalgam::MergeError>(())
    /// ```
    ///
    /// Functions are keyed by exact type, never by trait. To give every type
    /// implementing some trait the same behaviour, register the function once
    /// per implementing type, or carry the values as
    /// [`Opaque`](crate::Opaque) handles and register for each `Opaque<T>`.
    /// A generic helper keeps the registrations in one place:
    ///
    /// ```
    /// use amalgam::{MergeResult, Options, Reflect, Value, merge};
    ///
    /// fn keep_existing<T: Reflect>(options: &mut Options) {
    ///     options.set_type_merge_func_for::<T>(|t: Value, _: Value, _: &Options| -> MergeResult<Value> {
    ///         Ok(t)
    ///     });
    /// }
    ///
    /// let mut options = Options::new();
    /// keep_existing::<Vec<u8>>(&mut options);
    /// keep_existing::<Vec<String>>(&mut options);
    ///
    /// let mut bytes = vec![1_u8];
    /// merge(&mut bytes, vec![2], Some(&options))?;
    /// assert_eq!(bytes, vec![1]);
    ///
    /// let mut names = vec![String::from("a")];
    /// merge(&mut names, vec![String::from("b")], Some(&options))?;
    /// assert_eq!(names, vec![String::from("a")]);
    /// # Ok::<(), amalgam::MergeError>(())
    /// ```
    pub fn set_type_merge_func_for<T: Reflect>(
        &mut self,
        func: impl Fn(Value, Value, &Self) -> MergeResult<Value> + Send + Sync + 'static,
    ) {
        self.set_type_merge_func(T::value_type(), func);
    }

    /// Use `func` for every value of structural category `kind` that has no
    /// exact-type function.
    pub fn set_kind_merge_func<F>(&mut self, kind: Kind, func: F)
    where
        F: Fn(Value, Value, &Self) -> MergeResult<Value> + Send + Sync + 'static,
    {
        self.selector.set_kind_merge_func(kind, func);
    }

    /// Use `func` for every value without a type or kind function.
    pub fn set_default_merge_func<F>(&mut self, func: F)
    where
        F: Fn(Value, Value, &Self) -> MergeResult<Value> + Send + Sync + 'static,
    {
        self.selector.set_default_merge_func(func);
    }

    /// Function registry consulted for each merge step.
    #[must_use]
    pub const fn selector(&self) -> &FunctionSelector {
        &self.selector
    }

    /// Mutable access to the function registry.
    pub const fn selector_mut(&mut self) -> &mut FunctionSelector {
        &mut self.selector
    }

    /// Replace the function registry wholesale.
    #[must_use]
    pub fn with_selector(mut self, selector: FunctionSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Pass-through values available to merge functions.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Derived policy whose context also carries `value`.
    ///
    /// Custom merge functions use this to hand extra state to the nested
    /// merges they start, leaving the caller's policy untouched.
    #[must_use]
    pub fn with_context<T: Any + Send + Sync>(&self, value: T) -> Self {
        let mut derived = self.clone();
        derived.context.insert(value);
        derived
    }
}

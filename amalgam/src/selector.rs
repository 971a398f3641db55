//! Resolution of the merge function for a value.
//!
//! Lookup runs through a fixed precedence chain: an exact [`ValueType`]
//! registration wins over a [`Kind`] registration, which wins over the
//! selector's own default, which wins over [`default_merge`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::MergeResult;
use crate::funcs::{default_merge, merge_mapping, merge_record, merge_sequence};
use crate::options::Options;
use crate::value::{Kind, Value, ValueType};

/// A merge function: combines a target and a source under a policy.
///
/// Both inputs are taken by value; the returned value is the merge result.
/// Functions may recurse through [`crate::merge_values`] and any error they
/// return aborts the whole merge.
pub type MergeFunc = Arc<dyn Fn(Value, Value, &Options) -> MergeResult<Value> + Send + Sync>;

/// Registry of merge functions keyed by exact type and by kind.
///
/// [`FunctionSelector::default`] is an empty registry that still resolves
/// every value through the global default; [`FunctionSelector::new`] comes
/// with the built-in mapping, sequence and record functions.
#[derive(Clone, Default)]
pub struct FunctionSelector {
    by_type: HashMap<ValueType, MergeFunc>,
    by_kind: HashMap<Kind, MergeFunc>,
    default: Option<MergeFunc>,
}

impl FunctionSelector {
    /// Registry with the built-in merge functions installed.
    #[must_use]
    pub fn new() -> Self {
        let mut selector = Self::default();
        selector.set_kind_merge_func(Kind::Mapping, merge_mapping);
        selector.set_kind_merge_func(Kind::Sequence, merge_sequence);
        selector.set_kind_merge_func(Kind::Record, merge_record);
        selector.set_default_merge_func(default_merge);
        selector
    }

    /// Register `func` for values whose exact type is `value_type`.
    pub fn set_type_merge_func<F>(&mut self, value_type: ValueType, func: F)
    where
        F: Fn(Value, Value, &Options) -> MergeResult<Value> + Send + Sync + 'static,
    {
        self.by_type.insert(value_type, Arc::new(func));
    }

    /// Register `func` for values of category `kind`.
    pub fn set_kind_merge_func<F>(&mut self, kind: Kind, func: F)
    where
        F: Fn(Value, Value, &Options) -> MergeResult<Value> + Send + Sync + 'static,
    {
        self.by_kind.insert(kind, Arc::new(func));
    }

    /// Register the fallback used when no type or kind function matches.
    pub fn set_default_merge_func<F>(&mut self, func: F)
    where
        F: Fn(Value, Value, &Options) -> MergeResult<Value> + Send + Sync + 'static,
    {
        self.default = Some(Arc::new(func));
    }

    /// Returns `true` when a function is registered for `value_type`.
    #[must_use]
    pub fn has_type_merge_func(&self, value_type: &ValueType) -> bool {
        self.by_type.contains_key(value_type)
    }

    /// Returns `true` when a function is registered for `kind`.
    #[must_use]
    pub fn has_kind_merge_func(&self, kind: Kind) -> bool {
        self.by_kind.contains_key(&kind)
    }

    /// Merge function to invoke for `value`.
    ///
    /// Never fails: a value with no matching registration resolves to the
    /// selector's default or, failing that, to [`default_merge`].
    #[must_use]
    pub fn resolve(&self, value: &Value) -> MergeFunc {
        let value_type = value.value_type();
        if let Some(func) = self.by_type.get(&value_type) {
            trace!(%value_type, "resolved merge function by exact type");
            return Arc::clone(func);
        }
        if let Some(func) = value.kind().and_then(|kind| self.by_kind.get(&kind)) {
            trace!(%value_type, "resolved merge function by kind");
            return Arc::clone(func);
        }
        self.default.as_ref().map_or_else(
            || {
                trace!(%value_type, "resolved global default merge function");
                Arc::new(default_merge) as MergeFunc
            },
            |func| {
                trace!(%value_type, "resolved selector default merge function");
                Arc::clone(func)
            },
        )
    }
}

impl fmt::Debug for FunctionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<String> = self.by_type.keys().map(ToString::to_string).collect();
        types.sort();
        let mut kinds: Vec<&str> = self.by_kind.keys().map(|kind| kind.as_str()).collect();
        kinds.sort_unstable();
        f.debug_struct("FunctionSelector")
            .field("by_type", &types)
            .field("by_kind", &kinds)
            .field("default", &self.default.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn tag(
        label: &'static str,
    ) -> impl Fn(Value, Value, &Options) -> MergeResult<Value> + Send + Sync + 'static {
        move |_: Value, _: Value, _: &Options| Ok(Value::from(label))
    }

    fn resolve_with(selector: &FunctionSelector, value: &Value) -> MergeResult<Value> {
        selector.resolve(value)(Value::Nil, Value::Nil, &Options::new())
    }

    #[rstest]
    fn exact_type_beats_kind() -> MergeResult<()> {
        let mut selector = FunctionSelector::new();
        selector.set_kind_merge_func(Kind::Int, tag("kind"));
        selector.set_type_merge_func(ValueType::Int, tag("type"));
        assert_eq!(resolve_with(&selector, &Value::Int(1))?, Value::from("type"));
        Ok(())
    }

    #[rstest]
    fn kind_beats_default() -> MergeResult<()> {
        let mut selector = FunctionSelector::default();
        selector.set_default_merge_func(tag("default"));
        selector.set_kind_merge_func(Kind::String, tag("kind"));
        assert_eq!(resolve_with(&selector, &Value::from("x"))?, Value::from("kind"));
        assert_eq!(resolve_with(&selector, &Value::Int(1))?, Value::from("default"));
        Ok(())
    }

    #[rstest]
    fn empty_selector_falls_back_to_global_default() -> MergeResult<()> {
        let selector = FunctionSelector::default();
        let func = selector.resolve(&Value::Int(1));
        assert_eq!(func(Value::Int(1), Value::Int(2), &Options::new())?, Value::Int(2));
        Ok(())
    }

    #[rstest]
    fn registration_on_empty_selector_is_used() -> MergeResult<()> {
        let mut selector = FunctionSelector::default();
        selector.set_type_merge_func(ValueType::Bool, tag("bool"));
        assert!(selector.has_type_merge_func(&ValueType::Bool));
        assert_eq!(resolve_with(&selector, &Value::Bool(true))?, Value::from("bool"));
        Ok(())
    }

    #[rstest]
    #[case(Kind::Mapping)]
    #[case(Kind::Sequence)]
    #[case(Kind::Record)]
    fn new_selector_registers_built_ins(#[case] kind: Kind) {
        assert!(FunctionSelector::new().has_kind_merge_func(kind));
        assert!(!FunctionSelector::default().has_kind_merge_func(kind));
    }

    #[rstest]
    fn debug_lists_registrations() {
        let rendered = format!("{:?}", FunctionSelector::new());
        assert!(rendered.contains("mapping"), "{rendered}");
        assert!(rendered.contains("default: true"), "{rendered}");
    }
}

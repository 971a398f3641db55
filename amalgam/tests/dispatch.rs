//! Merge function resolution and policy plumbing.

use std::collections::BTreeMap;
use std::time::Duration;

use amalgam::{
    FunctionSelector, IntoMergeResult, Kind, Mapping, MergeError, MergeResult, Opaque, Options,
    Value, ValueType, merge, merge_mappings, merge_value, merge_values,
};
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use serde_json::json;
use test_helpers::documents;
use test_helpers::funcs::{CallCounter, failing, returns, sum_ints};

#[rstest]
fn exact_type_beats_kind() -> Result<()> {
    let mut options = Options::new();
    options.set_kind_merge_func(Kind::Int, returns(Value::from("kind")));
    options.set_type_merge_func(ValueType::Int, returns(Value::from("type")));

    let merged = merge_values(Value::Int(1), Value::Int(2), &options)?;
    ensure!(merged == Value::from("type"), "unexpected result: {merged:?}");
    Ok(())
}

#[rstest]
fn kind_beats_default() -> Result<()> {
    let mut options = Options::new();
    options.set_default_merge_func(returns(Value::from("default")));
    options.set_kind_merge_func(Kind::Int, sum_ints);

    ensure!(merge_values(Value::Int(1), Value::Int(2), &options)? == Value::Int(3));
    ensure!(merge_values(Value::Bool(true), Value::Bool(false), &options)? == Value::from("default"));
    Ok(())
}

#[rstest]
fn unregistered_values_fall_back_to_overwrite() -> Result<()> {
    let counter = CallCounter::default();
    let mut options = Options::new();
    options.set_default_merge_func(counter.func());

    let mut target = Value::Mapping(documents::target());
    merge_value(&mut target, Value::Mapping(documents::source()), Some(&options))?;
    ensure!(target == Value::Mapping(documents::expected()), "unexpected merge: {target:?}");
    ensure!(counter.calls() == 3, "leaf merges: {}", counter.calls());
    Ok(())
}

#[rstest]
fn empty_selector_registers_lazily() -> Result<()> {
    let mut selector = FunctionSelector::default();
    ensure!(!selector.has_kind_merge_func(Kind::Mapping));
    selector.set_kind_merge_func(Kind::Int, sum_ints);
    let options = Options::new().with_selector(selector);

    ensure!(merge_values(Value::Int(2), Value::Int(3), &options)? == Value::Int(5));
    let merged = merge_mappings(documents::target(), documents::source(), Some(&options))?;
    ensure!(
        merged == documents::source(),
        "mappings without a registered merge must be replaced: {merged:?}"
    );
    Ok(())
}

#[rstest]
fn custom_function_errors_abort_the_merge() -> Result<()> {
    let mut options = Options::new();
    options.set_kind_merge_func(Kind::String, failing("refusing to merge strings"));

    let mut target = Value::Mapping(documents::target());
    let before = target.clone();
    let err = merge_value(&mut target, Value::Mapping(documents::source()), Some(&options))
        .err()
        .ok_or_else(|| anyhow!("failing merge function must abort"))?;
    ensure!(
        err.to_string() == "key 'A': refusing to merge strings",
        "unexpected error: {err}"
    );
    ensure!(matches!(err.root(), MergeError::Custom { .. }));
    ensure!(target == before);
    Ok(())
}

#[rstest]
fn custom_functions_may_turn_mappings_into_scalars() -> Result<()> {
    let mut options = Options::new();
    options.set_type_merge_func(ValueType::mapping(ValueType::Any), returns(Value::Int(0)));
    let err = merge_mappings(documents::target(), documents::source(), Some(&options))
        .err()
        .ok_or_else(|| anyhow!("a scalar result is not a mapping"))?;
    ensure!(
        err.to_string() == "expected merged result to be a mapping but got int",
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
fn final_result_must_match_the_target_type() -> Result<()> {
    let mut options = Options::new();
    options.set_kind_merge_func(Kind::Int, returns(Value::from("seven")));
    let mut target = Value::Int(1);
    let err = merge_value(&mut target, Value::Int(7), Some(&options))
        .err()
        .ok_or_else(|| anyhow!("a string result for an int target must be rejected"))?;
    ensure!(
        err.to_string() == "merge failed: expected merged result to be int but got string",
        "unexpected error: {err}"
    );
    ensure!(target == Value::Int(1));
    Ok(())
}

#[rstest]
fn mapping_slots_reject_foreign_results() -> Result<()> {
    let mut options = Options::new();
    options.set_kind_merge_func(Kind::Uint, returns(Value::Int(-1)));
    let mut target = BTreeMap::from([(String::from("workers"), 4_u32)]);
    let err = merge(
        &mut target,
        BTreeMap::from([(String::from("workers"), 8_u32)]),
        Some(&options),
    )
    .err()
    .ok_or_else(|| anyhow!("an int result in a uint slot must be rejected"))?;
    ensure!(
        err.to_string() == "key 'workers': value of type int is not assignable to type uint",
        "unexpected error: {err}"
    );
    Ok(())
}

#[derive(Debug, PartialEq)]
struct Depth(usize);

fn depth_aware(target: Value, source: Value, options: &Options) -> MergeResult<Value> {
    let depth = options.context().get::<Depth>().map_or(0, |depth| depth.0);
    let (Value::Mapping(lhs), Value::Mapping(rhs)) = (target, source) else {
        return Err(MergeError::custom("depth_aware only merges mappings"));
    };
    let nested = options.with_context(Depth(depth + 1));
    let mut merged = Mapping::dynamic();
    for (key, value) in lhs.into_entries() {
        merged.insert(key, value);
    }
    for (key, value) in rhs.into_entries() {
        let combined = match merged.remove(&key) {
            Some(existing) => merge_values(existing, value, &nested)?,
            None => value,
        };
        merged.insert(key, combined);
    }
    merged.insert("depth", Value::Uint(u64::try_from(depth).into_merge()?));
    Ok(Value::Mapping(merged))
}

#[rstest]
fn context_reaches_nested_merges() -> Result<()> {
    let mut options = Options::new();
    options.set_kind_merge_func(Kind::Mapping, depth_aware);
    let merged = merge_mappings(
        documents::mapping(json!({ "outer": { "inner": {} } })),
        documents::mapping(json!({ "outer": { "inner": { "x": true } } })),
        Some(&options),
    )?;
    let root = Value::Mapping(merged);
    ensure!(root.pointer(&["depth"]) == Some(&Value::Uint(0)));
    ensure!(root.pointer(&["outer", "depth"]) == Some(&Value::Uint(1)));
    ensure!(root.pointer(&["outer", "inner", "x"]) == Some(&Value::Bool(true)));
    ensure!(options.context().get::<Depth>().is_none());
    Ok(())
}

#[rstest]
fn opaque_handles_use_their_exact_type_function() -> Result<()> {
    let mut options = Options::new();
    options.set_type_merge_func_for::<Opaque<Duration>>(|t: Value, s: Value, _: &Options| {
        match (t.as_handle::<Duration>(), s.as_handle::<Duration>()) {
            (Some(lhs), Some(rhs)) => Ok(Value::from(Opaque(lhs.saturating_add(*rhs)))),
            _ => Err(MergeError::custom("expected durations")),
        }
    });

    let mut timeout = Opaque(Duration::from_secs(30));
    merge(&mut timeout, Opaque(Duration::from_secs(5)), Some(&options))?;
    ensure!(timeout.0 == Duration::from_secs(35), "unexpected timeout: {timeout:?}");
    Ok(())
}

#[rstest]
fn opaque_handles_overwrite_without_a_function() -> Result<()> {
    let mut timeout = Opaque(Duration::from_secs(30));
    merge(&mut timeout, Opaque(Duration::from_secs(5)), None)?;
    ensure!(timeout.0 == Duration::from_secs(5), "unexpected timeout: {timeout:?}");
    Ok(())
}

//! Steps merging dynamic documents.

use amalgam::{Kind, Mapping, Options, Value, ValueType, merge_mappings};
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use test_helpers::documents;
use test_helpers::funcs::sum_ints;
use test_helpers::text::scalar;

use crate::fixtures::MergeContext;

fn single_entry(key: &str, value: &str) -> Mapping {
    Mapping::from_entries(ValueType::Any, [(key, scalar(value))])
}

fn lookup(merged: &Mapping, path: &str) -> Option<Value> {
    let mut segments = path.split('.');
    let mut current = merged.get(segments.next()?)?;
    for segment in segments {
        current = current.as_mapping()?.get(segment)?;
    }
    Some(current.clone())
}

fn update_options(merge_context: &MergeContext, change: impl FnOnce(&mut Options)) {
    let mut options = merge_context.options.take().unwrap_or_default();
    change(&mut options);
    merge_context.options.set(options);
}

#[given("the example target document")]
fn example_target(merge_context: &MergeContext) {
    merge_context.target.set(documents::target());
}

#[given("the example source document")]
fn example_source(merge_context: &MergeContext) {
    merge_context.source.set(documents::source());
}

#[given("the mismatched target document")]
fn mismatched_target(merge_context: &MergeContext) {
    merge_context.target.set(documents::mismatched_target());
}

#[given("the mismatched source document")]
fn mismatched_source(merge_context: &MergeContext) {
    merge_context.source.set(documents::mismatched_source());
}

#[given("a target where \"{key}\" is {value}")]
fn target_entry(merge_context: &MergeContext, key: String, value: String) {
    merge_context.target.set(single_entry(&key, &value));
}

#[given("a source where \"{key}\" is {value}")]
fn source_entry(merge_context: &MergeContext, key: String, value: String) {
    merge_context.source.set(single_entry(&key, &value));
}

#[given("overwrite is disabled")]
fn disable_overwrite(merge_context: &MergeContext) {
    update_options(merge_context, |options| options.overwrite = false);
}

#[given("integers are summed")]
fn sum_integers(merge_context: &MergeContext) {
    update_options(merge_context, |options| {
        options.set_kind_merge_func(Kind::Number, sum_ints);
    });
}

#[when("the documents are merged")]
fn merge_documents(merge_context: &MergeContext) -> Result<()> {
    let target = merge_context
        .target
        .take()
        .ok_or_else(|| anyhow!("target document missing"))?;
    let source = merge_context
        .source
        .take()
        .ok_or_else(|| anyhow!("source document missing"))?;
    let options = merge_context.options.take().unwrap_or_default();
    merge_context
        .result
        .set(merge_mappings(target, source, Some(&options)));
    Ok(())
}

#[then("key \"{path}\" is {expected}")]
fn assert_key(merge_context: &MergeContext, path: String, expected: String) -> Result<()> {
    let found = merge_context
        .result
        .with_ref(|result| match result {
            Ok(merged) => Ok(lookup(merged, &path)),
            Err(err) => Err(err.to_string()),
        })
        .ok_or_else(|| anyhow!("merge result missing"))?
        .map_err(|err| anyhow!("merge failed: {err}"))?;
    let want = scalar(&expected);
    ensure!(
        found.as_ref() == Some(&want),
        "key {path}: expected {want:?}, found {found:?}"
    );
    Ok(())
}

#[then("the merge fails with \"{message}\"")]
fn assert_failure(merge_context: &MergeContext, message: String) -> Result<()> {
    let err = merge_context
        .result
        .take()
        .ok_or_else(|| anyhow!("merge result missing"))?
        .err()
        .ok_or_else(|| anyhow!("merge unexpectedly succeeded"))?;
    ensure!(err.to_string() == message, "unexpected error: {err}");
    Ok(())
}

//! Binds the `amalgam` behavioural feature files to the step registry.

use crate::fixtures::{MergeContext, RecordContext, merge_context, record_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/document_merge.feature",
    fixtures = [merge_context: MergeContext]
);
scenarios!(
    "tests/features/record_merge.feature",
    fixtures = [record_context: RecordContext]
);

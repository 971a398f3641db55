//! Shared fixtures for the `rstest-bdd` behavioural suite.

use amalgam::{Mapping, MergeResult, Options, Record};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state for dynamic document merges.
#[derive(Debug, Default, ScenarioState)]
pub struct MergeContext {
    pub target: Slot<Mapping>,
    pub source: Slot<Mapping>,
    pub options: Slot<Options>,
    pub result: Slot<MergeResult<Mapping>>,
}

/// A network endpoint merged field by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Record)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub aliases: Vec<String>,
}

/// A record with a private field, merged only as a whole.
#[derive(Clone, Debug, Default, PartialEq, Eq, Record)]
pub struct Session {
    pub user: String,
    token: String,
}

impl Session {
    pub fn new(user: &str, token: &str) -> Self {
        Self {
            user: user.to_owned(),
            token: token.to_owned(),
        }
    }
}

/// Scenario state for typed record merges.
#[derive(Debug, Default, ScenarioState)]
pub struct RecordContext {
    pub endpoint: Slot<Endpoint>,
    pub update: Slot<Endpoint>,
    pub session: Slot<Session>,
    pub options: Slot<Options>,
    pub error: Slot<String>,
}

/// Creates a clean document merge state.
#[fixture]
pub fn merge_context() -> MergeContext {
    MergeContext::default()
}

/// Creates a clean record merge state.
#[fixture]
pub fn record_context() -> RecordContext {
    RecordContext::default()
}

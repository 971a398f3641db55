//! `rstest-bdd` behavioural suite for `amalgam`.
//!
//! [`fixtures`] holds the per-scenario state, while [`behaviour`] registers
//! the step implementations and binds the `.feature` files under
//! `tests/features/` to them.

mod behaviour;
mod fixtures;

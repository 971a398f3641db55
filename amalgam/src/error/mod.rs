//! Error types produced by the merge engine.

mod constructors;
mod types;

pub use types::{MergeError, MergeResult};

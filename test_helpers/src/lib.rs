//! Test helpers shared across crates.
//!
//! This crate provides sample documents, stub merge functions and step-text
//! parsing for the `amalgam` test suites.

pub mod documents;
pub mod funcs;
pub mod text;

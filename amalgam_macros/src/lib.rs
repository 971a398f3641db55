//! Procedural macros for `amalgam`.
//!
//! The [`Record`] derive implements `amalgam::Reflect` for a struct by listing
//! its fields, which lets the merge engine combine two values of the struct
//! field by field. Fields declared `pub` are exported to the engine; other
//! fields are not, and a struct with unexported fields merges as a whole
//! unless the policy asks for an error instead.
//!
//! Attributes:
//!
//! - `#[merge(crate = "path")]` on the struct points generated code at a
//!   renamed `amalgam` dependency.
//! - `#[merge(exported)]` and `#[merge(unexported)]` on a field override the
//!   visibility-based default.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `amalgam::Reflect` on structs.
#[proc_macro_derive(Record, attributes(merge))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

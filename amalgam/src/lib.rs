//! Core crate for the `amalgam` deep-merge engine.
//!
//! `amalgam` merges a *source* value into a *target* value of the same shape,
//! descending into mappings, sequences and records instead of replacing them
//! wholesale. A policy ([`Options`]) decides how leaves combine and which merge
//! function handles each value: functions registered for an exact
//! [`ValueType`] win over functions registered for a [`Kind`], which win over
//! the default.
//!
//! Typed data enters the engine through [`Reflect`], implemented for common
//! standard types and derived for structs with [`macro@Record`]. Parsed JSON
//! and TOML documents convert into [`Value`] trees directly.
//!
//! ```
//! use amalgam::{Record, merge};
//!
//! #[derive(Clone, Debug, PartialEq, Record)]
//! pub struct Server {
//!     pub host: String,
//!     pub ports: Vec<u16>,
//!     pub tls: Option<bool>,
//! }
//!
//! let mut server = Server { host: "localhost".into(), ports: vec![80], tls: None };
//! let overrides = Server { host: "example.org".into(), ports: vec![443], tls: Some(true) };
//! merge(&mut server, overrides, None)?;
//!
//! assert_eq!(server.host, "example.org");
//! assert_eq!(server.ports, vec![80, 443]);
//! assert_eq!(server.tls, Some(true));
//! # Ok::<(), amalgam::MergeError>(())
//! ```

extern crate self as amalgam;

pub use amalgam_macros::Record;

mod convert;
mod driver;
mod entry;
mod error;
mod funcs;
mod options;
mod reflect;
mod result_ext;
mod selector;
mod value;

pub use driver::merge_values;
#[cfg(feature = "serde_json")]
pub use entry::merge_json_objects;
pub use entry::{merge, merge_mappings, merge_value};
pub use error::{MergeError, MergeResult};
pub use funcs::{default_merge, merge_mapping, merge_record, merge_sequence};
pub use options::{Context, MergeSettings, Options};
pub use reflect::{Opaque, Reflect};
pub use result_ext::{IntoMergeResult, MergeResultExt};
pub use selector::{FunctionSelector, MergeFunc};
pub use value::{
    Field, Handle, HandleType, Kind, Mapping, Number, Optional, Record, RecordType, Sequence,
    Value, ValueType,
};

//! Trybuild fixture verifying `#[merge(crate = "...")]` works with a
//! dependency renamed via `use ... as`.

use amalgam as engine;
use engine::{MergeResult, Options, Record};

/// Generated code must reach the engine through `engine::` only.
#[derive(Clone, Debug, Record)]
#[merge(crate = "engine")]
struct AliasedSettings {
    pub verbose: bool,
    #[merge(unexported)]
    pub token: String,
}

fn main() {
    let mut settings = AliasedSettings {
        verbose: false,
        token: String::new(),
    };
    let update = AliasedSettings {
        verbose: true,
        token: String::from("t"),
    };
    let result: MergeResult<()> = engine::merge(&mut settings, update, Some(&Options::new()));
    let _ = result;
}

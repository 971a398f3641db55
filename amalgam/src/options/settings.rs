//! Serialisable merge flags.

use serde::{Deserialize, Serialize};

/// Policy flags that can be read from a configuration document.
///
/// Missing keys take their defaults, so an empty table yields the same flags
/// as [`super::Options::new`].
///
/// # Examples
///
/// ```
/// use amalgam::{MergeSettings, Options};
///
/// let settings: MergeSettings = serde_json::from_str(r#"{ "overwrite": false }"#)?;
/// let options = Options::from_settings(settings);
/// assert!(!options.overwrite);
/// assert!(!options.error_on_unexported);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeSettings {
    /// Whether source values replace target values at the leaves.
    pub overwrite: bool,
    /// Whether records with unexported fields fail instead of merging as a
    /// whole.
    pub error_on_unexported: bool,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            overwrite: true,
            error_on_unexported: false,
        }
    }
}

//! Defaults applied to synthesis requests that leave an option open.
//!
//! Configuration is an explicit value handed to the
//! [`Synthesizer`](crate::Synthesizer); nothing is read from global state
//! during assembly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, existence::CallSuperPolicy};

/// Synthesis defaults, loadable from JSON.
///
/// ```rust
/// use desensitize_core::{CallSuperPolicy, SynthesisConfig};
///
/// let config = SynthesisConfig::from_json_str(r#"{ "call_super": "warn" }"#).unwrap();
/// assert_eq!(config.call_super, CallSuperPolicy::Warn);
/// assert!(config.include_field_names);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Whether members are rendered as `name=value` unless a request says otherwise.
    pub include_field_names: bool,
    /// Behaviour for types with a parent that leave the super call undecided.
    pub call_super: CallSuperPolicy,
    /// Whether skipping a user-authored render routine produces a warning.
    pub warn_on_conflict: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            include_field_names: true,
            call_super: CallSuperPolicy::Skip,
            warn_on_conflict: false,
        }
    }
}

impl SynthesisConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

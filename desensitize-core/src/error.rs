//! Structural errors and policy warnings raised during synthesis.

use std::fmt;

use crate::synthesize::TypeShape;

/// A fatal error for a single synthesis request. No plan is produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SynthesisError {
    /// Rendering was requested for a type that is neither class- nor enum-like.
    #[error("`{type_name}` is {shape}; a render routine can only be synthesized for a class or enum")]
    NotARecord { type_name: String, shape: TypeShape },
}

/// A non-fatal condition surfaced to the caller.
///
/// Warnings never suppress an otherwise valid plan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Warning {
    /// The type has a parent but the super call was skipped under the `warn` policy.
    SuperCallSkipped { type_name: String },
    /// A user-authored render routine already exists, so none was synthesized.
    RenderRoutineExists { type_name: String },
}

impl Warning {
    /// The type the warning refers to.
    pub fn type_name(&self) -> &str {
        match self {
            Warning::SuperCallSkipped { type_name } | Warning::RenderRoutineExists { type_name } => {
                type_name
            }
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::SuperCallSkipped { type_name } => write!(
                f,
                "generating a render routine for `{type_name}` without a call to its parent; \
                 set call_super = false explicitly if this is intended"
            ),
            Warning::RenderRoutineExists { type_name } => write!(
                f,
                "not generating a render routine for `{type_name}`: one already exists"
            ),
        }
    }
}

/// Errors raised while loading a [`SynthesisConfig`](crate::SynthesisConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration from {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration")]
    Parse(#[from] serde_json::Error),
}

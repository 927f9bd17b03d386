//! Errors raised while loading presets.
//!
//! The simulation step itself is infallible; only configuration can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Preset not found: {0}")]
    NotFound(String),

    #[error("Invalid preset '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

impl PresetError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        PresetError::Invalid {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

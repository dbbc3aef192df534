//! Error types for slide control and preset loading

use thiserror::Error;

/// Errors surfaced by [`SlideController`](crate::SlideController) operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlideError {
    #[error("slide index {index} out of range (slide count: {count})")]
    OutOfRange { index: usize, count: usize },

    #[error("controller has been destroyed")]
    InvalidState,

    #[error("invalid slide configuration: {0}")]
    InvalidConfig(String),
}

/// Errors that can occur while loading slider presets
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preset parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("preset '{name}' is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: SlideError,
    },

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

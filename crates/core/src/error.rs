//! Error types for text analysis
//!
//! This module defines all error types used throughout the analysis stack.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! End-of-stream is never an error: stages signal it with `Ok(None)`.

use std::io;
use thiserror::Error;

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the analysis stack
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reader-backed input, config files)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Configuration could not be parsed, serialized or validated
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No pipeline registered under the requested name
    #[error("Unknown pipeline: {0}")]
    UnknownPipeline(String),

    /// A host-supplied stage or source failed while producing a token
    #[error("Stage '{stage}' failed: {message}")]
    StageError {
        /// Name of the failing stage
        stage: String,
        /// Failure description
        message: String,
    },
}

impl Error {
    /// Build a `StageError` for the named stage
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Error::StageError {
            stage: stage.into(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigError(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::ConfigError(e.to_string())
    }
}

//! Domain error types
//!
//! This module defines the error hierarchy for Shardprep. All errors are
//! domain-specific and don't expose third-party types.

use std::path::PathBuf;
use thiserror::Error;

/// Main Shardprep error type
///
/// This is the primary error type used throughout the application.
/// Every variant here is fatal to a run; destination-level problems are
/// reported as warnings in the run summary and never surface as errors.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Requested dataset identifier is not registered
    #[error("Unknown dataset '{name}'. Registered datasets: {}", .known.join(", "))]
    UnknownDataset {
        /// The identifier that failed to resolve
        name: String,
        /// Registered identifiers, sorted, so the caller can self-correct
        known: Vec<String>,
    },

    /// Resolved source file does not exist on disk
    #[error("Source file not found: {}", .path.display())]
    SourceNotFound {
        /// The path that was checked
        path: PathBuf,
    },

    /// Caller-contract violation (e.g. a bus count of zero)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        SplitError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SplitError {
    fn from(err: toml::de::Error) -> Self {
        SplitError::Configuration(format!("TOML parse error: {err}"))
    }
}

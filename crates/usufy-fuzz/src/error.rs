//! Error types for the fuzzing subsystem.

use thiserror::Error;

/// Errors that can occur while setting up a fuzzer.
///
/// Generating variants never fails; these only surface from construction
/// and from the strict pattern loader.
#[derive(Error, Debug)]
pub enum FuzzError {
    /// Failed to read a custom pattern file
    #[error("failed to read pattern file {path}: {source}")]
    PatternFile {
        /// Path to the pattern file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Fuzzing settings failed validation
    #[error("invalid fuzz configuration: {0}")]
    InvalidConfig(#[from] usufy_core::ConfigError),
}

/// Result type for fuzzing operations.
pub type Result<T> = std::result::Result<T, FuzzError>;

//! Core error types for Usufy.
//!
//! `UsufyError` covers invalid shared values such as pattern rules;
//! `ConfigError` is raised while loading or validating settings.

use thiserror::Error;

/// Errors raised when constructing shared Usufy types.
#[derive(Error, Debug)]
pub enum UsufyError {
    /// Validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UsufyError::Validation("empty pattern".to_string());
        assert_eq!(err.to_string(), "validation error: empty pattern");

        let err = ConfigError::InvalidValue {
            field: "fuzz.leet".to_string(),
            reason: "key must be one character".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for fuzz.leet: key must be one character"
        );
    }
}

//! Usufy Core - Foundation crate for the Usufy username tooling.
//!
//! This crate provides shared types, error handling and configuration
//! management that the other Usufy crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes (`PatternRule`)
//!
//! # Example
//!
//! ```rust
//! use usufy_core::{AppConfig, PatternRule};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! config.fuzz.validate()?;
//!
//! let rule = PatternRule::new("<USERNAME>_official")?;
//! assert_eq!(rule.expand("carol"), "carol_official");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, FuzzConfig, MAX_NUMERIC_SUFFIXES, MAX_YEAR_WINDOW};
pub use error::{ConfigError, ConfigResult, UsufyError};
pub use types::{PatternRule, USERNAME_PLACEHOLDER};

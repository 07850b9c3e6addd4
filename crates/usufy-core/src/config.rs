//! Configuration management for Usufy.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration.
///
/// This is loaded from `~/.config/usufy/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Username fuzzing settings
    pub fuzz: FuzzConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file path.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `USUFY_FUZZ_PATTERNS`: Path to a custom pattern file
    /// - `USUFY_FUZZ_YEAR_WINDOW`: Number of prior years in the year-suffix window
    /// - `USUFY_FUZZ_REFERENCE_YEAR`: Pin the year the window counts back from
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup, ignoring unparsable values.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("USUFY_FUZZ_PATTERNS") {
            tracing::debug!("Override fuzz.patterns_path from env: {}", path);
            self.fuzz.patterns_path = Some(PathBuf::from(path));
        }

        if let Some(val) = lookup("USUFY_FUZZ_YEAR_WINDOW") {
            if let Ok(window) = val.parse() {
                self.fuzz.year_window = window;
                tracing::debug!("Override fuzz.year_window from env: {}", window);
            }
        }

        if let Some(val) = lookup("USUFY_FUZZ_REFERENCE_YEAR") {
            if let Ok(year) = val.parse() {
                self.fuzz.reference_year = Some(year);
                tracing::debug!("Override fuzz.reference_year from env: {}", year);
            }
        }
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/usufy/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "usufy", "usufy").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Largest accepted `year_window`.
pub const MAX_YEAR_WINDOW: u32 = 100;

/// Largest accepted count of numeric suffixes.
pub const MAX_NUMERIC_SUFFIXES: u32 = 1000;

/// Username fuzzing settings.
///
/// Every transformation family reads its alphabet from here. The defaults
/// reproduce the stock generator: four separators, numeric suffixes 1 to 10,
/// the current year and five prior, three common words and six leet digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzConfig {
    /// Separators placed between the base identifier and a suffix, in order
    pub separators: Vec<String>,
    /// First numeric suffix
    pub numeric_start: u32,
    /// Last numeric suffix (inclusive)
    pub numeric_end: u32,
    /// Number of years before the reference year to emit
    pub year_window: u32,
    /// Words appended as suffixes
    pub common_words: Vec<String>,
    /// Optional file with `<USERNAME>` patterns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns_path: Option<PathBuf>,
    /// Year the window counts back from; the wall clock is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<i32>,
    /// Single-character leet substitutions, keyed by lowercase letter
    pub leet: BTreeMap<String, String>,
}

impl FuzzConfig {
    /// Check that the settings describe a usable generator.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when the numeric range is
    /// inverted or longer than [`MAX_NUMERIC_SUFFIXES`], the year window
    /// exceeds [`MAX_YEAR_WINDOW`], or a leet entry is not a one-character
    /// key with a non-empty replacement.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.numeric_start > self.numeric_end {
            return Err(ConfigError::InvalidValue {
                field: "fuzz.numeric_start".to_string(),
                reason: format!(
                    "start {} is greater than end {}",
                    self.numeric_start, self.numeric_end
                ),
            });
        }

        let numeric_count = u64::from(self.numeric_end) - u64::from(self.numeric_start) + 1;
        if numeric_count > u64::from(MAX_NUMERIC_SUFFIXES) {
            return Err(ConfigError::InvalidValue {
                field: "fuzz.numeric_end".to_string(),
                reason: format!(
                    "range {}..={} yields {numeric_count} suffixes, limit is {MAX_NUMERIC_SUFFIXES}",
                    self.numeric_start, self.numeric_end
                ),
            });
        }

        if self.year_window > MAX_YEAR_WINDOW {
            return Err(ConfigError::InvalidValue {
                field: "fuzz.year_window".to_string(),
                reason: format!(
                    "window {} exceeds limit {MAX_YEAR_WINDOW}",
                    self.year_window
                ),
            });
        }

        for (key, replacement) in &self.leet {
            if key.chars().count() != 1 {
                return Err(ConfigError::InvalidValue {
                    field: "fuzz.leet".to_string(),
                    reason: format!("key '{key}' must be exactly one character"),
                });
            }
            if replacement.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "fuzz.leet".to_string(),
                    reason: format!("replacement for '{key}' is empty"),
                });
            }
        }

        Ok(())
    }
}

impl Default for FuzzConfig {
    fn default() -> Self {
        let leet = [("a", "4"), ("e", "3"), ("i", "1"), ("o", "0"), ("s", "5"), ("t", "7")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            separators: ["", ".", "_", "-"].map(String::from).to_vec(),
            numeric_start: 1,
            numeric_end: 10,
            year_window: 5,
            common_words: ["dev", "test", "admin"].map(String::from).to_vec(),
            patterns_path: None,
            reference_year: None,
            leet,
        }
    }
}

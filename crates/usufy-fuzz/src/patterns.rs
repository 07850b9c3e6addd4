//! Custom pattern loading from line-oriented text files.
//!
//! Each line holding a `<USERNAME>` placeholder becomes one [`PatternRule`].
//! Blank lines and lines without the placeholder are dropped silently.

use crate::error::{FuzzError, Result};
use std::path::Path;
use tracing::debug;
use usufy_core::PatternRule;

/// Parse pattern rules from in-memory text, keeping file order.
#[must_use]
pub fn parse_patterns(text: &str) -> Vec<PatternRule> {
    text.lines()
        .filter_map(|line| PatternRule::new(line).ok())
        .collect()
}

/// Load pattern rules from a file, reporting read failures.
///
/// # Errors
/// Returns [`FuzzError::PatternFile`] if the file is missing, unreadable
/// or not valid UTF-8.
pub fn try_load_patterns(path: &Path) -> Result<Vec<PatternRule>> {
    let contents = std::fs::read_to_string(path).map_err(|e| FuzzError::PatternFile {
        path: path.display().to_string(),
        source: e,
    })?;

    let patterns = parse_patterns(&contents);

    debug!(
        path = %path.display(),
        count = patterns.len(),
        "loaded fuzz patterns"
    );

    Ok(patterns)
}

/// Best-effort pattern loading.
///
/// A missing path, or any failure while reading it, yields no patterns.
/// Fuzzing must not fail because a pattern file is broken.
#[must_use]
pub fn load_patterns(path: Option<&Path>) -> Vec<PatternRule> {
    let Some(path) = path else {
        return Vec::new();
    };

    match try_load_patterns(path) {
        Ok(patterns) => patterns,
        Err(e) => {
            debug!(error = %e, "ignoring unreadable pattern file");
            Vec::new()
        }
    }
}

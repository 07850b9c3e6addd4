//! Shared types used across the Usufy crates.

use crate::error::UsufyError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder substituted with the base identifier in custom patterns.
pub const USERNAME_PLACEHOLDER: &str = "<USERNAME>";

/// Newtype for custom fuzzing patterns with validation.
///
/// A pattern is a non-empty template containing at least one
/// [`USERNAME_PLACEHOLDER`], e.g. `<USERNAME>_official`. Surrounding
/// whitespace is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatternRule(String);

impl PatternRule {
    /// Create a new `PatternRule` from a string.
    ///
    /// # Errors
    /// Returns error if the trimmed template is empty or lacks the placeholder.
    pub fn new(template: impl AsRef<str>) -> Result<Self, UsufyError> {
        let template = template.as_ref().trim();
        Self::validate(template)?;
        Ok(Self(template.to_string()))
    }

    /// Get the inner template.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute every placeholder occurrence with `base`, verbatim.
    #[must_use]
    pub fn expand(&self, base: &str) -> String {
        self.0.replace(USERNAME_PLACEHOLDER, base)
    }

    fn validate(template: &str) -> Result<(), UsufyError> {
        if template.is_empty() {
            return Err(UsufyError::Validation(
                "invalid pattern: template is empty".to_string(),
            ));
        }

        if template.contains(USERNAME_PLACEHOLDER) {
            Ok(())
        } else {
            Err(UsufyError::Validation(format!(
                "invalid pattern: missing {USERNAME_PLACEHOLDER} placeholder in '{template}'"
            )))
        }
    }
}

impl TryFrom<String> for PatternRule {
    type Error = UsufyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PatternRule> for String {
    fn from(rule: PatternRule) -> Self {
        rule.0
    }
}

impl fmt::Display for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

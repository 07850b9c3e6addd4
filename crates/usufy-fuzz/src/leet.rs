//! Single-position leet substitution.

use std::collections::HashMap;
use usufy_core::FuzzConfig;

/// Lookup table from lowercase letter to replacement text.
#[derive(Debug, Clone, Default)]
pub struct LeetTable {
    substitutions: HashMap<char, String>,
}

impl LeetTable {
    /// Build the table from validated settings.
    ///
    /// Keys that are not exactly one character are skipped;
    /// [`FuzzConfig::validate`] rejects them before this point.
    #[must_use]
    pub fn from_config(config: &FuzzConfig) -> Self {
        let substitutions = config
            .leet
            .iter()
            .filter_map(|(key, replacement)| {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some((ch, replacement.clone())),
                    _ => None,
                }
            })
            .collect();

        Self { substitutions }
    }

    /// Replacement for `ch`, matched case-insensitively.
    #[must_use]
    pub fn get(&self, ch: char) -> Option<&str> {
        let mut lower = ch.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => self.substitutions.get(&l).map(String::as_str),
            _ => None,
        }
    }

    /// Number of substitutable letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }

    /// One variant per substitutable position, left to right.
    ///
    /// Only the matched position is replaced; the other characters keep
    /// their original case. Positions are never combined, so the output
    /// holds at most one entry per character of `s`.
    #[must_use]
    pub fn variants(&self, s: &str) -> Vec<String> {
        let mut variants: Vec<String> = Vec::new();

        for (idx, ch) in s.char_indices() {
            let Some(replacement) = self.get(ch) else {
                continue;
            };

            let variant = format!("{}{replacement}{}", &s[..idx], &s[idx + ch.len_utf8()..]);
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        }

        variants
    }
}

/// Leet variants of `s` using the default table.
#[must_use]
pub fn leet_variants(s: &str) -> Vec<String> {
    LeetTable::from_config(&FuzzConfig::default()).variants(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_substitution_only() {
        let variants = leet_variants("test");
        assert_eq!(variants, vec!["7est", "t3st", "te5t", "tes7"]);
        assert!(!variants.contains(&"7354".to_string()));
    }

    #[test]
    fn test_preserves_original_case() {
        assert_eq!(leet_variants("BoB"), vec!["B0B"]);
        assert_eq!(leet_variants("TeSt"), vec!["7eSt", "T3St", "Te5t", "TeS7"]);
    }

    #[test]
    fn test_no_substitutable_letters() {
        assert!(leet_variants("xyz").is_empty());
        assert!(leet_variants("").is_empty());
    }

    #[test]
    fn test_multibyte_neighbours() {
        assert_eq!(leet_variants("ñoé"), vec!["ñ0é"]);
    }

    #[test]
    fn test_custom_table() {
        let mut config = FuzzConfig::default();
        config.leet.clear();
        config.leet.insert("b".to_string(), "8".to_string());

        let table = LeetTable::from_config(&config);
        assert_eq!(table.len(), 1);
        assert_eq!(table.variants("bobby"), vec!["8obby", "bo8by", "bob8y"]);
    }
}

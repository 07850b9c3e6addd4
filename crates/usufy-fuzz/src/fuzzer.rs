//! Fuzzing orchestration.
//!
//! A [`Fuzzer`] runs the transformation families in a fixed order for every
//! base identifier: case, separator/suffix, leet, then custom patterns.
//! Each identifier gets its own dedup state.

use crate::{
    case::case_variants,
    error::Result,
    leet::LeetTable,
    patterns::load_patterns,
    suffix::{suffix_variants, year_suffixes},
    variants::{FuzzResults, VariantSet},
};
use chrono::Datelike;
use std::path::Path;
use tracing::{debug, info};
use usufy_core::{FuzzConfig, PatternRule};

/// Generator of username permutations.
///
/// Immutable once built; a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Fuzzer {
    config: FuzzConfig,
    leet: LeetTable,
    reference_year: i32,
    years: Vec<String>,
    patterns: Vec<PatternRule>,
}

impl Fuzzer {
    /// Create a fuzzer from settings.
    ///
    /// The reference year comes from `config.reference_year`, or the local
    /// calendar year when unset. Custom patterns are read from
    /// `config.patterns_path` on a best-effort basis.
    ///
    /// # Errors
    /// Returns [`crate::FuzzError::InvalidConfig`] if the settings fail validation.
    pub fn new(config: FuzzConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: FuzzConfig) -> Self {
        let reference_year = config.reference_year.unwrap_or_else(current_year);
        let patterns = load_patterns(config.patterns_path.as_deref());

        Self {
            leet: LeetTable::from_config(&config),
            years: year_suffixes(reference_year, config.year_window),
            reference_year,
            patterns,
            config,
        }
    }

    /// Pin the year the year-suffix window counts back from.
    #[must_use]
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self.config.reference_year = Some(year);
        self.years = year_suffixes(year, self.config.year_window);
        self
    }

    /// Replace the custom patterns.
    #[must_use]
    pub fn with_patterns(mut self, patterns: Vec<PatternRule>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Year the year-suffix window counts back from.
    #[must_use]
    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Custom patterns applied after the built-in families.
    #[must_use]
    pub fn patterns(&self) -> &[PatternRule] {
        &self.patterns
    }

    /// Settings this fuzzer was built from.
    #[must_use]
    pub fn config(&self) -> &FuzzConfig {
        &self.config
    }

    /// Generate the candidates for one base identifier.
    #[must_use]
    pub fn fuzz(&self, nick: &str) -> VariantSet {
        let mut variants = VariantSet::new();

        variants.extend(case_variants(nick));
        variants.extend(suffix_variants(nick, &self.config, &self.years));
        variants.extend(self.leet.variants(nick));
        variants.extend(self.patterns.iter().map(|rule| rule.expand(nick)));

        debug!(nick = %nick, count = variants.len(), "fuzzed identifier");

        variants
    }

    /// Generate candidates for every identifier, in input order.
    pub fn fuzz_all<I, S>(&self, nicks: I) -> FuzzResults
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut results = FuzzResults::new();

        for nick in nicks {
            let nick = nick.as_ref();
            results.push(nick, self.fuzz(nick));
        }

        info!(
            identifiers = results.len(),
            variants = results.total_variants(),
            patterns = self.patterns.len(),
            year = self.reference_year,
            "fuzzing complete"
        );

        results
    }
}

impl Default for Fuzzer {
    fn default() -> Self {
        Self::build(FuzzConfig::default())
    }
}

/// Fuzz `nicks` with the stock settings and an optional pattern file.
///
/// An unreadable or missing pattern file behaves like no pattern file.
pub fn fuzz_usernames<I, S>(nicks: I, pattern_source: Option<&Path>) -> FuzzResults
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let config = FuzzConfig {
        patterns_path: pattern_source.map(Path::to_path_buf),
        ..FuzzConfig::default()
    };

    Fuzzer::build(config).fuzz_all(nicks)
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

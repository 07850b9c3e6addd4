//! Separator and suffix expansion.
//!
//! Every candidate is the untouched base identifier, one separator and one
//! suffix. For each separator the suffixes run numeric, then year, then word.

use usufy_core::FuzzConfig;

/// Year suffixes from `reference_year` back through `window` prior years.
#[must_use]
pub fn year_suffixes(reference_year: i32, window: u32) -> Vec<String> {
    let oldest = reference_year.saturating_sub(i32::try_from(window).unwrap_or(i32::MAX));

    (oldest..=reference_year)
        .rev()
        .map(|year| year.to_string())
        .collect()
}

/// All separator/suffix candidates for `base`, in generation order.
///
/// May contain repeats when the configuration overlaps (e.g. a common word
/// that is also a number); the caller deduplicates.
#[must_use]
pub fn suffix_variants(base: &str, config: &FuzzConfig, years: &[String]) -> Vec<String> {
    let numbers: Vec<String> = (config.numeric_start..=config.numeric_end)
        .map(|n| n.to_string())
        .collect();

    let mut candidates = Vec::with_capacity(
        config.separators.len() * (numbers.len() + years.len() + config.common_words.len()),
    );

    for sep in &config.separators {
        let suffixes = numbers
            .iter()
            .chain(years)
            .chain(&config.common_words);

        candidates.extend(suffixes.map(|suffix| format!("{base}{sep}{suffix}")));
    }

    candidates
}

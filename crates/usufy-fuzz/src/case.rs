//! Case folding variants.

/// Lowercase, uppercase and title-case forms of `s`, in that order.
///
/// Forms that coincide are collapsed, so a single-letter or already
/// lowercase input yields fewer than three entries.
#[must_use]
pub fn case_variants(s: &str) -> Vec<String> {
    let mut variants: Vec<String> = Vec::with_capacity(3);

    for form in [s.to_lowercase(), s.to_uppercase(), title_case(s)] {
        if !variants.contains(&form) {
            variants.push(form);
        }
    }

    variants
}

/// Capitalize the first letter of each whitespace-delimited word and
/// lowercase the rest.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;

    for ch in s.chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}

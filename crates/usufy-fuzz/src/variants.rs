//! Ordered, duplicate-free collections of fuzzed candidates.

use indexmap::{IndexMap, IndexSet};

/// Candidates derived from one base identifier.
///
/// Insertion order is preserved and a candidate is only stored the first
/// time it is seen. Equality compares elements in order.
#[derive(Debug, Clone, Default)]
pub struct VariantSet {
    variants: IndexSet<String>,
}

impl VariantSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `candidate` unless already present. Returns whether it was new.
    pub fn insert(&mut self, candidate: impl Into<String>) -> bool {
        self.variants.insert(candidate.into())
    }

    /// Check whether `candidate` has been emitted.
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.variants.contains(candidate)
    }

    /// Number of distinct candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether no candidate was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Position of `candidate` in generation order.
    #[must_use]
    pub fn position(&self, candidate: &str) -> Option<usize> {
        self.variants.get_index_of(candidate)
    }

    /// Iterate candidates in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }

    /// Consume into a vector, keeping order.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.variants.into_iter().collect()
    }
}

impl PartialEq for VariantSet {
    fn eq(&self, other: &Self) -> bool {
        self.variants.iter().eq(other.variants.iter())
    }
}

impl Eq for VariantSet {}

impl Extend<String> for VariantSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.variants.extend(iter);
    }
}

impl IntoIterator for VariantSet {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.into_iter()
    }
}

/// Per-identifier fuzzing output, in input order.
///
/// Repeated input identifiers keep separate entries, each generated
/// with its own dedup state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuzzResults {
    entries: Vec<(String, VariantSet)>,
}

impl FuzzResults {
    /// Create an empty result list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the variants of one base identifier.
    pub fn push(&mut self, base: impl Into<String>, variants: VariantSet) {
        self.entries.push((base.into(), variants));
    }

    /// Variants for the first entry matching `base`.
    #[must_use]
    pub fn get(&self, base: &str) -> Option<&VariantSet> {
        self.entries
            .iter()
            .find(|(nick, _)| nick == base)
            .map(|(_, variants)| variants)
    }

    /// Number of entries (one per input identifier).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no identifier was fuzzed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of candidates across all entries.
    #[must_use]
    pub fn total_variants(&self) -> usize {
        self.entries.iter().map(|(_, variants)| variants.len()).sum()
    }

    /// Iterate `(base, variants)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantSet)> {
        self.entries
            .iter()
            .map(|(nick, variants)| (nick.as_str(), variants))
    }

    /// Collapse into a map keyed by base identifier.
    ///
    /// Keys keep first-seen order. A repeated identifier keeps its first
    /// entry; repeated entries are identical for the same fuzzer.
    #[must_use]
    pub fn into_map(self) -> IndexMap<String, Vec<String>> {
        let mut map = IndexMap::with_capacity(self.entries.len());
        for (nick, variants) in self.entries {
            map.entry(nick).or_insert_with(|| variants.into_vec());
        }
        map
    }
}

impl IntoIterator for FuzzResults {
    type Item = (String, VariantSet);
    type IntoIter = std::vec::IntoIter<(String, VariantSet)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

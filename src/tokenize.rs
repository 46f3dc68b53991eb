//! Term extraction
//!
//! Splits name records on a delimiter and collects the pieces into a
//! deduplicated [`TermSet`].

use ahash::RandomState;
use hashbrown::HashSet;

/// Default delimiter between the terms of a symbol name
pub const DEFAULT_DELIMITER: char = '_';

/// Set of unique terms owned by one pipeline run.
///
/// Iteration order is unspecified; use [`TermSet::sorted`] for anything
/// that is exported.
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    terms: HashSet<String, RandomState>,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Add a term, returning true if it was not already present
    pub fn insert<S>(&mut self, term: S) -> bool
    where
        S: AsRef<str> + Into<String>,
    {
        if self.terms.contains(term.as_ref()) {
            return false;
        }
        self.terms.insert(term.into())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Terms in ascending code-point order
    pub fn sorted(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.iter().collect();
        terms.sort_unstable();
        terms
    }
}

impl FromIterator<String> for TermSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = TermSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<String> for TermSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.terms.extend(iter);
    }
}

impl IntoIterator for TermSet {
    type Item = String;
    type IntoIter = hashbrown::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a String;
    type IntoIter = hashbrown::hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Counters collected while tokenizing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizeStats {
    /// Records split
    pub records: u64,
    /// Terms produced, including repeats and empty terms
    pub tokens: u64,
    /// Terms already present in the set
    pub duplicates: u64,
}

/// Split every record on `delimiter` and collect all terms.
///
/// Adjacent delimiters produce empty terms; they are kept here and removed
/// by the noise filter.
pub fn tokenize<I, S>(records: I, delimiter: char) -> TermSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokenize_with_stats(records, delimiter).0
}

/// [`tokenize`], also returning split counters
pub fn tokenize_with_stats<I, S>(records: I, delimiter: char) -> (TermSet, TokenizeStats)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = TermSet::new();
    let mut stats = TokenizeStats::default();

    for record in records {
        stats.records += 1;
        for term in record.as_ref().split(delimiter) {
            stats.tokens += 1;
            if !set.insert(term) {
                stats.duplicates += 1;
            }
        }
    }

    log::debug!(
        "Tokenized {} records into {} terms ({} unique)",
        stats.records,
        stats.tokens,
        set.len()
    );

    (set, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_kernel_name() {
        let set = tokenize(["ioctl_deallocate_iso_resource"], DEFAULT_DELIMITER);

        assert_eq!(set.sorted(), vec!["deallocate", "ioctl", "iso", "resource"]);
    }

    #[test]
    fn test_adjacent_delimiters_yield_empty_term() {
        let set = tokenize(["a__b"], DEFAULT_DELIMITER);

        assert_eq!(set.len(), 3);
        assert!(set.contains(""));
        assert!(set.contains("a"));
        assert!(set.contains("b"));
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        let set = tokenize(["__init_", ""], DEFAULT_DELIMITER);
        assert_eq!(set.sorted(), vec!["", "init"]);
    }

    #[test]
    fn test_tokenize_dedups_across_records() {
        let (set, stats) =
            tokenize_with_stats(["usb_get_dev", "usb_put_dev", "usb"], DEFAULT_DELIMITER);

        assert_eq!(set.sorted(), vec!["dev", "get", "put", "usb"]);
        assert_eq!(stats.records, 3);
        assert_eq!(stats.tokens, 7);
        assert_eq!(stats.duplicates, 3);
    }

    #[test]
    fn test_custom_delimiter() {
        let set = tokenize(["net-dev-ops", "snake_case"], '-');
        assert_eq!(set.sorted(), vec!["dev", "net", "ops", "snake_case"]);
    }

    #[test]
    fn test_term_set_insert() {
        let mut set = TermSet::with_capacity(4);

        assert!(set.insert("kmalloc"));
        assert!(!set.insert("kmalloc"));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }
}

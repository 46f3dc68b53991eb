//! Case classification
//!
//! Splits terms into those usable in variable and function names (they
//! contain lowercase letters) and those usable in constant names.

use crate::tokenize::TermSet;

/// Naming style a term belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Contains at least one lowercase letter
    Variable,
    /// All-uppercase, or no letters at all
    Constant,
}

/// True if uppercasing the term changes it
#[inline]
pub fn has_lowercase(term: &str) -> bool {
    term.to_uppercase() != term
}

/// Bucket for a single term
#[inline]
pub fn bucket_of(term: &str) -> Bucket {
    if has_lowercase(term) {
        Bucket::Variable
    } else {
        Bucket::Constant
    }
}

/// Disjoint partition of a filtered term set
#[derive(Debug, Clone, Default)]
pub struct Classified {
    pub variable: TermSet,
    pub constant: TermSet,
}

impl Classified {
    /// Number of terms across both buckets
    pub fn len(&self) -> usize {
        self.variable.len() + self.constant.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable.is_empty() && self.constant.is_empty()
    }
}

/// Partition terms into variable and constant buckets
pub fn classify(set: &TermSet) -> Classified {
    let mut classified = Classified::default();

    for term in set.iter() {
        let bucket = match bucket_of(term) {
            Bucket::Variable => &mut classified.variable,
            Bucket::Constant => &mut classified.constant,
        };
        bucket.insert(term);
    }

    log::debug!(
        "Classified {} variable and {} constant terms",
        classified.variable.len(),
        classified.constant.len()
    );

    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(terms: &[&str]) -> TermSet {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_bucket_of() {
        assert_eq!(bucket_of("ioctl"), Bucket::Variable);
        assert_eq!(bucket_of("Mixed"), Bucket::Variable);
        assert_eq!(bucket_of("IRQ"), Bucket::Constant);
        assert_eq!(bucket_of("ABC123"), Bucket::Constant);
        assert_eq!(bucket_of("X1"), Bucket::Constant);
    }

    #[test]
    fn test_letterless_terms_are_constant() {
        assert_eq!(bucket_of("42"), Bucket::Constant);
        assert_eq!(bucket_of("$$"), Bucket::Constant);
    }

    #[test]
    fn test_unicode_lowercase() {
        assert!(has_lowercase("größe"));
        assert!(!has_lowercase("ΣΦ"));
    }

    #[test]
    fn test_classify_partitions() {
        let set = set_of(&["ioctl", "IRQ", "dev", "0", "Kobj"]);
        let classified = classify(&set);

        assert_eq!(classified.variable.sorted(), vec!["Kobj", "dev", "ioctl"]);
        assert_eq!(classified.constant.sorted(), vec!["0", "IRQ"]);
        assert_eq!(classified.len(), set.len());
    }

    #[test]
    fn test_classify_empty_set() {
        let classified = classify(&TermSet::new());
        assert!(classified.is_empty());
        assert!(classified.constant.is_empty());
    }
}

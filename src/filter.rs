//! Numeric noise filtering
//!
//! Drops terms that are mostly digits (version numbers, addresses, register
//! offsets) along with the empty term.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Result, WordlistError};
use crate::tokenize::TermSet;

/// Default numeric ratio above which a term counts as noise
pub const DEFAULT_RATIO_THRESHOLD: f64 = 0.5;

/// Default length a term must exceed before the ratio test applies
pub const DEFAULT_LENGTH_THRESHOLD: usize = 3;

/// Unicode decimal digit
fn digit_regex() -> &'static Regex {
    static DIGIT: OnceLock<Regex> = OnceLock::new();
    DIGIT.get_or_init(|| Regex::new(r"\d").expect("digit pattern is valid"))
}

/// Noise filter parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseFilter {
    /// Terms whose numeric ratio is strictly greater than this are noise
    pub ratio_threshold: f64,
    /// The ratio test only applies to terms longer than this
    pub length_threshold: usize,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self {
            ratio_threshold: DEFAULT_RATIO_THRESHOLD,
            length_threshold: DEFAULT_LENGTH_THRESHOLD,
        }
    }
}

impl NoiseFilter {
    /// Create a filter, rejecting a ratio threshold outside `[0, 1]`
    pub fn new(ratio_threshold: f64, length_threshold: usize) -> Result<Self> {
        if !ratio_threshold.is_finite() || !(0.0..=1.0).contains(&ratio_threshold) {
            return Err(WordlistError::InvalidConfig(format!(
                "ratio threshold must be within [0, 1], got {}",
                ratio_threshold
            )));
        }

        Ok(Self {
            ratio_threshold,
            length_threshold,
        })
    }

    /// Fraction of the term's characters that are decimal digits.
    ///
    /// `None` for the empty term, which has no ratio.
    pub fn numeric_ratio(term: &str) -> Option<f64> {
        let len = term.chars().count();
        if len == 0 {
            return None;
        }

        let digits = digit_regex().find_iter(term).count();
        Some(digits as f64 / len as f64)
    }

    /// Check whether a term should be dropped
    #[inline]
    pub fn is_noise(&self, term: &str) -> bool {
        match Self::numeric_ratio(term) {
            None => true,
            Some(ratio) => {
                ratio > self.ratio_threshold && term.chars().count() > self.length_threshold
            }
        }
    }
}

/// Counters collected while filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub empty_dropped: u64,
    pub numeric_dropped: u64,
    pub retained: u64,
}

/// Remove the empty term and numeric noise from a term set
pub fn filter_noise(set: TermSet, filter: &NoiseFilter) -> TermSet {
    filter_noise_with_stats(set, filter).0
}

/// [`filter_noise`], also returning drop counters
pub fn filter_noise_with_stats(set: TermSet, filter: &NoiseFilter) -> (TermSet, FilterStats) {
    let mut stats = FilterStats::default();
    let mut kept = TermSet::with_capacity(set.len());

    for term in set {
        if term.is_empty() {
            stats.empty_dropped += 1;
        } else if filter.is_noise(&term) {
            log::trace!("Dropping numeric term {:?}", term);
            stats.numeric_dropped += 1;
        } else {
            stats.retained += 1;
            kept.insert(term);
        }
    }

    log::debug!(
        "Noise filter kept {} terms, dropped {} numeric and {} empty",
        stats.retained,
        stats.numeric_dropped,
        stats.empty_dropped
    );

    (kept, stats)
}

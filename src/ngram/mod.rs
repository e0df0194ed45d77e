//! Character N-gram Similarity
//!
//! Represents a string as the set of its length-n contiguous substrings and
//! compares two strings with Jaccard similarity (|A∩B| / |A∪B|).
//!
//! Padding rule:
//! - A string shorter than n is right-padded with the sentinel character
//!   until it reaches length n, so it always produces at least one gram.
//! - The all-sentinel gram (n sentinels) is removed from the FIRST operand's
//!   set only; a padded query must not score against the padding artifacts
//!   of vocabulary entries.
//!
//! Both operands are lower-cased before gram extraction, so similarity is
//! case-insensitive even though vocabulary storage is not.

use std::collections::HashSet;

use crate::types::SENTINEL;

/// Generate every length-n contiguous substring of `text`.
///
/// An empty string yields no grams. A non-empty string shorter than `n` is
/// padded with [`SENTINEL`] to length `n` first, yielding exactly one gram.
pub fn generate_grams(text: &str, n: usize) -> Vec<String> {
    debug_assert!(n >= 1, "gram size must be >= 1");
    if text.is_empty() {
        return Vec::new();
    }

    let mut chars: Vec<char> = text.chars().collect();
    while chars.len() < n {
        chars.push(SENTINEL);
    }

    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// Jaccard similarity between the n-gram sets of two strings, in [0, 1].
///
/// When both gram sets are empty the inputs are indistinguishable at this
/// granularity and the similarity is defined as 1.0.
pub fn find_similarity(text1: &str, text2: &str, n: usize) -> f64 {
    let sentinel_gram: String = std::iter::repeat(SENTINEL).take(n).collect();

    let mut grams1: HashSet<String> = generate_grams(&text1.to_lowercase(), n)
        .into_iter()
        .collect();
    grams1.remove(&sentinel_gram);

    let grams2: HashSet<String> = generate_grams(&text2.to_lowercase(), n)
        .into_iter()
        .collect();

    let union = grams1.union(&grams2).count();
    if union == 0 {
        return 1.0;
    }
    let intersection = grams1.intersection(&grams2).count();

    intersection as f64 / union as f64
}

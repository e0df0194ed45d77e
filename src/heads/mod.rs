//! Multi-Head Similarity Features
//!
//! One similarity head computes the n-gram similarity between a query word
//! and every vocabulary entry for a single gram size. The multi-head layer
//! stacks one head per gram size from 1 to `head_count` and concatenates the
//! resulting column vectors into a feature matrix of shape
//! (vocabulary size × head count), columns ordered by increasing gram size.
//!
//! Head numbering is 1-based and equals the gram size: head 1 compares
//! unigrams, head 2 bigrams, and so on.

use std::sync::Arc;

use rayon::prelude::*;

use crate::ngram::find_similarity;
use crate::vocab::Vocabulary;

/// Similarity channel for a single gram size.
pub struct SimilarityHead {
    n: usize,
    vocabulary: Arc<Vocabulary>,
}

impl SimilarityHead {
    pub fn new(n: usize, vocabulary: Arc<Vocabulary>) -> Self {
        Self { n, vocabulary }
    }

    pub fn gram_size(&self) -> usize {
        self.n
    }

    /// Similarity between `word` and every vocabulary entry, in vocabulary
    /// order. Entries are scored independently, so the scan runs in
    /// parallel over the vocabulary.
    pub fn compute(&self, word: &str) -> Vec<f64> {
        self.vocabulary
            .words()
            .par_iter()
            .map(|entry| find_similarity(word, entry, self.n))
            .collect()
    }
}

/// Stack of similarity heads with gram sizes 1..=head_count.
pub struct MultiHead {
    heads: Vec<SimilarityHead>,
    vocabulary: Arc<Vocabulary>,
}

impl MultiHead {
    pub fn new(head_count: usize, vocabulary: Arc<Vocabulary>) -> Self {
        debug_assert!(head_count >= 1, "head_count must be >= 1");
        let heads = (1..=head_count)
            .map(|n| SimilarityHead::new(n, Arc::clone(&vocabulary)))
            .collect();
        Self { heads, vocabulary }
    }

    pub fn head_count(&self) -> usize {
        self.heads.len()
    }

    /// Feature matrix for `word`: flat row-major, vocabulary-size rows and
    /// head-count columns, column h holding head h's similarity vector.
    pub fn compute(&self, word: &str) -> Vec<f64> {
        let head_count = self.heads.len();
        let mut features = vec![0.0; self.vocabulary.len() * head_count];

        for (h, head) in self.heads.iter().enumerate() {
            let column = head.compute(word);
            for (i, value) in column.into_iter().enumerate() {
                features[i * head_count + h] = value;
            }
        }

        features
    }
}

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::Deserialize;

/// Corpus file format: `{"Data": [{"Text": "..."}]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Corpus {
    #[serde(rename = "Data")]
    pub data: Vec<CorpusRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorpusRecord {
    #[serde(rename = "Text")]
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("corpus contains no tokens")]
    EmptyCorpus,
}

impl Corpus {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Ordered, deduplicated, sorted word list.
///
/// Built once from the corpus and read-only afterwards. The sort order
/// defines the index space of the network's output distribution; membership
/// lookups are exact (case-sensitive).
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Extract the vocabulary from corpus records: every `Text` field is
    /// split on whitespace, then tokens are deduplicated and sorted.
    pub fn from_corpus(corpus: &Corpus) -> Result<Self, CorpusError> {
        let tokens: BTreeSet<String> = corpus
            .data
            .iter()
            .flat_map(|record| record.text.split_whitespace())
            .map(str::to_string)
            .collect();

        if tokens.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }

        Ok(Self::from_sorted_tokens(tokens))
    }

    /// Build directly from a word list (deduplicated and sorted).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: BTreeSet<String> = words.into_iter().map(Into::into).collect();
        Self::from_sorted_tokens(tokens)
    }

    fn from_sorted_tokens(tokens: BTreeSet<String>) -> Self {
        let words: Vec<String> = tokens.into_iter().collect();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, word)| (word.clone(), i))
            .collect();
        Self { words, index }
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

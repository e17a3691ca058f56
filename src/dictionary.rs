//! Dictionary management for spelling correction.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;

use crate::error::Result;

/// A dictionary of known-correct words.
///
/// Words are deduplicated and normalized to lowercase on entry; queries are
/// normalized the same way, so lookup behavior does not depend on the casing
/// of the source word list. Membership in the dictionary is the ground truth
/// for "correctly spelled".
///
/// A dictionary is built once and never mutated by the correction pipeline,
/// so it is safe to share across concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: AHashSet<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            words: AHashSet::new(),
        }
    }

    /// Build a dictionary from an iterator of words.
    ///
    /// Words are trimmed and lowercased; empty entries are skipped. This is
    /// the in-memory entry point for callers that load word lists themselves.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.add_word(word.as_ref());
        }
        dictionary
    }

    /// Load a dictionary from a text file with one word per line.
    ///
    /// Lines are trimmed; empty lines and entries containing non-alphabetic
    /// characters are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() && word.chars().all(|c| c.is_alphabetic()) {
                dictionary.add_word(word);
            }
        }

        Ok(dictionary)
    }

    /// Add a single word to the dictionary.
    ///
    /// Empty (or all-whitespace) words are ignored.
    pub fn add_word(&mut self, word: &str) {
        let normalized = word.trim().to_lowercase();
        if !normalized.is_empty() {
            self.words.insert(normalized);
        }
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in the dictionary.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }
}

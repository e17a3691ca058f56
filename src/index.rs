//! First-letter and length indexing for fast candidate narrowing.

use ahash::{AHashMap, AHashSet};

use crate::dictionary::Dictionary;

/// Default length window used by [`DictionaryIndex::candidates_near`].
pub const DEFAULT_DELTA: usize = 3;

/// A read-only index over a [`Dictionary`], keyed by first character and
/// word length.
///
/// The index is a lossless partition of the dictionary: a word appears in
/// exactly one bucket, under `(first char, length)`, and the union of all
/// buckets is the dictionary itself. Built once at engine construction and
/// never mutated afterward.
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    /// first char -> (word length -> words)
    buckets: AHashMap<char, AHashMap<usize, AHashSet<String>>>,
}

impl DictionaryIndex {
    /// Build an index from a dictionary.
    pub fn build(dictionary: &Dictionary) -> Self {
        let mut buckets: AHashMap<char, AHashMap<usize, AHashSet<String>>> = AHashMap::new();

        for word in dictionary.words() {
            // The dictionary excludes empty words, so first() always succeeds
            // for well-formed input; skip defensively otherwise.
            let Some(first) = word.chars().next() else {
                continue;
            };
            let length = word.chars().count();
            buckets
                .entry(first)
                .or_default()
                .entry(length)
                .or_default()
                .insert(word.to_string());
        }

        DictionaryIndex { buckets }
    }

    /// Return all dictionary words sharing `word`'s first character whose
    /// length lies within `delta` of `word`'s length (inclusive on both
    /// ends, never below 1).
    ///
    /// An unknown first character is a normal outcome, not an error: not
    /// every letter need start a dictionary word. The empty set is returned
    /// in that case, and for an empty input word.
    pub fn candidates_near(&self, word: &str, delta: usize) -> AHashSet<String> {
        let Some(first) = word.chars().next() else {
            return AHashSet::new();
        };
        let Some(by_length) = self.buckets.get(&first) else {
            return AHashSet::new();
        };

        let word_length = word.chars().count();
        let min_length = word_length.saturating_sub(delta).max(1);
        let max_length = word_length + delta;

        let mut candidates = AHashSet::new();
        for length in min_length..=max_length {
            if let Some(bucket) = by_length.get(&length) {
                candidates.extend(bucket.iter().cloned());
            }
        }

        candidates
    }

    /// Get the number of distinct `(first char, length)` buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.values().map(|by_length| by_length.len()).sum()
    }

    /// Get the total number of indexed words.
    pub fn word_count(&self) -> usize {
        self.buckets
            .values()
            .flat_map(|by_length| by_length.values())
            .map(|bucket| bucket.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> DictionaryIndex {
        let dict = Dictionary::from_words(["cat", "cot", "cattle", "bat", "dog"]);
        DictionaryIndex::build(&dict)
    }

    #[test]
    fn test_index_is_lossless_partition() {
        let dict = Dictionary::from_words(["cat", "cot", "cattle", "bat", "dog"]);
        let index = DictionaryIndex::build(&dict);

        assert_eq!(index.word_count(), dict.len());
        // cat/cot share ('c', 3); cattle, bat, dog get their own buckets
        assert_eq!(index.bucket_count(), 4);
    }

    #[test]
    fn test_candidates_share_first_char_and_length_window() {
        let index = sample_index();

        let candidates = index.candidates_near("caat", 3);
        assert_eq!(candidates.len(), 3);
        assert!(candidates.contains("cat"));
        assert!(candidates.contains("cot"));
        assert!(candidates.contains("cattle"));

        for candidate in &candidates {
            assert!(candidate.starts_with('c'));
            assert!(candidate.len().abs_diff(4) <= 3);
        }
    }

    #[test]
    fn test_window_is_inclusive_on_both_ends() {
        let index = sample_index();

        // len("ca") = 2, delta 1 -> lengths 1..=3 must include "cat" and "cot"
        let candidates = index.candidates_near("ca", 1);
        assert!(candidates.contains("cat"));
        assert!(candidates.contains("cot"));
        assert!(!candidates.contains("cattle"));

        // len("cattl") = 5, delta 1 -> lengths 4..=6 must include "cattle"
        let candidates = index.candidates_near("cattl", 1);
        assert!(candidates.contains("cattle"));
        assert!(!candidates.contains("cat"));
    }

    #[test]
    fn test_window_lower_bound_never_reaches_zero() {
        let dict = Dictionary::from_words(["a", "at"]);
        let index = DictionaryIndex::build(&dict);

        // len("a") = 1, delta 3 -> lengths 1..=4 even though 1 - 3 underflows
        let candidates = index.candidates_near("a", 3);
        assert!(candidates.contains("a"));
        assert!(candidates.contains("at"));
    }

    #[test]
    fn test_unknown_first_char_yields_empty_set() {
        let index = sample_index();
        assert!(index.candidates_near("zzz", 3).is_empty());
    }

    #[test]
    fn test_empty_word_yields_empty_set() {
        let index = sample_index();
        assert!(index.candidates_near("", 3).is_empty());
    }
}

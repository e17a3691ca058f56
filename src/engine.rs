//! Correction engine that orchestrates membership checks, candidate
//! narrowing, scoring, and selection.

use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;
use crate::distance::{DistanceScorer, EditCosts};
use crate::error::{RespellError, Result};
use crate::index::{DEFAULT_DELTA, DictionaryIndex};
use crate::select::{ScoredCandidate, top_k};

/// Trait for stemming algorithms supplied by the caller.
///
/// When a stemmer is attached to the engine, a word also counts as correct
/// when its stem is a dictionary word. The stemming algorithm itself lives
/// outside this crate.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Configuration for the correction engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Length window for candidate narrowing: candidates may differ from the
    /// input word's length by at most this much.
    pub delta: usize,
    /// Maximum number of suggestions to return per word.
    pub max_suggestions: usize,
    /// Edit operation costs used for ranking.
    pub costs: EditCosts,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            delta: DEFAULT_DELTA,
            max_suggestions: 5,
            costs: EditCosts::default(),
        }
    }
}

/// The outcome of checking one word.
///
/// `Correct` is deliberately distinct from a misspelling whose top candidate
/// happens to equal the input: callers can always tell "already correct"
/// from "replaceable". The suggestion list never contains a "keep original"
/// entry; keeping the original word is the caller's fallback, decided
/// outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Correction {
    /// The word (or its stem) is in the dictionary; no correction needed.
    Correct,
    /// The word is not in the dictionary. Suggestions are ordered ascending
    /// by `(distance, word)` and may be empty when no candidate fell inside
    /// the narrowing window.
    Misspelled(Vec<ScoredCandidate>),
}

impl Correction {
    /// Check if the word was already correct.
    pub fn is_correct(&self) -> bool {
        matches!(self, Correction::Correct)
    }

    /// Get the ranked suggestions, empty for correct words.
    pub fn suggestions(&self) -> &[ScoredCandidate] {
        match self {
            Correction::Correct => &[],
            Correction::Misspelled(suggestions) => suggestions,
        }
    }

    /// Get the best suggestion, if any.
    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.suggestions().first()
    }
}

/// Correction engine over an owned dictionary.
///
/// The dictionary and its index are built once at construction and never
/// mutated, so a shared engine can serve concurrent `suggest` calls without
/// locking. The engine keeps no per-word state; results depend only on the
/// dictionary and configuration.
pub struct CorrectionEngine {
    dictionary: Dictionary,
    index: DictionaryIndex,
    config: EngineConfig,
    stemmer: Option<Box<dyn Stemmer>>,
}

impl CorrectionEngine {
    /// Create a new engine with the default configuration.
    ///
    /// Returns a configuration error for an empty dictionary: silently
    /// flagging every word as misspelled with no suggestions would mask a
    /// broken dictionary source.
    pub fn new(dictionary: Dictionary) -> Result<Self> {
        Self::with_config(dictionary, EngineConfig::default())
    }

    /// Create a new engine with a custom configuration.
    pub fn with_config(dictionary: Dictionary, config: EngineConfig) -> Result<Self> {
        if dictionary.is_empty() {
            return Err(RespellError::dictionary(
                "dictionary contains no words; refusing to build engine",
            ));
        }
        if config.max_suggestions == 0 {
            return Err(RespellError::config("max_suggestions must be non-zero"));
        }

        let index = DictionaryIndex::build(&dictionary);
        Ok(CorrectionEngine {
            dictionary,
            index,
            config,
            stemmer: None,
        })
    }

    /// Attach a stemmer; a word whose stem is in the dictionary counts as
    /// correct.
    pub fn with_stemmer(mut self, stemmer: Box<dyn Stemmer>) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the underlying dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Check if a word is correctly spelled.
    pub fn is_correct(&self, word: &str) -> bool {
        if self.dictionary.contains(word) {
            return true;
        }
        if let Some(stemmer) = &self.stemmer {
            return self.dictionary.contains(&stemmer.stem(word));
        }
        false
    }

    /// Suggest corrections for a word.
    ///
    /// Dictionary words short-circuit to [`Correction::Correct`] without any
    /// candidate scoring. Otherwise candidates sharing the word's first
    /// character and near its length are scored by weighted edit distance
    /// and the best `max_suggestions` are returned in ascending order. An
    /// empty suggestion list is a normal outcome, not an error.
    pub fn suggest(&self, word: &str) -> Correction {
        let normalized = word.to_lowercase();

        if self.is_correct(&normalized) {
            return Correction::Correct;
        }

        let candidates = self.index.candidates_near(&normalized, self.config.delta);
        if candidates.is_empty() {
            return Correction::Misspelled(Vec::new());
        }

        let scorer = DistanceScorer::with_costs(normalized, self.config.costs);
        let suggestions = top_k(
            &scorer,
            candidates.iter().map(|c| c.as_str()),
            self.config.max_suggestions,
        );

        Correction::Misspelled(suggestions)
    }

    /// Check a sequence of words, pairing each with its outcome.
    ///
    /// A word without suggestions never stops the batch; subsequent words
    /// are still processed.
    pub fn check<I, S>(&self, words: I) -> Vec<(String, Correction)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| {
                let word = word.as_ref().to_string();
                let correction = self.suggest(&word);
                (word, correction)
            })
            .collect()
    }
}

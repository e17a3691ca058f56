//! # Respell
//!
//! An edit-distance based spelling correction library for Rust.
//!
//! Respell checks words against a static dictionary and ranks candidate
//! corrections by a weighted edit distance, returning the best matches for
//! the caller to choose from.
//!
//! ## Features
//!
//! - First-letter and length indexing for fast candidate narrowing
//! - Weighted Levenshtein distance with configurable operation costs
//! - Bounded top-k selection with deterministic ordering
//! - Pluggable stemmer seam for caller-supplied morphology
//!
//! ## Example
//!
//! ```
//! use respell::{CorrectionEngine, Dictionary};
//!
//! let dictionary = Dictionary::from_words(["cat", "cot", "bat", "dog"]);
//! let engine = CorrectionEngine::new(dictionary)?;
//!
//! let correction = engine.suggest("caat");
//! assert!(!correction.is_correct());
//! assert_eq!(correction.best().unwrap().word, "cat");
//! # Ok::<(), respell::RespellError>(())
//! ```

pub mod dictionary;
pub mod distance;
pub mod engine;
pub mod error;
pub mod index;
pub mod select;

// Re-export commonly used types
pub use dictionary::Dictionary;
pub use distance::{DistanceScorer, EditCosts, edit_distance, edit_distance_with_costs};
pub use engine::{Correction, CorrectionEngine, EngineConfig, Stemmer};
pub use error::{RespellError, Result};
pub use index::{DEFAULT_DELTA, DictionaryIndex};
pub use select::{ScoredCandidate, top_k};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

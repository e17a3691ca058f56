//! Bounded top-k selection over scored candidates.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceScorer;

/// A candidate word paired with its edit distance from the input word.
///
/// Candidates order ascending by `(distance, word)`: ties on distance break
/// lexicographically on the candidate string, so selection results are
/// reproducible regardless of the iteration order of the candidate set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The candidate word.
    pub word: String,
    /// Edit distance from the input word.
    pub distance: usize,
}

impl ScoredCandidate {
    /// Create a new scored candidate.
    pub fn new(word: String, distance: usize) -> Self {
        ScoredCandidate { word, distance }
    }
}

impl Ord for ScoredCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for ScoredCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Select the `k` best-scoring candidates for a query word.
///
/// A max-heap bounded at `k` entries holds the best candidates seen so far;
/// once full, a newcomer displaces the current worst entry only when it
/// orders strictly before it. The result is emitted ascending, best first.
///
/// An empty candidate set (or `k == 0`) yields an empty result, not an
/// error.
pub fn top_k<'a, I>(scorer: &DistanceScorer, candidates: I, k: usize) -> Vec<ScoredCandidate>
where
    I: IntoIterator<Item = &'a str>,
{
    if k == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<ScoredCandidate> = BinaryHeap::with_capacity(k + 1);

    for candidate in candidates {
        let scored = ScoredCandidate::new(candidate.to_string(), scorer.distance(candidate));

        if heap.len() < k {
            heap.push(scored);
        } else if let Some(worst) = heap.peek()
            && scored < *worst
        {
            heap.pop();
            heap.push(scored);
        }
    }

    heap.into_sorted_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer_for(word: &str) -> DistanceScorer {
        DistanceScorer::new(word.to_string())
    }

    #[test]
    fn test_scored_candidate_ordering() {
        let near = ScoredCandidate::new("cat".to_string(), 1);
        let far = ScoredCandidate::new("cot".to_string(), 3);
        let tied = ScoredCandidate::new("bat".to_string(), 1);

        assert!(near < far);
        // Equal distance breaks lexicographically
        assert!(tied < near);
    }

    #[test]
    fn test_top_k_never_exceeds_k() {
        let scorer = scorer_for("caat");
        let candidates = ["cat", "cot", "coat", "chat", "cart"];

        let result = top_k(&scorer, candidates, 2);
        assert_eq!(result.len(), 2);

        let result = top_k(&scorer, candidates, 10);
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_top_k_sorted_ascending_by_distance() {
        let scorer = scorer_for("caat");
        let result = top_k(&scorer, ["cot", "cat", "cart"], 3);

        for pair in result.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
        assert_eq!(result[0].word, "cat");
        assert_eq!(result[0].distance, 1);
    }

    #[test]
    fn test_top_k_keeps_lowest_distances() {
        let scorer = scorer_for("caat");
        // distances: cat=1, coat=2, cot=3
        let result = top_k(&scorer, ["cot", "cat", "coat"], 2);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0], ScoredCandidate::new("cat".to_string(), 1));
        assert_eq!(result[1], ScoredCandidate::new("coat".to_string(), 2));
    }

    #[test]
    fn test_tie_break_is_lexicographic_and_order_independent() {
        let scorer = scorer_for("dat");
        // All one insertion away from "dat"
        let forward = top_k(&scorer, ["dart", "data", "date"], 2);
        let backward = top_k(&scorer, ["date", "data", "dart"], 2);

        assert_eq!(forward, backward);
        assert_eq!(forward[0].word, "dart");
        assert_eq!(forward[1].word, "data");
    }

    #[test]
    fn test_empty_candidates_yield_empty_result() {
        let scorer = scorer_for("caat");
        let no_candidates: [&str; 0] = [];
        assert!(top_k(&scorer, no_candidates, 5).is_empty());
    }

    #[test]
    fn test_k_zero_yields_empty_result() {
        let scorer = scorer_for("caat");
        assert!(top_k(&scorer, ["cat"], 0).is_empty());
    }
}

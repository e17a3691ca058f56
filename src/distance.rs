//! Weighted edit distance calculation for spelling correction.

use std::cmp::min;

use serde::{Deserialize, Serialize};

/// Per-operation costs for the weighted edit distance.
///
/// The defaults (insert 1, delete 1, substitute 2) deliberately price a
/// substitution at the same total as a delete-plus-insert. Note that with an
/// arbitrary substitution cost the function is not a metric: the triangle
/// inequality is not guaranteed, so callers must not assume metric
/// properties. Symmetry does hold whenever `insert == delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCosts {
    /// Cost of inserting a character.
    pub insert: usize,
    /// Cost of deleting a character.
    pub delete: usize,
    /// Cost of substituting one character for another.
    pub substitute: usize,
}

impl Default for EditCosts {
    fn default() -> Self {
        EditCosts {
            insert: 1,
            delete: 1,
            substitute: 2,
        }
    }
}

/// Calculate the weighted edit distance between two strings using the
/// default costs (insert 1, delete 1, substitute 2).
pub fn edit_distance(s1: &str, s2: &str) -> usize {
    edit_distance_with_costs(s1, s2, EditCosts::default())
}

/// Calculate the minimum total cost of single-character insertions,
/// deletions, and substitutions transforming `s1` into `s2`.
///
/// Classic dynamic programming over a `(len(s1)+1) x (len(s2)+1)` table.
/// Equal characters take the diagonal at no cost.
#[allow(clippy::needless_range_loop)]
pub fn edit_distance_with_costs(s1: &str, s2: &str, costs: EditCosts) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2 * costs.insert;
    }
    if len2 == 0 {
        return len1 * costs.delete;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    // Initialize first row and column
    for i in 0..=len1 {
        matrix[i][0] = i * costs.delete;
    }
    for j in 0..=len2 {
        matrix[0][j] = j * costs.insert;
    }

    // Fill the matrix
    for i in 1..=len1 {
        for j in 1..=len2 {
            if s1_chars[i - 1] == s2_chars[j - 1] {
                matrix[i][j] = matrix[i - 1][j - 1];
            } else {
                matrix[i][j] = min(
                    min(
                        matrix[i - 1][j] + costs.delete,    // deletion
                        matrix[i][j - 1] + costs.insert,    // insertion
                    ),
                    matrix[i - 1][j - 1] + costs.substitute, // substitution
                );
            }
        }
    }

    matrix[len1][len2]
}

/// Scorer that holds a query word and cost table for repeated distance
/// calculations against many candidates.
#[derive(Debug, Clone)]
pub struct DistanceScorer {
    query: String,
    costs: EditCosts,
}

impl DistanceScorer {
    /// Create a new scorer for the given query string with default costs.
    pub fn new(query: String) -> Self {
        DistanceScorer {
            query,
            costs: EditCosts::default(),
        }
    }

    /// Create a new scorer with custom costs.
    pub fn with_costs(query: String, costs: EditCosts) -> Self {
        DistanceScorer { query, costs }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Calculate distance from the query to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        edit_distance_with_costs(&self.query, candidate, self.costs)
    }
}

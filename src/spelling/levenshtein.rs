//! Keyboard-weighted edit distance.
//!
//! Insertions and deletions cost 1; substitutions cost whatever
//! [`TypoPatterns::substitution_cost`] charges, so a slip onto a neighbouring
//! key is cheaper than an arbitrary replacement.
//!
//! The distance is computed *from* `source` *to* `target`. Because the
//! adjacency table is not symmetric, swapping the arguments can change the
//! result.

use std::cmp::min;

use crate::spelling::typo_patterns::TypoPatterns;

/// Minimum cost of transforming `source` into `target`.
///
/// # Examples
///
/// ```
/// use keyspell::spelling::levenshtein::keyboard_distance;
///
/// assert_eq!(keyboard_distance("world", "wprld"), 1); // p sits next to o
/// assert_eq!(keyboard_distance("cat", "bat"), 2);     // b and c are not neighbours
/// ```
pub fn keyboard_distance(target: &str, source: &str) -> usize {
    let target_chars: Vec<char> = target.chars().collect();
    let source_chars: Vec<char> = source.chars().collect();
    distance_chars(&target_chars, &source_chars)
}

/// Keyboard distance with a maximum threshold for early termination.
///
/// Returns `None` if the distance exceeds `threshold`; otherwise returns
/// exactly what [`keyboard_distance`] would.
pub fn keyboard_distance_threshold(target: &str, source: &str, threshold: usize) -> Option<usize> {
    let target_chars: Vec<char> = target.chars().collect();
    let source_chars: Vec<char> = source.chars().collect();
    distance_chars_threshold(&target_chars, &source_chars, threshold)
}

#[allow(clippy::needless_range_loop)]
fn distance_chars(target: &[char], source: &[char]) -> usize {
    let n = target.len();
    let m = source.len();

    let mut matrix = vec![vec![0; m + 1]; n + 1];

    // Initialize first row and column
    for i in 0..=n {
        matrix[i][0] = i;
    }
    for j in 0..=m {
        matrix[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = TypoPatterns::substitution_cost(source[j - 1], target[i - 1]);

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // insertion
                    matrix[i][j - 1] + 1, // deletion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[n][m]
}

#[allow(clippy::needless_range_loop)]
fn distance_chars_threshold(target: &[char], source: &[char], threshold: usize) -> Option<usize> {
    let n = target.len();
    let m = source.len();

    // Every surplus character needs its own unit-cost insertion or deletion
    if n.abs_diff(m) > threshold {
        return None;
    }

    // Use only two rows for space optimization
    let mut prev_row: Vec<usize> = (0..=m).collect();
    let mut curr_row = vec![0; m + 1];

    for i in 1..=n {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=m {
            let cost = TypoPatterns::substitution_cost(source[j - 1], target[i - 1]);

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // insertion
                    curr_row[j - 1] + 1, // deletion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Costs never decrease along a path, so no later row can recover
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[m];
    if distance <= threshold {
        Some(distance)
    } else {
        None
    }
}

/// Scores many candidates against one query without re-decoding the query
/// for every comparison. The query is always the target side.
#[derive(Debug, Clone)]
pub struct KeyboardMatcher {
    query: String,
    query_chars: Vec<char>,
}

impl KeyboardMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let query_chars = query.chars().collect();

        KeyboardMatcher { query, query_chars }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Calculate distance from a candidate to the query.
    pub fn distance(&self, candidate: &str) -> usize {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        distance_chars(&self.query_chars, &candidate_chars)
    }

    /// Calculate distance with threshold for early termination.
    pub fn distance_threshold(&self, candidate: &str, threshold: usize) -> Option<usize> {
        let candidate_len = candidate.chars().count();
        if self.query_chars.len().abs_diff(candidate_len) > threshold {
            return None;
        }

        let candidate_chars: Vec<char> = candidate.chars().collect();
        distance_chars_threshold(&self.query_chars, &candidate_chars, threshold)
    }

    /// Check if a candidate is within the given edit distance threshold.
    pub fn is_match(&self, candidate: &str, max_distance: usize) -> bool {
        self.distance_threshold(candidate, max_distance).is_some()
    }
}

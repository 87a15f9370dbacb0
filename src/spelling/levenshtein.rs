//! Levenshtein distance calculation for spelling correction.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another. Both strings are lowercased first and lengths
/// are counted in characters. Transpositions cost two edits.
///
/// # Examples
///
/// ```
/// use lexmatch::spelling::levenshtein::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("Search", "search"), 0);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.to_lowercase().chars().collect();
    let b_chars: Vec<char> = b.to_lowercase().chars().collect();

    distance_chars(&a_chars, &b_chars)
}

/// Two-row Levenshtein recurrence over pre-normalized character slices.
fn distance_chars(a: &[char], b: &[char]) -> usize {
    let len1 = a.len();
    let len2 = b.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Distance calculator for one query against many candidates.
///
/// The query is lowercased and split into characters once.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: &str) -> Self {
        LevenshteinMatcher {
            query_chars: query.to_lowercase().chars().collect(),
        }
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        let candidate_chars: Vec<char> = candidate.to_lowercase().chars().collect();
        distance_chars(&self.query_chars, &candidate_chars)
    }
}

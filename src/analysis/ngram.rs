//! Character n-gram decomposition.

use std::collections::HashSet;

use crate::analysis::normalizer::normalize_word;
use crate::error::{LexmatchError, Result};

/// Decompose a word into its set of overlapping character n-grams.
///
/// The word is lowercased first. A word shorter than `n` characters yields a
/// single-element set holding the whole word, so the result is never empty.
///
/// # Errors
///
/// Returns an error if `n` is 0.
///
/// # Examples
///
/// ```
/// use lexmatch::analysis::ngram::ngrams;
///
/// let grams = ngrams("Cat", 2).unwrap();
/// assert_eq!(grams.len(), 2);
/// assert!(grams.contains("ca"));
/// assert!(grams.contains("at"));
///
/// // Shorter than n
/// let grams = ngrams("ox", 3).unwrap();
/// assert!(grams.contains("ox"));
/// ```
pub fn ngrams(word: &str, n: usize) -> Result<HashSet<String>> {
    if n == 0 {
        return Err(LexmatchError::invalid_argument(
            "n-gram size must be at least 1",
        ));
    }

    let normalized = normalize_word(word);
    let chars: Vec<char> = normalized.chars().collect();

    if chars.len() < n {
        return Ok(HashSet::from([normalized]));
    }

    Ok(chars
        .windows(n)
        .map(|window| window.iter().collect::<String>())
        .collect())
}

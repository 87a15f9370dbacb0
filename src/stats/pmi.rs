//! Pointwise mutual information over a sliding co-occurrence window.
//!
//! Each review is tokenized with [`tokenize`]. A token at position `i` is
//! paired with every token at positions `i+1 .. i+window_size` (exclusive), so
//! a window of 5 covers the next four tokens. Pairs are unordered: `(b, a)` is
//! counted as `(a, b)` when `a <= b`. A pair seen `c` times among `N` tokens
//! scores `log2((c/N) / ((c1/N) * (c2/N)))`.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::tokenize;
use crate::error::{LexmatchError, Result};

/// Configuration for word association scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PmiConfig {
    /// Span of the co-occurrence window, including the anchor token.
    pub window_size: usize,
    /// Minimum co-occurrence count for a pair to be scored.
    pub min_count: usize,
    /// Maximum number of associations to return.
    pub limit: usize,
}

impl Default for PmiConfig {
    fn default() -> Self {
        PmiConfig {
            window_size: 5,
            min_count: 2,
            limit: 100,
        }
    }
}

/// A scored word pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordAssociation {
    /// Lexicographically smaller word of the pair.
    pub first: String,
    /// Lexicographically larger (or equal) word of the pair.
    pub second: String,
    /// PMI in bits.
    pub pmi: f64,
    /// Number of co-occurrences within the window.
    pub count: usize,
}

/// Score word pairs co-occurring in `reviews` by PMI, highest first.
///
/// # Errors
///
/// Returns an error if `window_size` is below 2, which would admit no pairs.
pub fn word_associations<S: AsRef<str>>(
    reviews: &[S],
    config: &PmiConfig,
) -> Result<Vec<WordAssociation>> {
    if config.window_size < 2 {
        return Err(LexmatchError::invalid_argument(format!(
            "window_size must be at least 2, got {}",
            config.window_size
        )));
    }

    let mut word_counts: HashMap<String, usize> = HashMap::new();
    let mut pair_counts: HashMap<(String, String), usize> = HashMap::new();
    let mut total_tokens = 0usize;

    for review in reviews {
        let words = tokenize(review.as_ref());
        total_tokens += words.len();

        for word in &words {
            *word_counts.entry(word.clone()).or_insert(0) += 1;
        }

        for i in 0..words.len() {
            let end = (i + config.window_size).min(words.len());
            for j in (i + 1)..end {
                let pair = if words[i] <= words[j] {
                    (words[i].clone(), words[j].clone())
                } else {
                    (words[j].clone(), words[i].clone())
                };
                *pair_counts.entry(pair).or_insert(0) += 1;
            }
        }
    }

    log::debug!(
        "Counted {} tokens, {} distinct words, {} distinct pairs",
        total_tokens,
        word_counts.len(),
        pair_counts.len()
    );

    let total = total_tokens as f64;
    let mut associations: Vec<WordAssociation> = pair_counts
        .into_iter()
        .filter(|(_, count)| *count >= config.min_count)
        .map(|((first, second), count)| {
            let p_pair = count as f64 / total;
            let p_first = word_counts[&first] as f64 / total;
            let p_second = word_counts[&second] as f64 / total;
            WordAssociation {
                pmi: (p_pair / (p_first * p_second)).log2(),
                first,
                second,
                count,
            }
        })
        .collect();

    associations.sort_by(|a, b| {
        b.pmi
            .partial_cmp(&a.pmi)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.first.cmp(&b.first))
            .then_with(|| a.second.cmp(&b.second))
    });
    associations.truncate(config.limit);

    Ok(associations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(window_size: usize, min_count: usize) -> PmiConfig {
        PmiConfig {
            window_size,
            min_count,
            limit: 100,
        }
    }

    #[test]
    fn test_single_pair() {
        let associations = word_associations(&["Hello, world!"], &config(5, 1)).unwrap();

        assert_eq!(associations.len(), 1);
        assert_eq!(associations[0].first, "hello");
        assert_eq!(associations[0].second, "world");
        assert_eq!(associations[0].count, 1);
        // (1/2) / ((1/2) * (1/2)) = 2
        assert!((associations[0].pmi - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_window_bounds_pairs() {
        // Window 2 only pairs adjacent tokens
        let associations = word_associations(&["a b c"], &config(2, 1)).unwrap();
        let pairs: Vec<_> = associations
            .iter()
            .map(|a| (a.first.as_str(), a.second.as_str()))
            .collect();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&("a", "b")));
        assert!(pairs.contains(&("b", "c")));
    }

    #[test]
    fn test_pairs_are_unordered() {
        let associations = word_associations(&["x y", "y x"], &config(5, 2)).unwrap();
        assert_eq!(associations.len(), 1);
        assert_eq!(associations[0].count, 2);
        assert_eq!(associations[0].first, "x");
    }

    #[test]
    fn test_min_count_filters() {
        let reviews = ["love this scent", "love this bottle", "hate the cap"];
        let associations = word_associations(&reviews, &config(5, 2)).unwrap();

        assert_eq!(associations.len(), 1);
        assert_eq!(associations[0].first, "love");
        assert_eq!(associations[0].second, "this");
        assert_eq!(associations[0].count, 2);
    }

    #[test]
    fn test_sorted_descending() {
        let reviews = [
            "rare pair common common",
            "rare pair common common",
            "common common common",
        ];
        let associations = word_associations(&reviews, &config(5, 1)).unwrap();
        assert!(associations.windows(2).all(|w| w[0].pmi >= w[1].pmi));
        assert_eq!(associations[0].first, "pair");
        assert_eq!(associations[0].second, "rare");
    }

    #[test]
    fn test_limit() {
        let reviews = ["a b c d e f g"];
        let associations = word_associations(
            &reviews,
            &PmiConfig {
                window_size: 5,
                min_count: 1,
                limit: 3,
            },
        )
        .unwrap();
        assert_eq!(associations.len(), 3);
    }

    #[test]
    fn test_empty_corpus() {
        let reviews: [&str; 0] = [];
        assert!(word_associations(&reviews, &PmiConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_window_too_small() {
        let result = word_associations(&["a b"], &config(1, 1));
        assert!(matches!(result, Err(LexmatchError::InvalidArgument(_))));
    }
}

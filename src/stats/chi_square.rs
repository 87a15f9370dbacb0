//! Chi-square feature selection over sentiment-labeled reviews.
//!
//! Every review contributes the set of its distinct tokens. For each word the
//! 2x2 contingency table is
//!
//! |              | positive | negative |
//! |--------------|----------|----------|
//! | contains     | A        | C        |
//! | does not     | B        | D        |
//!
//! and the score is `N (AD - BC)^2 / ((A+B)(C+D)(A+C)(B+D))`. Words whose
//! table has an empty margin are skipped.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::tokenize;
use crate::error::{LexmatchError, Result};

/// Default number of features returned.
pub const DEFAULT_FEATURE_LIMIT: usize = 100;

/// Sentiment label of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

/// Which label a feature leans towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Association {
    Positive,
    Negative,
    Ambiguous,
}

impl std::fmt::Display for Association {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Association::Positive => write!(f, "Positive"),
            Association::Negative => write!(f, "Negative"),
            Association::Ambiguous => write!(f, "Ambiguous"),
        }
    }
}

/// A word with its chi-square score and document counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScore {
    pub word: String,
    pub score: f64,
    /// Positive reviews containing the word.
    pub positive_count: usize,
    /// Negative reviews containing the word.
    pub negative_count: usize,
}

impl FeatureScore {
    /// The label whose reviews contain this word more often.
    pub fn association(&self) -> Association {
        match self.positive_count.cmp(&self.negative_count) {
            Ordering::Greater => Association::Positive,
            Ordering::Less => Association::Negative,
            Ordering::Equal => Association::Ambiguous,
        }
    }
}

/// Sentiment lexicons used to label reviews without annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    pub positive: HashSet<String>,
    pub negative: HashSet<String>,
    /// Tokens that break a tie towards positive.
    pub fallback_positive: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let set = |words: &[&str]| -> HashSet<String> {
            words.iter().map(|w| w.to_string()).collect()
        };
        Lexicon {
            positive: set(&[
                "love", "great", "amazing", "wonderful", "best", "excellent", "delight",
                "luxurious", "pleasant", "liked", "loveit", "favorite",
            ]),
            negative: set(&[
                "bad", "disappoint", "disappointed", "not", "don't", "dont", "return", "worst",
                "odd", "oddest", "expensive", "pricey", "overpowering",
            ]),
            fallback_positive: ["love", "great", "amazing", "like"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}

impl Lexicon {
    /// Label one review by counting lexicon hits.
    pub fn label(&self, review: &str) -> Label {
        let words = tokenize(review);
        let positive = words.iter().filter(|w| self.positive.contains(*w)).count();
        let negative = words.iter().filter(|w| self.negative.contains(*w)).count();

        match positive.cmp(&negative) {
            Ordering::Greater => Label::Positive,
            Ordering::Less => Label::Negative,
            Ordering::Equal => {
                if words.iter().any(|w| self.fallback_positive.contains(w)) {
                    Label::Positive
                } else {
                    Label::Negative
                }
            }
        }
    }
}

/// Label every review with the lexicon.
pub fn auto_label<S: AsRef<str>>(reviews: &[S], lexicon: &Lexicon) -> Vec<Label> {
    reviews.iter().map(|r| lexicon.label(r.as_ref())).collect()
}

/// Rank words by chi-square association with the review labels, highest first.
///
/// # Errors
///
/// Returns an error if `reviews` and `labels` differ in length.
pub fn chi_square_features<S: AsRef<str>>(
    reviews: &[S],
    labels: &[Label],
    limit: usize,
) -> Result<Vec<FeatureScore>> {
    if reviews.len() != labels.len() {
        return Err(LexmatchError::invalid_argument(format!(
            "got {} reviews but {} labels",
            reviews.len(),
            labels.len()
        )));
    }

    let total = reviews.len();
    let num_positive = labels.iter().filter(|l| **l == Label::Positive).count();
    let num_negative = total - num_positive;

    // word -> (positive docs, negative docs)
    let mut doc_counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (review, label) in reviews.iter().zip(labels) {
        let words: HashSet<String> = tokenize(review.as_ref()).into_iter().collect();
        for word in words {
            let counts = doc_counts.entry(word).or_insert((0, 0));
            match label {
                Label::Positive => counts.0 += 1,
                Label::Negative => counts.1 += 1,
            }
        }
    }

    let mut features: Vec<FeatureScore> = doc_counts
        .into_iter()
        .filter_map(|(word, (a, c))| {
            let b = num_positive - a;
            let d = num_negative - c;
            let score = chi_square(total, a, b, c, d)?;
            Some(FeatureScore {
                word,
                score,
                positive_count: a,
                negative_count: c,
            })
        })
        .collect();

    features.sort_by(|x, y| {
        y.score
            .partial_cmp(&x.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| x.word.cmp(&y.word))
    });
    features.truncate(limit);

    Ok(features)
}

/// Chi-square statistic of a 2x2 table, `None` when a margin is empty.
fn chi_square(n: usize, a: usize, b: usize, c: usize, d: usize) -> Option<f64> {
    let (a, b, c, d) = (a as f64, b as f64, c as f64, d as f64);
    let denominator = (a + b) * (c + d) * (a + c) * (b + d);
    if denominator == 0.0 {
        return None;
    }
    Some(n as f64 * (a * d - b * c).powi(2) / denominator)
}

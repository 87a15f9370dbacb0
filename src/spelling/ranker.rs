//! Top-k ranking of vocabulary candidates against a target word.
//!
//! A [`Ranker`] scores every candidate with the metric selected by a
//! [`RankingMode`], sorts once and truncates to the configured `top_k`.
//! Ties are broken by the lowercased candidate word in ascending order, then
//! by the raw word, so the output order is fully deterministic.
//!
//! # Examples
//!
//! ```
//! use lexmatch::spelling::ranker::top_matches_by_distance;
//!
//! let vocabulary = ["abandon", "ability", "about"];
//! let results = top_matches_by_distance("abbandon", &vocabulary, 10);
//!
//! assert_eq!(results[0].word, "abandon");
//! assert_eq!(results[0].score, 1);
//! ```

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::ngram::ngrams;
use crate::analysis::normalizer::normalize_word;
use crate::error::Result;
use crate::spelling::jaccard::jaccard;
use crate::spelling::levenshtein::LevenshteinMatcher;

/// Default number of results returned by a ranking.
pub const DEFAULT_TOP_K: usize = 10;

/// A candidate word paired with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult<S> {
    /// The candidate as it appears in the vocabulary.
    pub word: String,
    /// Jaccard similarity or edit distance, depending on the ranking mode.
    pub score: S,
}

impl<S> RankedResult<S> {
    /// Create a new ranked result.
    pub fn new(word: String, score: S) -> Self {
        RankedResult { word, score }
    }
}

/// Scoring metric used by the ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankingMode {
    /// Jaccard similarity of character n-gram sets; higher is better.
    BySimilarity { ngram_size: usize },
    /// Levenshtein edit distance; lower is better.
    ByDistance,
}

/// Score produced by a [`RankingMode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Similarity(f64),
    Distance(usize),
}

/// Orders scores so that the better one comes first.
pub trait RankScore: Copy + Send {
    fn rank_cmp(&self, other: &Self) -> Ordering;
}

impl RankScore for f64 {
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other.partial_cmp(self).unwrap_or(Ordering::Equal)
    }
}

impl RankScore for usize {
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Configuration for the ranker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Maximum number of results to return.
    pub top_k: usize,
    /// Vocabulary size at which candidates are scored on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        RankerConfig {
            top_k: DEFAULT_TOP_K,
            parallel_threshold: 1024,
        }
    }
}

/// Ranks vocabulary candidates against a target word.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    /// Create a ranker with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ranker with a custom configuration.
    pub fn with_config(config: RankerConfig) -> Self {
        Ranker { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Rank `vocabulary` against `target` under the given mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode is `BySimilarity` with an n-gram size of 0.
    pub fn rank<W>(
        &self,
        target: &str,
        vocabulary: &[W],
        mode: RankingMode,
    ) -> Result<Vec<RankedResult<Score>>>
    where
        W: AsRef<str> + Sync,
    {
        let results = match mode {
            RankingMode::BySimilarity { ngram_size } => self
                .rank_by_similarity(target, vocabulary, ngram_size)?
                .into_iter()
                .map(|r| RankedResult::new(r.word, Score::Similarity(r.score)))
                .collect(),
            RankingMode::ByDistance => self
                .rank_by_distance(target, vocabulary)
                .into_iter()
                .map(|r| RankedResult::new(r.word, Score::Distance(r.score)))
                .collect(),
        };
        Ok(results)
    }

    /// Rank by Jaccard similarity of `ngram_size` character n-grams.
    ///
    /// # Errors
    ///
    /// Returns an error if `ngram_size` is 0.
    pub fn rank_by_similarity<W>(
        &self,
        target: &str,
        vocabulary: &[W],
        ngram_size: usize,
    ) -> Result<Vec<RankedResult<f64>>>
    where
        W: AsRef<str> + Sync,
    {
        let target_grams = ngrams(target, ngram_size)?;
        self.rank_with(vocabulary, |candidate| {
            let candidate_grams = ngrams(candidate, ngram_size)?;
            Ok(jaccard(&target_grams, &candidate_grams))
        })
    }

    /// Rank by Levenshtein edit distance.
    pub fn rank_by_distance<W>(&self, target: &str, vocabulary: &[W]) -> Vec<RankedResult<usize>>
    where
        W: AsRef<str> + Sync,
    {
        let matcher = LevenshteinMatcher::new(target);
        let mut scored = self.score_all(vocabulary, |candidate| matcher.distance(candidate));
        self.sort_and_truncate(&mut scored);
        Self::into_results(scored)
    }

    /// Score every candidate with a fallible scorer, then sort and truncate.
    ///
    /// Every candidate is scored; none is dropped for a poor score, and duplicate
    /// vocabulary entries are kept as given.
    fn rank_with<W, S, F>(&self, vocabulary: &[W], scorer: F) -> Result<Vec<RankedResult<S>>>
    where
        W: AsRef<str> + Sync,
        S: RankScore,
        F: Fn(&str) -> Result<S> + Sync,
    {
        let mut scored = self
            .score_all(vocabulary, |candidate| scorer(candidate))
            .into_iter()
            .map(|(norm, raw, score)| score.map(|score| (norm, raw, score)))
            .collect::<Result<Vec<_>>>()?;
        self.sort_and_truncate(&mut scored);
        Ok(Self::into_results(scored))
    }

    fn score_all<'a, W, T, F>(&self, vocabulary: &'a [W], scorer: F) -> Vec<(String, &'a str, T)>
    where
        W: AsRef<str> + Sync,
        T: Send,
        F: Fn(&str) -> T + Sync,
    {
        let score_one = |candidate: &'a W| {
            let candidate = candidate.as_ref();
            (normalize_word(candidate), candidate, scorer(candidate))
        };

        if vocabulary.len() >= self.config.parallel_threshold {
            vocabulary.par_iter().map(score_one).collect()
        } else {
            vocabulary.iter().map(score_one).collect()
        }
    }

    fn sort_and_truncate<S: RankScore>(&self, scored: &mut Vec<(String, &str, S)>) {
        scored.sort_by(|(norm_a, raw_a, score_a), (norm_b, raw_b, score_b)| {
            score_a
                .rank_cmp(score_b)
                .then_with(|| norm_a.cmp(norm_b))
                .then_with(|| raw_a.cmp(raw_b))
        });
        scored.truncate(self.config.top_k);
    }

    fn into_results<S>(scored: Vec<(String, &str, S)>) -> Vec<RankedResult<S>> {
        scored
            .into_iter()
            .map(|(_, raw, score)| RankedResult::new(raw.to_string(), score))
            .collect()
    }
}

/// Find the `k` candidates with the highest n-gram Jaccard similarity to `target`.
///
/// # Errors
///
/// Returns an error if `n` is 0.
pub fn top_matches_by_similarity<W>(
    target: &str,
    vocabulary: &[W],
    n: usize,
    k: usize,
) -> Result<Vec<RankedResult<f64>>>
where
    W: AsRef<str> + Sync,
{
    Ranker::with_config(RankerConfig {
        top_k: k,
        ..Default::default()
    })
    .rank_by_similarity(target, vocabulary, n)
}

/// Find the `k` candidates with the smallest edit distance to `target`.
pub fn top_matches_by_distance<W>(
    target: &str,
    vocabulary: &[W],
    k: usize,
) -> Vec<RankedResult<usize>>
where
    W: AsRef<str> + Sync,
{
    Ranker::with_config(RankerConfig {
        top_k: k,
        ..Default::default()
    })
    .rank_by_distance(target, vocabulary)
}

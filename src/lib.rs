//! # lexmatch
//!
//! A small lexical-analysis toolkit for free text.
//!
//! ## Features
//!
//! - Spelling suggestion against a reference vocabulary
//! - Character n-gram Jaccard similarity and Levenshtein edit distance
//! - Deterministic top-k ranking of candidates
//! - PMI word associations and chi-square sentiment features over a corpus

pub mod analysis;
pub mod cli;
pub mod error;
pub mod spelling;
pub mod stats;

pub mod prelude {
    pub use crate::analysis::{ngrams, normalize_text, normalize_word, tokenize};
    pub use crate::error::{LexmatchError, Result};
    pub use crate::spelling::{
        DictionaryConfig, RankedResult, Ranker, RankerConfig, RankingMode, Vocabulary,
        edit_distance, jaccard, load_vocabulary, top_matches_by_distance,
        top_matches_by_similarity,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

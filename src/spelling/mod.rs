//! Spelling suggestion for lexmatch.
//!
//! This module ranks words of a reference vocabulary against a misspelled or
//! unknown target, either by character n-gram Jaccard similarity or by
//! Levenshtein edit distance.

pub mod dictionary;
pub mod jaccard;
pub mod levenshtein;
pub mod ranker;

// Re-export commonly used types
pub use dictionary::*;
pub use jaccard::*;
pub use levenshtein::*;
pub use ranker::*;

//! Text analysis: normalization, tokenization and n-gram decomposition.

pub mod ngram;
pub mod normalizer;

pub use ngram::*;
pub use normalizer::*;

//! Corpus statistics: word associations and sentiment feature selection.
//!
//! These share only the tokenization convention of
//! [`crate::analysis::normalizer`] with the spelling module.

pub mod chi_square;
pub mod corpus;
pub mod pmi;

pub use chi_square::*;
pub use corpus::*;
pub use pmi::*;

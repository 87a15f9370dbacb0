//! Text normalization shared by the matcher and the corpus statistics.
//!
//! Two conventions exist:
//!
//! - word level ([`normalize_word`]): lowercase only. Targets and dictionary
//!   entries are matched atomically, so `"artifitial inteligwnse"` stays a
//!   single string with its space.
//! - corpus level ([`normalize_text`], [`tokenize`]): lowercase, drop every
//!   character that is not a word character or whitespace, then split on
//!   whitespace.
//!
//! # Examples
//!
//! ```
//! use lexmatch::analysis::normalizer::{normalize_text, tokenize};
//!
//! assert_eq!(normalize_text("Hello, World!"), "hello world");
//! assert_eq!(tokenize("Don't stop."), vec!["dont", "stop"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("non-word pattern should be valid"));

/// Lowercase a word for matching.
pub fn normalize_word(text: &str) -> String {
    text.to_lowercase()
}

/// Lowercase and strip punctuation from free text.
pub fn normalize_text(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_WORD_CHARS.replace_all(&lower, "").into_owned()
}

/// Split free text into normalized tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize_text(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

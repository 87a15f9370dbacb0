//! Vocabulary loading for spelling suggestion.
//!
//! Word lists are tried in order from a [`DictionaryConfig`]; the first file
//! that can be read and yields at least one word wins. When every file fails
//! the built-in sample vocabulary is returned instead.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default word list looked up in the working directory.
pub const LOCAL_WORD_LIST: &str = "a_words.txt";

/// System dictionary shipped with most Unix installs.
pub const SYSTEM_WORD_LIST: &str = "/usr/share/dict/words";

/// Number of leading words inspected to decide whether a list is a plain dictionary.
const SNIFF_WORDS: usize = 10;

/// Sample vocabulary used when no word list can be read.
pub const BUILTIN_WORDS: &[&str] = &[
    "abandon", "abbreviation", "abbreviate", "ability", "abject", "ablaze", "able",
    "abnormal", "abolish", "aboriginal", "abort", "about", "above", "abroad", "abrupt",
    "absence", "absent", "absolute", "absolution", "absorb", "abstract", "abundance",
    "abundant", "abusive", "abut", "academic", "academy", "accelerate", "accent", "accept",
    "access", "accident", "acclaim", "acclimate", "accolade", "accommodate", "accompany",
    "accomplish", "accord", "account", "accuracy", "accurate", "accuse", "ache", "achieve",
    "acid", "acorn", "acoustic",
];

/// Where the loaded vocabulary came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VocabularySource {
    File(PathBuf),
    Builtin,
}

/// A loaded, deduplicated list of candidate words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    pub words: Vec<String>,
    pub source: VocabularySource,
}

impl Vocabulary {
    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Configuration for vocabulary loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Word lists to try, in order.
    pub paths: Vec<PathBuf>,
    /// Keep only words starting with this letter when the list looks like a
    /// general-purpose dictionary.
    pub initial: Option<char>,
    /// Words returned when no list yields anything.
    pub fallback: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            paths: vec![PathBuf::from(LOCAL_WORD_LIST), PathBuf::from(SYSTEM_WORD_LIST)],
            initial: Some('a'),
            fallback: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl DictionaryConfig {
    /// Default configuration with a caller-supplied list tried first.
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        let mut config = Self::default();
        config.paths.insert(0, path.into());
        config
    }
}

/// Read a word list with one word per line, dropping blank lines.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    Ok(words)
}

/// Apply the initial-letter filter and drop repeated words, keeping first occurrences.
fn select_words(words: Vec<String>, initial: Option<char>) -> Vec<String> {
    let looks_like_dictionary = words
        .iter()
        .take(SNIFF_WORDS)
        .all(|w| w.chars().next().is_some_and(char::is_alphabetic));

    let mut seen = HashSet::new();
    words
        .into_iter()
        .filter(|w| match initial {
            Some(initial) if looks_like_dictionary => w
                .chars()
                .next()
                .and_then(|c| c.to_lowercase().next())
                .is_some_and(|c| c == initial),
            _ => true,
        })
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Load the first usable vocabulary from the configured paths.
pub fn load_vocabulary(config: &DictionaryConfig) -> Vocabulary {
    for path in &config.paths {
        match read_word_list(path) {
            Ok(words) => {
                let words = select_words(words, config.initial);
                if words.is_empty() {
                    log::debug!("No usable words in {}", path.display());
                    continue;
                }
                log::debug!("Loaded {} words from {}", words.len(), path.display());
                return Vocabulary {
                    words,
                    source: VocabularySource::File(path.clone()),
                };
            }
            Err(e) => log::warn!("Could not read word list {}: {}", path.display(), e),
        }
    }

    log::info!(
        "Falling back to built-in vocabulary of {} words",
        config.fallback.len()
    );
    Vocabulary {
        words: config.fallback.clone(),
        source: VocabularySource::Builtin,
    }
}

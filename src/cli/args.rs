//! Command line argument parsing for lexmatch CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::spelling::ranker::DEFAULT_TOP_K;
use crate::stats::chi_square::DEFAULT_FEATURE_LIMIT;

/// lexmatch - spelling suggestion and corpus word statistics
#[derive(Parser, Debug, Clone)]
#[command(name = "lexmatch")]
#[command(about = "Spelling suggestion and word-association statistics for free text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexmatchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexmatchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest dictionary words for misspelled targets
    Suggest(SuggestArgs),

    /// Rank word pairs of a review corpus by PMI
    Associations(AssociationsArgs),

    /// Rank sentiment features of a review corpus by chi-square
    Features(FeaturesArgs),
}

/// Arguments for spelling suggestion
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Words to match against the dictionary
    #[arg(value_name = "TARGET", required = true)]
    pub targets: Vec<String>,

    /// Word list tried before the default locations
    #[arg(short, long, value_name = "DICTIONARY_FILE", env = "LEXMATCH_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// N-gram sizes for Jaccard ranking (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_values_t = vec![2, 3, 4, 5])]
    pub ngram_sizes: Vec<usize>,

    /// Maximum number of matches per ranking
    #[arg(short, long, default_value_t = DEFAULT_TOP_K)]
    pub limit: usize,
}

/// Arguments for PMI word associations
#[derive(Parser, Debug, Clone)]
pub struct AssociationsArgs {
    /// Reviews file (JSON array of strings)
    #[arg(value_name = "REVIEWS_FILE")]
    pub reviews: PathBuf,

    /// Co-occurrence window span, including the anchor word
    #[arg(short, long, default_value = "5")]
    pub window_size: usize,

    /// Minimum co-occurrence count
    #[arg(short, long, default_value = "2")]
    pub min_count: usize,

    /// Maximum number of associations to show
    #[arg(short, long, default_value = "30")]
    pub limit: usize,
}

/// Arguments for chi-square feature selection
#[derive(Parser, Debug, Clone)]
pub struct FeaturesArgs {
    /// Reviews file (JSON array of strings)
    #[arg(value_name = "REVIEWS_FILE")]
    pub reviews: PathBuf,

    /// Maximum number of features to show
    #[arg(short, long, default_value_t = DEFAULT_FEATURE_LIMIT)]
    pub limit: usize,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

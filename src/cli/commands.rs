//! Command implementations for lexmatch CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::dictionary::{DictionaryConfig, VocabularySource, load_vocabulary};
use crate::spelling::ranker::{Ranker, RankerConfig};
use crate::stats::chi_square::{Label, Lexicon, auto_label, chi_square_features};
use crate::stats::corpus::load_reviews;
use crate::stats::pmi::{PmiConfig, word_associations};

/// Execute a CLI command.
pub fn execute_command(args: LexmatchArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => suggest(suggest_args.clone(), &args),
        Command::Associations(assoc_args) => associations(assoc_args.clone(), &args),
        Command::Features(features_args) => features(features_args.clone(), &args),
    }
}

/// Rank dictionary words against each target.
fn suggest(args: SuggestArgs, cli_args: &LexmatchArgs) -> Result<()> {
    let config = match &args.dictionary {
        Some(path) => DictionaryConfig::with_path(path.clone()),
        None => DictionaryConfig::default(),
    };
    let vocabulary = load_vocabulary(&config);

    let source = match &vocabulary.source {
        VocabularySource::File(path) => path.display().to_string(),
        VocabularySource::Builtin => "built-in".to_string(),
    };
    let sample: Vec<&str> = vocabulary.words.iter().take(5).map(String::as_str).collect();

    let ranker = Ranker::with_config(RankerConfig {
        top_k: args.limit,
        ..Default::default()
    });

    let start_time = Instant::now();
    let mut reports = Vec::with_capacity(args.targets.len());
    for target in &args.targets {
        let by_similarity = args
            .ngram_sizes
            .iter()
            .map(|&ngram_size| -> Result<NgramRanking> {
                Ok(NgramRanking {
                    ngram_size,
                    matches: ranker.rank_by_similarity(target, &vocabulary.words, ngram_size)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let by_distance = ranker.rank_by_distance(target, &vocabulary.words);

        reports.push(SuggestionReport {
            target: target.clone(),
            by_similarity,
            by_distance,
        });
    }
    log::info!(
        "Ranked {} targets against {} words in {}ms",
        args.targets.len(),
        vocabulary.len(),
        start_time.elapsed().as_millis()
    );

    output_result(
        &format!(
            "Loaded dictionary with {} words from {} (sample: {:?})",
            vocabulary.len(),
            source,
            sample
        ),
        &SuggestResults {
            dictionary_source: source,
            dictionary_size: vocabulary.len(),
            reports,
        },
        cli_args,
    )
}

/// Rank co-occurring word pairs by PMI.
fn associations(args: AssociationsArgs, cli_args: &LexmatchArgs) -> Result<()> {
    let reviews = load_reviews(&args.reviews)?;
    let config = PmiConfig {
        window_size: args.window_size,
        min_count: args.min_count,
        limit: args.limit,
    };
    let associations = word_associations(&reviews, &config)?;

    output_result(
        &format!("Loaded {} reviews from {}", reviews.len(), args.reviews.display()),
        &AssociationResults {
            reviews: reviews.len(),
            associations,
        },
        cli_args,
    )
}

/// Auto-label reviews and rank words by chi-square.
fn features(args: FeaturesArgs, cli_args: &LexmatchArgs) -> Result<()> {
    let reviews = load_reviews(&args.reviews)?;
    let results = feature_results(&reviews, args.limit)?;

    output_result(
        &format!("Loaded {} reviews from {}", reviews.len(), args.reviews.display()),
        &results,
        cli_args,
    )
}

/// Label the corpus with the default lexicon and score its words.
///
/// An empty corpus gives an empty table.
fn feature_results(reviews: &[String], limit: usize) -> Result<FeatureResults> {
    let labels = auto_label(reviews, &Lexicon::default());
    let positive_reviews = labels.iter().filter(|l| **l == Label::Positive).count();
    let negative_reviews = labels.len() - positive_reviews;
    log::debug!(
        "Labeled {} reviews: {} positive, {} negative",
        labels.len(),
        positive_reviews,
        negative_reviews
    );

    let features = chi_square_features(reviews, &labels, limit)?
        .into_iter()
        .map(|feature| FeatureRow {
            association: feature.association(),
            feature,
        })
        .collect();

    Ok(FeatureResults {
        reviews: reviews.len(),
        positive_reviews,
        negative_reviews,
        features,
    })
}

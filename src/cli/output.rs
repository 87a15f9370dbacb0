//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexmatchArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::ranker::RankedResult;
use crate::stats::chi_square::{Association, FeatureScore};
use crate::stats::pmi::WordAssociation;

const RULE_WIDTH: usize = 60;

/// Results rendered as plain text.
pub trait HumanReadable {
    fn to_human(&self) -> String;
}

/// Jaccard ranking for one n-gram size.
#[derive(Debug, Serialize, Deserialize)]
pub struct NgramRanking {
    pub ngram_size: usize,
    pub matches: Vec<RankedResult<f64>>,
}

/// Suggestions for one target word.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionReport {
    pub target: String,
    pub by_similarity: Vec<NgramRanking>,
    pub by_distance: Vec<RankedResult<usize>>,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResults {
    pub dictionary_source: String,
    pub dictionary_size: usize,
    pub reports: Vec<SuggestionReport>,
}

/// Result structure for the associations command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssociationResults {
    pub reviews: usize,
    pub associations: Vec<WordAssociation>,
}

/// One row of the features command.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeatureRow {
    #[serde(flatten)]
    pub feature: FeatureScore,
    pub association: Association,
}

/// Result structure for the features command.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeatureResults {
    pub reviews: usize,
    pub positive_reviews: usize,
    pub negative_reviews: usize,
    pub features: Vec<FeatureRow>,
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &LexmatchArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReadable>(message: &str, result: &T, args: &LexmatchArgs) -> Result<()> {
    if args.verbosity() > 0 && !message.is_empty() {
        println!("{message}");
        println!();
    }
    print!("{}", result.to_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexmatchArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Numbered list of similarity matches, scores to four decimals.
pub fn format_similarity_list(matches: &[RankedResult<f64>]) -> String {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}. {}\t{:.4}", i + 1, m.word, m.score))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered list of distance matches.
pub fn format_distance_list(matches: &[RankedResult<usize>]) -> String {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}. {}\t{}", i + 1, m.word, m.score))
        .collect::<Vec<_>>()
        .join("\n")
}

impl HumanReadable for SuggestionReport {
    fn to_human(&self) -> String {
        let mut out = format!("{}\nTarget: {}\n\n", "=".repeat(RULE_WIDTH), self.target);

        for ranking in &self.by_similarity {
            out.push_str(&format!(
                "Top {} by Jaccard with {}-grams:\n{}\n\n",
                ranking.matches.len(),
                ranking.ngram_size,
                format_similarity_list(&ranking.matches)
            ));
        }

        out.push_str(&format!(
            "Top {} by Levenshtein (distance):\n{}\n\n",
            self.by_distance.len(),
            format_distance_list(&self.by_distance)
        ));
        out
    }
}

impl HumanReadable for SuggestResults {
    fn to_human(&self) -> String {
        self.reports.iter().map(HumanReadable::to_human).collect()
    }
}

impl HumanReadable for AssociationResults {
    fn to_human(&self) -> String {
        let rule = "-".repeat(70);
        let mut out = format!(
            "Top Word Associations (PMI Scores)\n{}\n{:<15} {:<15} {:<15} Co-occur Count\n{}\n",
            "=".repeat(70),
            "Word 1",
            "Word 2",
            "PMI Score",
            rule
        );
        for a in &self.associations {
            out.push_str(&format!(
                "{:<15} {:<15} {:>10.4}      {}\n",
                a.first, a.second, a.pmi, a.count
            ));
        }
        out.push_str(&format!(
            "{}\nTotal word associations shown: {}\n",
            rule,
            self.associations.len()
        ));
        out
    }
}

impl HumanReadable for FeatureResults {
    fn to_human(&self) -> String {
        let mut out = format!(
            "{:<20} {:>10} {:>8} {:>8} Assoc\n{}\n",
            "Word",
            "Chi2",
            "PosDocs",
            "NegDocs",
            "-".repeat(RULE_WIDTH)
        );
        for row in &self.features {
            out.push_str(&format!(
                "{:<20} {:>10.4} {:>8} {:>8} {}\n",
                row.feature.word,
                row.feature.score,
                row.feature.positive_count,
                row.feature.negative_count,
                row.association
            ));
        }
        out
    }
}

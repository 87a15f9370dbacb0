//! Integration tests for the corpus statistics.

use std::fs;

use lexmatch::error::Result;
use lexmatch::stats::{
    Association, Label, Lexicon, PmiConfig, auto_label, chi_square_features, load_reviews,
    word_associations,
};
use tempfile::TempDir;

const REVIEWS: &str = r#"[
    "I love this perfume, the scent is amazing!",
    "Love this perfume. Amazing scent, would buy again.",
    "Not worth it. The scent is overpowering and expensive.",
    "Disappointed, the bottle leaked. Will return.",
    "Great value, I love it"
]"#;

#[test]
fn test_associations_from_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reviews.json");
    fs::write(&path, REVIEWS).unwrap();

    let reviews = load_reviews(&path)?;
    assert_eq!(reviews.len(), 5);

    let associations = word_associations(&reviews, &PmiConfig::default())?;
    assert!(!associations.is_empty());
    assert!(associations.iter().all(|a| a.count >= 2));
    assert!(associations.iter().all(|a| a.first <= a.second));
    assert!(associations.windows(2).all(|w| w[0].pmi >= w[1].pmi));
    assert!(
        associations
            .iter()
            .any(|a| a.first == "amazing" && a.second == "scent")
    );
    Ok(())
}

#[test]
fn test_features_from_auto_labels() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reviews.json");
    fs::write(&path, REVIEWS).unwrap();

    let reviews = load_reviews(&path)?;
    let labels = auto_label(&reviews, &Lexicon::default());
    assert_eq!(
        labels,
        vec![
            Label::Positive,
            Label::Positive,
            Label::Negative,
            Label::Negative,
            Label::Positive
        ]
    );

    let features = chi_square_features(&reviews, &labels, 100)?;
    assert!(features.windows(2).all(|w| w[0].score >= w[1].score));

    // "love" appears in all three positive reviews and no negative one
    let love = features.iter().find(|f| f.word == "love").unwrap();
    assert_eq!(love.positive_count, 3);
    assert_eq!(love.negative_count, 0);
    assert!((love.score - 5.0).abs() < 1e-12);
    assert_eq!(love.association(), Association::Positive);

    let the = features.iter().find(|f| f.word == "the").unwrap();
    assert_eq!(the.association(), Association::Negative);
    Ok(())
}

#[test]
fn test_malformed_corpus() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reviews.json");
    fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(load_reviews(&path).is_err());
}

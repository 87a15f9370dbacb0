//! Criterion benchmarks for lexmatch.
//!
//! Covers the scorers on single word pairs and full top-k rankings over a
//! synthetic vocabulary, sequential and on the rayon pool.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexmatch::analysis::ngram::ngrams;
use lexmatch::spelling::jaccard::jaccard;
use lexmatch::spelling::levenshtein::edit_distance;
use lexmatch::spelling::ranker::{Ranker, RankerConfig, RankingMode};
use std::hint::black_box;

/// Generate a deterministic vocabulary of pseudo-words.
fn generate_vocabulary(count: usize) -> Vec<String> {
    let syllables = ["ab", "ac", "an", "bre", "vi", "a", "tion", "ment", "con", "de", "lo"];
    (0..count)
        .map(|i| {
            let mut word = String::new();
            let mut n = i;
            for _ in 0..(2 + i % 4) {
                word.push_str(syllables[n % syllables.len()]);
                n = n / syllables.len() + 7;
            }
            word
        })
        .collect()
}

fn bench_scorers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scorers");

    group.bench_function("edit_distance", |b| {
        b.iter(|| edit_distance(black_box("accanthopterigenous"), black_box("acanthopterygious")))
    });

    group.bench_function("ngrams_trigram", |b| {
        b.iter(|| ngrams(black_box("accanthopterigenous"), 3).unwrap())
    });

    let a = ngrams("abstrictiveness", 3).unwrap();
    let b_set = ngrams("abstractiveness", 3).unwrap();
    group.bench_function("jaccard_trigram", |b| {
        b.iter(|| jaccard(black_box(&a), black_box(&b_set)))
    });

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");
    group.sample_size(20);

    let vocabulary = generate_vocabulary(20_000);
    group.throughput(Throughput::Elements(vocabulary.len() as u64));

    for (name, threshold) in [("sequential", usize::MAX), ("parallel", 0)] {
        let ranker = Ranker::with_config(RankerConfig {
            top_k: 10,
            parallel_threshold: threshold,
        });

        group.bench_function(format!("by_distance_{name}"), |b| {
            b.iter(|| {
                ranker
                    .rank(black_box("abreviation"), &vocabulary, RankingMode::ByDistance)
                    .unwrap()
            })
        });

        group.bench_function(format!("by_similarity_{name}"), |b| {
            b.iter(|| {
                ranker
                    .rank(
                        black_box("abreviation"),
                        &vocabulary,
                        RankingMode::BySimilarity { ngram_size: 3 },
                    )
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scorers, bench_ranking);
criterion_main!(benches);

//! Criterion benchmarks for stembayes.
//!
//! Covers text analysis, incremental training and classification.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use stembayes::analysis::analyzer::{Analyzer, StemmingAnalyzer};
use stembayes::analysis::config::AnalysisConfig;
use stembayes::classifier::{ClassifierConfig, NaiveBayesClassifier};

const CATEGORIES: &[&str] = &["alice", "bob", "carol", "dave", "erin"];

/// Generate labeled test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<(&'static str, String)> {
    let words = [
        "running", "cats", "dogs", "happily", "conditional", "relational", "generalization",
        "the", "a", "of", "hoping", "planets", "galaxies", "recipes", "butter", "sailing",
        "harbors", "anchored", "telescopes", "orbiting", "flying", "caresses", "ponies",
        "agreed", "motoring", "filing", "hopping", "singing", "sky", "happy", "tweets",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 5 + (i % 20);
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push((CATEGORIES[i % CATEGORIES.len()], doc_words.join(" ")));
    }

    documents
}

fn trained_classifier(documents: &[(&str, String)]) -> NaiveBayesClassifier {
    let config = ClassifierConfig::default().with_stop_words(["the", "a", "of"]);
    let mut classifier = NaiveBayesClassifier::new(config).unwrap();
    for (category, text) in documents {
        classifier.train(category, text).unwrap();
    }
    classifier
}

/// Benchmark text analysis.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = StemmingAnalyzer::new(&AnalysisConfig::default(), ["the", "a", "of"]).unwrap();
    let documents = generate_test_documents(100);

    group.bench_function("stems_single_document", |b| {
        b.iter(|| black_box(analyzer.stems(black_box(&documents[0].1))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("stems_batch_documents", |b| {
        b.iter(|| {
            for (_, text) in &documents {
                let _ = black_box(analyzer.stems(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark incremental training.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    let documents = generate_test_documents(1000);

    group.throughput(Throughput::Elements(1000));
    group.bench_function("train_1000_documents", |b| {
        b.iter(|| black_box(trained_classifier(black_box(&documents))))
    });

    group.finish();
}

/// Benchmark classification against a trained model.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    let documents = generate_test_documents(1000);
    let classifier = trained_classifier(&documents);
    let queries = generate_test_documents(100);

    group.bench_function("classify_single_query", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&queries[0].1))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("classify_batch_queries", |b| {
        b.iter(|| {
            for (_, text) in &queries {
                let _ = black_box(classifier.classify(black_box(text)));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_training,
    bench_classification
);
criterion_main!(benches);

//! Criterion benchmarks for sabia.
//!
//! Covers the pieces that run once per token:
//! - Diacritic folding
//! - Suffix stemming
//! - Full analysis, fresh and through a reused pipeline

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sabia::analysis::analyzer::analyzer::Analyzer;
use sabia::analysis::analyzer::language::brazilian::BrazilianAnalyzer;
use sabia::analysis::fold::DiacriticFolder;
use sabia::analysis::token_filter::stem::{BrazilianStemmer, Stemmer};
use std::hint::black_box;

const WORDS: &[&str] = &[
    "boataria",
    "bobagens",
    "bobalhões",
    "boçal",
    "boêmio",
    "bóias",
    "boiando",
    "quilométricas",
    "quilômetros",
    "quimioterápicos",
    "quinhão",
    "quintessência",
    "quintuplicou",
    "Brasília",
    "de",
    "que",
    "não",
    "quimio5terápicos",
];

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % WORDS.len(); // Pseudo-random distribution
            doc_words.push(WORDS[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

/// Benchmark per-word normalization.
fn bench_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("words");
    group.throughput(Throughput::Elements(WORDS.len() as u64));

    let folder = DiacriticFolder::new();
    group.bench_function("fold", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(folder.fold(black_box(word)));
            }
        })
    });

    let stemmer = BrazilianStemmer::new();
    group.bench_function("stem", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(stemmer.stem(black_box(word)));
            }
        })
    });

    group.finish();
}

/// Benchmark text analysis.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = BrazilianAnalyzer::new();
    analyzer.set_stem_exclusion_table(["quintessência", "Brasília"]);
    let texts = generate_test_documents(1000);

    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&texts[0])).unwrap().collect();
            black_box(tokens)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let count = analyzer.analyze(black_box(text)).unwrap().count();
                black_box(count);
            }
        })
    });

    group.bench_function("reuse_pipeline_batch_documents", |b| {
        let mut pipeline = analyzer.pipeline();
        b.iter(|| {
            for text in texts.iter().take(100) {
                pipeline.reset(Some(black_box(text))).unwrap();
                black_box(pipeline.by_ref().count());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_words, bench_text_analysis);
criterion_main!(benches);

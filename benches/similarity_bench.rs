//! Benchmark suite for danci-correct
//!
//! Run with: cargo bench

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use danci_correct::network::CorrectorNetwork;
use danci_correct::ngram::find_similarity;
use danci_correct::vocab::Vocabulary;

fn bench_find_similarity(c: &mut Criterion) {
    c.bench_function("ngram::find_similarity", |b| {
        b.iter(|| find_similarity(black_box("corrector"), black_box("correction"), 3))
    });
}

fn bench_network_forward(c: &mut Criterion) {
    let vocabulary = Arc::new(Vocabulary::from_words(
        (0..500).map(|i| format!("word{i:03}")),
    ));
    let network = CorrectorNetwork::new(3, 100, 0.2, vocabulary, Some(7)).unwrap();

    c.bench_function("network::forward", |b| {
        b.iter(|| network.forward(black_box("wrod042")))
    });
}

criterion_group!(benches, bench_find_similarity, bench_network_forward);
criterion_main!(benches);

//! Benchmarks for the analysis pipeline and intent matching.

use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};

use banter::analysis::analyzer::{Analyzer, UtteranceAnalyzer};
use banter::chat::ChatEngine;
use banter::intent::IntentRegistry;

fn bench_analyze(c: &mut Criterion) {
    let analyzer = UtteranceAnalyzer::new();
    let line = "hi there, i was wondering if the cats are ok today!";

    c.bench_function("analyze_utterance", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(line).unwrap().collect();
            tokens
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    let engine = ChatEngine::with_seed(Arc::new(IntentRegistry::builtin()), 42);
    let line = "hello, what a nice day!";

    c.bench_function("classify_utterance", |b| {
        b.iter(|| engine.classify(line).unwrap())
    });
}

fn bench_respond(c: &mut Criterion) {
    let mut engine = ChatEngine::with_seed(Arc::new(IntentRegistry::builtin()), 42);

    c.bench_function("respond_greeting", |b| {
        b.iter(|| engine.respond("hi").unwrap())
    });
}

criterion_group!(benches, bench_analyze, bench_classify, bench_respond);
criterion_main!(benches);

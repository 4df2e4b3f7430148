//! Criterion benchmarks for vigil-classifier.

use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};

use vigil_classifier::{evaluate_all, RiskClassifier, RuleBasedScorer};
use vigil_core::{Metrics, RiskScorer};

fn make_projects(count: usize) -> Vec<(String, Metrics)> {
    (0..count)
        .map(|i| {
            let f = (i % 100) as f64;
            let metrics = Metrics::new(
                f / 10.0,
                f,
                f / 4.0,
                (i % 800) as u32,
                f / 100.0,
            )
            .unwrap_or_else(|e| panic!("bench metrics invalid: {e}"));
            (format!("project-{i}"), metrics)
        })
        .collect()
}

fn bench_single(c: &mut Criterion) {
    let metrics = Metrics::new(2.3, 40.0, 15.2, 234, 0.34).unwrap();
    let classifier = RiskClassifier::new();

    c.bench_function("evaluate_all", |b| b.iter(|| evaluate_all(&metrics)));
    c.bench_function("rule_based_score", |b| {
        b.iter(|| RuleBasedScorer.score(&metrics))
    });
    c.bench_function("analyze_single", |b| {
        b.iter(|| classifier.analyze("bench", &metrics))
    });
}

fn bench_batch(c: &mut Criterion) {
    let classifier = RiskClassifier::new();
    let projects = make_projects(1000);
    let now = Utc::now();

    c.bench_function("analyze_batch_1k", |b| {
        b.iter(|| classifier.analyze_batch_at(&projects, now))
    });
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);

//! Metric construction and classification benchmark

use metric_core::prelude::*;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serde_json::json;

fn benchmark_typed_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed_construction");
    group.throughput(Throughput::Elements(1));

    let locator = Locator::new("bench", "cpu_usage");
    let ttl = TimeValue::days(1);

    group.bench_function("int64", |b| {
        b.iter(|| {
            let metric = Metric::new(
                locator.clone(),
                black_box(42i64),
                1_000,
                ttl,
                Some("count".to_string()),
            )
            .unwrap();
            black_box(metric);
        });
    });

    group.bench_function("string", |b| {
        b.iter(|| {
            let metric = Metric::new(locator.clone(), black_box("ok"), 1_000, ttl, None).unwrap();
            black_box(metric);
        });
    });

    group.finish();
}

fn benchmark_json_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_classification");

    let values = vec![json!(42), json!(0.75), json!("up"), json!(true), json!(null)];
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("mixed", |b| {
        b.iter(|| {
            for value in &values {
                let _ = black_box(classify_json(value));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_typed_construction,
    benchmark_json_classification,
);

criterion_main!(benches);

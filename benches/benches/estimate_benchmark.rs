//! Estimator benchmarks over synthetic autocorrelated samples.
//!
//! Run with: `cargo bench --package duedate-bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use duedate_bench::{SAMPLE_SIZES, synthetic_sample};
use duedate_lib::prelude::*;
use duedate_lib::stats::{Histogram, lag1_autocorrelation};

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = Estimator::default();
    let units = UnitCount::new(25).unwrap();
    let level = ConfidenceLevel::default();

    let mut group = c.benchmark_group("estimate");
    for size in SAMPLE_SIZES {
        let sample = synthetic_sample(size, 0.4, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &sample, |b, sample| {
            b.iter(|| estimator.estimate(black_box(sample), units, level));
        });
    }
    group.finish();
}

fn statistics_benchmark(c: &mut Criterion) {
    let sample = synthetic_sample(10_000, 0.4, 42);

    let mut group = c.benchmark_group("statistics");
    group.throughput(Throughput::Elements(sample.len() as u64));
    group.bench_function("lag1_autocorrelation", |b| {
        b.iter(|| lag1_autocorrelation(black_box(sample.values())));
    });
    group.bench_function("histogram", |b| {
        b.iter(|| Histogram::from_data(black_box(sample.values()), 12));
    });
    group.finish();
}

fn sweep_benchmark(c: &mut Criterion) {
    let estimator = Estimator::default();
    let sample = DatasetRegistry::global().default_sample().clone();
    let units = UnitCount::new(25).unwrap();

    c.bench_function("sweep_default_luxboat", |b| {
        b.iter(|| estimator.sweep_default(black_box(&sample), units));
    });
}

criterion_group!(benches, estimate_benchmark, statistics_benchmark, sweep_benchmark);
criterion_main!(benches);

//! Benchmarks for runstats estimators
//!
//! Run with: cargo bench --features full

// Require all features for benchmarks
#[cfg(not(all(feature = "statistics", feature = "sampling", feature = "accumulator")))]
compile_error!("Benchmarks require all features. Run: cargo bench --features full");

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use runstats::accumulator::Accumulator;
use runstats::sampling::RandomSampler;
use runstats::statistics::{RunningHistogram, RunningRegression, RunningStats};
use runstats::traits::Estimator;

// ============================================================================
// Running moments
// ============================================================================

fn bench_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_stats");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add", |b| {
        let mut stats = RunningStats::new();
        let mut i = 0u64;
        b.iter(|| {
            stats.add(i as f64 * 0.37);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("queries", |b| {
        let mut stats = RunningStats::new();
        for i in 0..100_000u64 {
            stats.add(i as f64 * 0.37);
        }
        b.iter(|| {
            black_box(stats.mean());
            black_box(stats.variance());
            black_box(stats.skewness());
            black_box(stats.kurtosis());
        });
    });

    group.bench_function("combine", |b| {
        let mut s1 = RunningStats::new();
        let mut s2 = RunningStats::new();
        for i in 0..10_000u64 {
            s1.add(i as f64);
            s2.add(i as f64 + 10_000.0);
        }
        b.iter(|| black_box(RunningStats::combine(&s1, &s2)));
    });

    group.finish();
}

// ============================================================================
// Running regression
// ============================================================================

fn bench_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_regression");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add", |b| {
        let mut reg = RunningRegression::new();
        let mut i = 0u64;
        b.iter(|| {
            let x = i as f64 * 0.1;
            reg.add(x, 2.0 * x + 3.0);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("combine", |b| {
        let mut r1 = RunningRegression::new();
        let mut r2 = RunningRegression::new();
        for i in 0..10_000u64 {
            let x = i as f64 * 0.1;
            r1.add(x, 2.0 * x + 3.0);
            r2.add(x + 1000.0, 2.0 * (x + 1000.0) + 3.0);
        }
        b.iter(|| black_box(RunningRegression::combine(&r1, &r2)));
    });

    group.finish();
}

// ============================================================================
// Running histogram
// ============================================================================

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_histogram");
    group.throughput(Throughput::Elements(1));

    for bins in [16, 256, 4096] {
        group.bench_function(format!("add_{}bins", bins), |b| {
            let mut hist = RunningHistogram::new(bins, 0.0, 1.0);
            let mut i = 0u64;
            b.iter(|| {
                hist.add((i % 1000) as f64 / 1000.0);
                i = i.wrapping_add(1);
            });
        });
    }

    group.bench_function("merge", |b| {
        let mut h1 = RunningHistogram::new(256, 0.0, 1.0);
        let mut h2 = RunningHistogram::new(256, 0.0, 1.0);
        for i in 0..10_000u64 {
            h1.add((i % 1000) as f64 / 1000.0);
            h2.add((i % 777) as f64 / 1000.0);
        }
        b.iter(|| {
            let mut merged = h1.clone();
            merged.merge(&h2).unwrap();
            black_box(merged);
        });
    });

    group.finish();
}

// ============================================================================
// Accumulator
// ============================================================================

fn bench_accumulator(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulator");
    group.throughput(Throughput::Elements(1));

    group.bench_function("push_unsubscribed", |b| {
        let mut acc = Accumulator::<f64>::new(1024);
        let mut i = 0u64;
        b.iter(|| {
            acc.push(i as f64);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("push_with_attached_stats", |b| {
        use std::cell::RefCell;
        use std::rc::Rc;

        let stats = Rc::new(RefCell::new(RunningStats::new()));
        let mut acc = Accumulator::<f64>::new(1024);
        acc.attach(&stats);
        let mut i = 0u64;
        b.iter(|| {
            acc.push(i as f64);
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

// ============================================================================
// Random sampler
// ============================================================================

fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_sampler");
    group.throughput(Throughput::Elements(1));

    for size in [16usize, 1024, 65_536] {
        group.bench_function(format!("next_{}", size), |b| {
            let mut sampler = RandomSampler::new(size);
            b.iter(|| black_box(sampler.next()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_moments,
    bench_regression,
    bench_histogram,
    bench_accumulator,
    bench_sampler
);
criterion_main!(benches);

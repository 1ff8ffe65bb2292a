use cutils::core::numeric::get_factors;
use cutils::core::parallel::{par_map, par_map_in, thread_pool};
use cutils::core::rate_limit::RateLimiter;
use cutils::core::timing::{TimingOptions, time_func};
use cutils::core::types::TimingStats;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

// Overhead of the harness itself around a trivial closure
fn bench_time_func_overhead(c: &mut Criterion) {
    let options = TimingOptions::new(100).quiet(true);

    c.bench_function("time_func_100_noop", |b| {
        b.iter(|| time_func(|| black_box(1u64), black_box(&options)))
    });
}

fn bench_from_samples(c: &mut Criterion) {
    let samples: Vec<f64> = (1..=10_000).map(|i| i as f64 * 1e-6).collect();

    c.bench_function("timing_stats_from_10k_samples", |b| {
        b.iter(|| TimingStats::from_samples(black_box(samples.clone())))
    });
}

fn bench_try_acquire(c: &mut Criterion) {
    let limiter = RateLimiter::new(usize::MAX, Duration::from_nanos(1)).expect("valid limiter");

    c.bench_function("rate_limiter_try_acquire", |b| {
        b.iter(|| limiter.try_acquire())
    });
}

fn bench_par_map(c: &mut Criterion) {
    let inputs: Vec<u64> = (400_000..400_256).collect();
    let mut group = c.benchmark_group("par_map_get_factors");

    group.bench_function("sequential", |b| {
        b.iter(|| {
            black_box(&inputs)
                .iter()
                .map(|n| get_factors(*n))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("global_pool", |b| {
        b.iter(|| par_map(black_box(inputs.clone()), get_factors))
    });

    let pool = thread_pool(2).expect("valid pool");
    group.bench_function("two_threads", |b| {
        b.iter(|| par_map_in(&pool, black_box(inputs.clone()), get_factors))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_time_func_overhead,
    bench_from_samples,
    bench_try_acquire,
    bench_par_map
);
criterion_main!(benches);

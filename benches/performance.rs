//! Criterion benchmarks for the statistics and chunk-sizing hot paths

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use network_speed_tester::{ChunkSizePolicy, Direction, SampleStatistics, TrimPolicy};

fn bench_trimmed_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("trimmed_mean");

    for &size in &[10usize, 100, 1_000] {
        let samples: Vec<f64> = (0..size).map(|i| 50.0 + (i % 17) as f64).collect();
        group.bench_function(format!("{} samples", size), |b| {
            b.iter(|| {
                black_box(SampleStatistics::trimmed_mean(
                    black_box(&samples),
                    TrimPolicy::throughput(),
                ))
            })
        });
    }

    group.finish();
}

fn bench_recent_mean(c: &mut Criterion) {
    let samples: Vec<f64> = (0..1_000).map(|i| 90.0 + (i % 11) as f64).collect();
    c.bench_function("recent_mean window 5", |b| {
        b.iter(|| black_box(SampleStatistics::recent_mean(black_box(&samples), 5)))
    });
}

fn bench_chunk_growth(c: &mut Criterion) {
    c.bench_function("chunk sizing full phase", |b| {
        b.iter(|| {
            let mut policy = ChunkSizePolicy::download_defaults();
            policy.observe_warmup(black_box(45.0));
            for i in 0..100 {
                policy.observe_steady(black_box(60.0 + i as f64));
            }
            black_box(policy.current_size())
        })
    });

    c.bench_function("upload chunk sizing", |b| {
        b.iter(|| {
            let mut policy = ChunkSizePolicy::new(Direction::Upload, 100_000, 10_000_000);
            policy.observe_warmup(black_box(35.0));
            for _ in 0..50 {
                policy.observe_steady(black_box(55.0));
            }
            black_box(policy.current_size())
        })
    });
}

criterion_group!(
    benches,
    bench_trimmed_mean,
    bench_recent_mean,
    bench_chunk_growth
);
criterion_main!(benches);

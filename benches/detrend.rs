//! Benchmarks for trend fitting and seasonal alignment.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ts_transform::batch::Batch;
use ts_transform::seasonal::{fit_seasonal, SeasonalModel};
use ts_transform::trend::{fit_trend, remove_trend};
use ts_transform::window::RollingWindowSplit;

fn generate_batch(n_samples: usize, n_obs: usize) -> Vec<Vec<f64>> {
    (0..n_samples)
        .map(|s| {
            (0..n_obs)
                .map(|i| {
                    10.0 * (s + 1) as f64
                        + 0.5 * i as f64
                        + (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin()
                })
                .collect()
        })
        .collect()
}

fn bench_fit_trend(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_trend");

    for size in [128, 512, 2048].iter() {
        let batch = generate_batch(10, *size);

        for order in [1usize, 2, 3].iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("order_{}", order), size),
                size,
                |b, _| b.iter(|| fit_trend(black_box(&batch), *order)),
            );
        }
    }

    group.finish();
}

fn bench_remove_trend(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_trend");

    for size in [128, 512, 2048].iter() {
        let batch = generate_batch(10, *size);
        let coefs = fit_trend(&batch, 2).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| remove_trend(black_box(&batch), black_box(&coefs), None))
        });
    }

    group.finish();
}

fn bench_seasonal_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("seasonal_alignment");

    let batch = Batch::new(generate_batch(10, 1024)).unwrap();
    let fitted = fit_seasonal(&batch, 12, SeasonalModel::Additive).unwrap();

    for size in [128, 1024, 8192].iter() {
        let index: Vec<i64> = (1_000_000..1_000_000 + *size as i64).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| fitted.align_to_index(black_box(&index)))
        });
    }

    group.finish();
}

fn bench_window_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_split");

    for size in [512, 4096].iter() {
        let index: Vec<i64> = (0..*size as i64).collect();
        let rw = RollingWindowSplit::new(Some(24), vec![1, 2, 3]).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| rw.split(black_box(&index)).unwrap().count())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fit_trend,
    bench_remove_trend,
    bench_seasonal_alignment,
    bench_window_split
);
criterion_main!(benches);

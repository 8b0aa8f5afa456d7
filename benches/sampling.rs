use criterion::{black_box, criterion_group, criterion_main, Criterion};
use variate::alias::AliasTable;
use variate::continuous::{exponential_with_rng, pareto_bounded_with_rng};
use variate::shuffle::shuffle_with_rng;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_alias_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_build");

    let sizes = [10, 100, 1_000, 10_000];
    for &size in &sizes {
        let weights: Vec<f64> = (1..=size).map(|i| i as f64).collect();
        group.bench_function(format!("n{}", size), |b| {
            b.iter(|| {
                let table = AliasTable::from_weights(black_box(&weights)).unwrap();
                black_box(table);
            })
        });
    }
    group.finish();
}

fn bench_alias_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_sample");

    // O(1) per draw: throughput should be flat across table sizes.
    let sizes = [10, 1_000, 100_000];
    for &size in &sizes {
        let weights: Vec<f64> = (1..=size).map(|i| i as f64).collect();
        let table = AliasTable::from_weights(&weights).unwrap();
        group.bench_function(format!("n{}", size), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| {
                black_box(table.sample_with_rng(&mut rng));
            })
        });
    }
    group.finish();
}

fn bench_continuous(c: &mut Criterion) {
    let mut group = c.benchmark_group("continuous");

    group.bench_function("exponential", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| {
            black_box(exponential_with_rng(black_box(1.5), &mut rng));
        })
    });

    group.bench_function("pareto_bounded", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| {
            black_box(pareto_bounded_with_rng(
                black_box(1.0),
                black_box(100.0),
                black_box(1.2),
                &mut rng,
            ));
        })
    });

    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");

    let sizes = [100, 1_000, 10_000];
    for &size in &sizes {
        group.bench_function(format!("n{}", size), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let mut items: Vec<u64> = (0..size).collect();
            b.iter(|| {
                shuffle_with_rng(black_box(&mut items), &mut rng);
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_alias_build,
    bench_alias_sample,
    bench_continuous,
    bench_shuffle
);
criterion_main!(benches);

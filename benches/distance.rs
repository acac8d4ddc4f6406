//! Benchmark comparing the distance variants and the two script generators.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use editscript::distance::{full, naive, rolling};
use editscript::script::{generate, generate_tabulated};

fn sequence(len: usize, seed: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 7 + seed) % 5) as u8).collect()
}

fn distance_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");

    for len in [8, 64, 512] {
        let src = sequence(len, 1);
        let tgt = sequence(len + len / 4, 3);

        group.bench_with_input(BenchmarkId::new("full", len), &len, |b, _| {
            b.iter(|| full(black_box(&src), black_box(&tgt)))
        });
        group.bench_with_input(BenchmarkId::new("rolling", len), &len, |b, _| {
            b.iter(|| rolling(black_box(&src), black_box(&tgt)))
        });
    }

    // exponential, keep it tiny
    let src = sequence(8, 1);
    let tgt = sequence(8, 3);
    group.bench_function("naive/8", |b| {
        b.iter(|| naive(black_box(&src), black_box(&tgt)))
    });

    group.finish();
}

fn script_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("script");
    let src = sequence(8, 1);
    let tgt = sequence(8, 3);

    group.bench_function("search/8", |b| {
        b.iter(|| generate(black_box(&src), black_box(&tgt)))
    });
    group.bench_function("tabulated/8", |b| {
        b.iter(|| generate_tabulated(black_box(&src), black_box(&tgt)))
    });

    let src = sequence(512, 1);
    let tgt = sequence(640, 3);
    group.bench_function("tabulated/512", |b| {
        b.iter(|| generate_tabulated(black_box(&src), black_box(&tgt)))
    });

    group.finish();
}

criterion_group!(benches, distance_benchmarks, script_benchmarks);
criterion_main!(benches);

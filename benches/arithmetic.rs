//! Benchmarks for sparse matrix arithmetic

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparsemat::codec::{decode, encode};
use sparsemat::{add, multiply_with_config, Config, SparseMatrix};

/// Banded matrix with `band` nonzeros per row around the diagonal
fn create_banded(n: usize, band: usize) -> SparseMatrix<i64> {
    SparseMatrix::from_triplets(
        n,
        n,
        (0..n).flat_map(move |i| {
            (i.saturating_sub(band / 2)..(i + band / 2 + 1).min(n))
                .map(move |j| (i, j, ((i * 31 + j * 17) % 19) as i64 - 9))
        }),
    )
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for &n in &[100usize, 1_000, 5_000] {
        let a = create_banded(n, 5);
        let b = create_banded(n, 7);

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |bench, _| {
            bench.iter(|| multiply_with_config(black_box(&a), black_box(&b), &Config::sequential()))
        });

        let parallel = Config {
            parallel_row_threshold: 1,
            ..Config::default()
        };
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |bench, _| {
            bench.iter(|| multiply_with_config(black_box(&a), black_box(&b), &parallel))
        });
    }

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let a = create_banded(5_000, 5);
    let b = create_banded(5_000, 9);

    c.bench_function("add_5000", |bench| {
        bench.iter(|| add(black_box(&a), black_box(&b)))
    });
}

fn bench_codec(c: &mut Criterion) {
    let matrix = create_banded(5_000, 5);
    let text = encode(&matrix);

    c.bench_function("encode_5000", |bench| bench.iter(|| encode(black_box(&matrix))));
    c.bench_function("decode_5000", |bench| {
        bench.iter(|| decode::<i64>(black_box(&text)))
    });
}

criterion_group!(benches, bench_multiply, bench_add, bench_codec);
criterion_main!(benches);

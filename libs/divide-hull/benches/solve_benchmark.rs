// benches/solve_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use config::constants::DEFAULT_SAMPLE_SEED;
use divide_hull::sample::{sample_points, Distribution};
use divide_hull::solve;

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

fn solve_benchmark_fn(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solve");

    for distribution in [Distribution::Square, Distribution::Disc] {
        for size in SIZES {
            let points = sample_points(distribution, size, 1_000.0, DEFAULT_SAMPLE_SEED)
                .expect("benchmark extent is positive");
            group.bench_with_input(
                BenchmarkId::new(format!("{distribution:?}"), size),
                &points,
                |b, points| b.iter(|| solve(black_box(points))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, solve_benchmark_fn);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kd_index::kdtree::KDTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_points(n: usize, dim: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..dim).map(|_| rng.gen_range(0.0..1000.0)).collect())
        .collect()
}

fn sq_dist(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(ai, bi)| (ai - bi) * (ai - bi))
        .sum()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [1_000, 10_000] {
        let points = generate_points(size, 3, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| KDTree::from_points(points).unwrap());
        });
    }

    group.finish();
}

fn benchmark_nearest(c: &mut Criterion) {
    let sizes = [1_000, 10_000];

    for size in sizes {
        let points = generate_points(size, 3, 42);
        let tree = KDTree::from_points(&points).unwrap();
        let queries = generate_points(100, 3, 7);

        let mut group = c.benchmark_group("nearest");

        group.bench_with_input(BenchmarkId::new("kdtree", size), &queries, |b, queries| {
            b.iter(|| {
                for query in queries {
                    tree.nearest(query).unwrap();
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("linear_scan", size),
            &queries,
            |b, queries| {
                b.iter(|| {
                    for query in queries {
                        points
                            .iter()
                            .map(|point| sq_dist(point, query))
                            .fold(f64::INFINITY, f64::min);
                    }
                });
            },
        );

        group.finish();
    }
}

criterion_group!(benches, benchmark_build, benchmark_nearest);
criterion_main!(benches);

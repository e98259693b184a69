use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geo_skyline::partition::{PartitionedIndex, SplitAxis};
use geo_skyline::rtree::{RTree, RTreeBuilder};
use geo_skyline::scan::{nearest_scan, skyline_scan};
use geo_skyline::skyline::{Direction, SkylineConfig};
use geo_skyline::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn load_data(seed: u64, n: usize) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n as u64)
        .map(|id| Point::new(id, rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)))
        .collect()
}

fn construct_rtree(points: &[Point<f64>], node_size: usize) -> RTree<f64> {
    let mut builder = RTreeBuilder::new_with_node_size(node_size);
    builder.extend(points.iter().cloned());
    builder.finish()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let points = load_data(0, 20_000);
    let queries = load_data(1, 200);
    let config = SkylineConfig::new(Direction::Minimize, Direction::Maximize);

    c.bench_function("construction (node size 4)", |b| {
        b.iter(|| construct_rtree(&points, 4))
    });

    c.bench_function("construction (node size 16)", |b| {
        b.iter(|| construct_rtree(&points, 16))
    });

    c.bench_function("construction (partitioned)", |b| {
        b.iter(|| PartitionedIndex::new(points.clone(), SplitAxis::MaxSpread))
    });

    let tree = construct_rtree(&points, 4);
    let halves = PartitionedIndex::new(points.clone(), SplitAxis::MaxSpread);

    c.bench_function("nearest (sequential scan)", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(nearest_scan(&points, q.x(), q.y()).unwrap());
            }
        })
    });

    c.bench_function("nearest (best first)", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(tree.nearest(q.x(), q.y()).unwrap());
            }
        })
    });

    c.bench_function("nearest (divide and conquer)", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(halves.nearest(q.x(), q.y()).unwrap());
            }
        })
    });

    c.bench_function("10 neighbors (best first)", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(tree.neighbors(q.x(), q.y(), Some(10), None));
            }
        })
    });

    // Quadratic, so on a smaller sample
    let sample = &points[..2_000];
    c.bench_function("skyline (sequential scan, 2k)", |b| {
        b.iter(|| skyline_scan(sample, &config))
    });

    let sample_tree = construct_rtree(sample, 4);
    c.bench_function("skyline (bbs, 2k)", |b| b.iter(|| sample_tree.skyline(&config)));

    c.bench_function("skyline (bbs)", |b| b.iter(|| tree.skyline(&config)));

    c.bench_function("skyline (divide and conquer)", |b| {
        b.iter(|| halves.skyline(&config))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

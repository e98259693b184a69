//! Shared fixtures for unit tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Point;

mod integration;

/// `n` points with ids `0..n` and coordinates uniform in `[0, 100)`, reproducible from `seed`.
pub(crate) fn random_points(seed: u64, n: usize) -> Vec<Point<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n as u64)
        .map(|id| Point::new(id, rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect()
}

pub(crate) fn nn_example_points() -> Vec<Point<f64>> {
    vec![
        Point::new(10, 0., 0.),
        Point::new(20, 3., 4.),
        Point::new(30, 1., 1.),
    ]
}

/// A(1), B(2), C(3), D(4). With x minimized and y maximized, B dominates C and D.
pub(crate) fn skyline_example_points() -> Vec<Point<f64>> {
    vec![
        Point::new(1, 0., 0.),
        Point::new(2, 1., 5.),
        Point::new(3, 5., 1.),
        Point::new(4, 3., 3.),
    ]
}

pub(crate) fn sorted_ids(points: &[&Point<f64>]) -> Vec<u64> {
    let mut ids: Vec<u64> = points.iter().map(|p| *p.id()).collect();
    ids.sort();
    ids
}

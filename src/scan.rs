//! Sequential-scan baselines.
//!
//! These visit every point with no index and serve as the comparison point for the tree searches,
//! as well as their test oracles.

use crate::error::{GeoSkylineError, Result};
use crate::nearest::{cmp_candidates, Neighbor};
use crate::point::Point;
use crate::r#type::{IndexableNum, PointId};
use crate::skyline::SkylineConfig;
use crate::util::cmp_num;

/// The nearest point to `(x, y)` by a linear scan, with ties going to the smallest id.
pub fn nearest_scan<N: IndexableNum, I: PointId>(
    points: &[Point<N, I>],
    x: N,
    y: N,
) -> Result<Neighbor<'_, N, I>> {
    points
        .iter()
        .min_by(|a, b| cmp_candidates(a, b, x, y))
        .map(|point| Neighbor {
            point,
            distance: point.distance(x, y),
        })
        .ok_or(GeoSkylineError::EmptyIndex)
}

/// Every point in ascending distance from `(x, y)`, then ascending id, by sorting the whole set.
pub fn neighbors_scan<N: IndexableNum, I: PointId>(
    points: &[Point<N, I>],
    x: N,
    y: N,
    max_results: Option<usize>,
    max_distance: Option<N>,
) -> Vec<Neighbor<'_, N, I>> {
    let max_dist_squared = max_distance.map_or(N::infinity(), |d| d * d);
    let mut candidates: Vec<&Point<N, I>> = points
        .iter()
        .filter(|p| p.distance_squared(x, y) <= max_dist_squared)
        .collect();
    candidates.sort_by(|a, b| cmp_candidates(a, b, x, y));
    if let Some(max_results) = max_results {
        candidates.truncate(max_results);
    }
    candidates
        .into_iter()
        .map(|point| Neighbor {
            point,
            distance: point.distance(x, y),
        })
        .collect()
}

/// The points not dominated by any other point, by comparing every pair.
///
/// The result is sorted from best to worst `x` under `config`, then from best to worst `y`, so
/// with `x` minimized and `y` maximized it runs by ascending `x` then descending `y`. Ties keep
/// input order.
pub fn skyline_scan<'a, N: IndexableNum, I: PointId>(
    points: &'a [Point<N, I>],
    config: &SkylineConfig,
) -> Vec<&'a Point<N, I>> {
    let mut skyline: Vec<&Point<N, I>> = points
        .iter()
        .filter(|candidate| !points.iter().any(|other| config.dominates(other, candidate)))
        .collect();
    skyline.sort_by(|a, b| {
        let (ax, ay) = config.orient(a.x(), a.y());
        let (bx, by) = config.orient(b.x(), b.y());
        cmp_num(ax, bx).then_with(|| cmp_num(ay, by))
    });
    skyline
}

/// An unindexed point set queried by sequential scans.
#[derive(Debug, Clone)]
pub struct SequentialScan<N: IndexableNum, I = u64> {
    points: Vec<Point<N, I>>,
}

impl<N: IndexableNum, I: PointId> SequentialScan<N, I> {
    pub fn new(points: Vec<Point<N, I>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point<N, I>] {
        &self.points
    }

    pub fn nearest(&self, x: N, y: N) -> Result<Neighbor<'_, N, I>> {
        nearest_scan(&self.points, x, y)
    }

    pub fn neighbors(
        &self,
        x: N,
        y: N,
        max_results: Option<usize>,
        max_distance: Option<N>,
    ) -> Vec<Neighbor<'_, N, I>> {
        neighbors_scan(&self.points, x, y, max_results, max_distance)
    }

    pub fn skyline(&self, config: &SkylineConfig) -> Vec<&Point<N, I>> {
        skyline_scan(&self.points, config)
    }
}

impl<N: IndexableNum, I: PointId> FromIterator<Point<N, I>> for SequentialScan<N, I> {
    fn from_iter<T: IntoIterator<Item = Point<N, I>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

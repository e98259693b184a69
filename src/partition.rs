//! Divide-and-conquer searches over two independently built trees.
//!
//! The point set is split at the median of one axis and each half gets its own [`RTree`]. Every
//! query runs on both halves and the two partial answers are merged.

use crate::error::{GeoSkylineError, Result};
use crate::nearest::{cmp_candidates, Neighbor};
use crate::point::Point;
use crate::r#type::{IndexableNum, PointId};
use crate::rtree::{RTree, RTreeBuilder, DEFAULT_RTREE_NODE_SIZE};
use crate::skyline::SkylineConfig;
use crate::util::{cmp_num, join};

/// The axis used to split a point set in two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitAxis {
    X,
    Y,
    /// Whichever of `X` and `Y` has the wider range of coordinates, `X` on a tie.
    MaxSpread,
}

impl SplitAxis {
    /// Resolve [`SplitAxis::MaxSpread`] against a concrete point set. Fixed axes are returned
    /// unchanged.
    pub fn resolve<N: IndexableNum, I>(self, points: &[Point<N, I>]) -> SplitAxis {
        match self {
            SplitAxis::X | SplitAxis::Y => self,
            SplitAxis::MaxSpread => {
                let spread = |coord: fn(&Point<N, I>) -> N| {
                    let (min, max) = points.iter().map(coord).fold(
                        (N::infinity(), N::neg_infinity()),
                        |(min, max), v| (min.min(v), max.max(v)),
                    );
                    max - min
                };
                if points.is_empty() || spread(Point::x) >= spread(Point::y) {
                    SplitAxis::X
                } else {
                    SplitAxis::Y
                }
            }
        }
    }

    fn coord<N: IndexableNum, I>(self, point: &Point<N, I>) -> N {
        match self {
            SplitAxis::Y => point.y(),
            SplitAxis::X | SplitAxis::MaxSpread => point.x(),
        }
    }
}

/// Split `points` at the median of `axis`.
///
/// Points are stably sorted by the axis coordinate and the first `len / 2` go left. Returns the
/// resolved axis with both halves, which together hold every input point exactly once.
pub fn partition<N: IndexableNum, I>(
    mut points: Vec<Point<N, I>>,
    axis: SplitAxis,
) -> (SplitAxis, Vec<Point<N, I>>, Vec<Point<N, I>>) {
    let axis = axis.resolve(&points);
    points.sort_by(|a, b| cmp_num(axis.coord(a), axis.coord(b)));
    let right = points.split_off(points.len() / 2);
    (axis, points, right)
}

/// Two trees built over the halves of a median split.
///
/// ```
/// use geo_skyline::partition::{PartitionedIndex, SplitAxis};
/// use geo_skyline::Point;
///
/// let points: Vec<Point<f64>> = (0..10).map(|i| Point::new(i, i as f64, 0.)).collect();
/// let index = PartitionedIndex::new(points, SplitAxis::X);
/// assert_eq!(index.left().num_items(), 5);
/// assert_eq!(*index.nearest(6.2, 1.).unwrap().point.id(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct PartitionedIndex<N: IndexableNum, I = u64> {
    axis: SplitAxis,
    left: RTree<N, I>,
    right: RTree<N, I>,
}

impl<N: IndexableNum, I: PointId> PartitionedIndex<N, I> {
    /// Partition `points` along `axis` and build one tree per half with the default node size.
    pub fn new(points: Vec<Point<N, I>>, axis: SplitAxis) -> Self {
        Self::new_with_node_size(points, axis, DEFAULT_RTREE_NODE_SIZE)
    }

    /// Partition `points` along `axis` and build one tree per half.
    ///
    /// Panics when `node_size < 2`. With the `rayon` feature the two trees are built concurrently.
    pub fn new_with_node_size(points: Vec<Point<N, I>>, axis: SplitAxis, node_size: usize) -> Self {
        let (axis, left, right) = partition(points, axis);
        log::debug!(
            "partitioned along {:?}: {} left, {} right",
            axis,
            left.len(),
            right.len()
        );

        let build = move |points: Vec<Point<N, I>>| {
            let mut builder = RTreeBuilder::new_with_node_size(node_size);
            builder.extend(points);
            builder.finish()
        };
        let (left, right) = join(|| build(left), || build(right));
        Self { axis, left, right }
    }

    /// The resolved split axis, never [`SplitAxis::MaxSpread`].
    pub fn axis(&self) -> SplitAxis {
        self.axis
    }

    pub fn left(&self) -> &RTree<N, I> {
        &self.left
    }

    pub fn right(&self) -> &RTree<N, I> {
        &self.right
    }

    pub fn num_items(&self) -> usize {
        self.left.num_items() + self.right.num_items()
    }

    pub fn is_empty(&self) -> bool {
        self.num_items() == 0
    }

    /// The nearest point to `(x, y)` over both halves.
    ///
    /// Each half answers with its own nearest point, and the closer of the two wins, then the
    /// smaller id. An empty half contributes nothing.
    pub fn nearest(&self, x: N, y: N) -> Result<Neighbor<'_, N, I>> {
        let left = self.left.nearest(x, y).ok();
        let right = self.right.nearest(x, y).ok();
        match (left, right) {
            (Some(l), Some(r)) => match cmp_candidates(l.point, r.point, x, y) {
                std::cmp::Ordering::Greater => Ok(r),
                _ => Ok(l),
            },
            (Some(found), None) | (None, Some(found)) => Ok(found),
            (None, None) => Err(GeoSkylineError::EmptyIndex),
        }
    }

    /// The skyline of the whole point set.
    ///
    /// Each half computes its local skyline, then every point of the union that is dominated by
    /// another point of the union is removed. The result lists left skyline points first.
    pub fn skyline(&self, config: &SkylineConfig) -> Vec<&Point<N, I>> {
        let (left, right) = join(|| self.left.skyline(config), || self.right.skyline(config));
        let union: Vec<&Point<N, I>> = left.into_iter().chain(right).collect();
        union
            .iter()
            .filter(|candidate| !union.iter().any(|other| config.dominates(other, candidate)))
            .copied()
            .collect()
    }
}

use crate::error::Result;
use crate::nearest::Neighbor;
use crate::partition::PartitionedIndex;
use crate::point::Point;
use crate::r#type::{IndexableNum, PointId};
use crate::rtree::RTree;
use crate::scan::SequentialScan;
use crate::skyline::SkylineConfig;

/// A point set that answers nearest-neighbor and skyline queries.
///
/// Every implementation returns the same answers. They differ only in how they search, so a
/// single driver can run and time each algorithm in turn.
///
/// ```
/// use geo_skyline::partition::{PartitionedIndex, SplitAxis};
/// use geo_skyline::rtree::RTreeBuilder;
/// use geo_skyline::scan::SequentialScan;
/// use geo_skyline::{Point, SpatialQuery};
///
/// let points: Vec<Point<f64>> = vec![
///     Point::new(10, 0., 0.),
///     Point::new(20, 3., 4.),
///     Point::new(30, 1., 1.),
/// ];
/// let scan = SequentialScan::new(points.clone());
/// let tree = RTreeBuilder::from_points(points.clone());
/// let halves = PartitionedIndex::new(points, SplitAxis::X);
///
/// let algorithms: [&dyn SpatialQuery<f64>; 3] = [&scan, &tree, &halves];
/// for algorithm in algorithms {
///     assert_eq!(*algorithm.nearest(1., 1.).unwrap().point.id(), 30);
/// }
/// ```
pub trait SpatialQuery<N: IndexableNum, I: PointId = u64> {
    /// The name of the nearest-neighbor algorithm, used in reports.
    fn name(&self) -> &'static str;

    /// The name of the skyline algorithm, used to head skyline reports.
    fn skyline_name(&self) -> &'static str {
        self.name()
    }

    /// The label of the timing line closing a skyline report.
    fn skyline_timer_name(&self) -> &'static str;

    /// The nearest point to `(x, y)`, with ties going to the smallest id.
    fn nearest(&self, x: N, y: N) -> Result<Neighbor<'_, N, I>>;

    /// The points not dominated by any other point under `config`.
    fn skyline(&self, config: &SkylineConfig) -> Vec<&Point<N, I>>;
}

impl<N: IndexableNum, I: PointId> SpatialQuery<N, I> for SequentialScan<N, I> {
    fn name(&self) -> &'static str {
        "Sequential Scan"
    }

    fn skyline_timer_name(&self) -> &'static str {
        "Sequential Scan Time"
    }

    fn nearest(&self, x: N, y: N) -> Result<Neighbor<'_, N, I>> {
        SequentialScan::nearest(self, x, y)
    }

    fn skyline(&self, config: &SkylineConfig) -> Vec<&Point<N, I>> {
        SequentialScan::skyline(self, config)
    }
}

impl<N: IndexableNum, I: PointId> SpatialQuery<N, I> for RTree<N, I> {
    fn name(&self) -> &'static str {
        "Best First"
    }

    fn skyline_name(&self) -> &'static str {
        "BBS"
    }

    fn skyline_timer_name(&self) -> &'static str {
        "BBS Execution Time"
    }

    fn nearest(&self, x: N, y: N) -> Result<Neighbor<'_, N, I>> {
        RTree::nearest(self, x, y)
    }

    fn skyline(&self, config: &SkylineConfig) -> Vec<&Point<N, I>> {
        RTree::skyline(self, config)
    }
}

impl<N: IndexableNum, I: PointId> SpatialQuery<N, I> for PartitionedIndex<N, I> {
    fn name(&self) -> &'static str {
        "Divide and Conquer"
    }

    fn skyline_name(&self) -> &'static str {
        "BBS with Divide-and-Conquer"
    }

    fn skyline_timer_name(&self) -> &'static str {
        "Divide-and-Conquer Execution Time"
    }

    fn nearest(&self, x: N, y: N) -> Result<Neighbor<'_, N, I>> {
        PartitionedIndex::nearest(self, x, y)
    }

    fn skyline(&self, config: &SkylineConfig) -> Vec<&Point<N, I>> {
        PartitionedIndex::skyline(self, config)
    }
}

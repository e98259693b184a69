use crate::error::Result;
use crate::point::Point;
use crate::r#type::{IndexableNum, PointId};
use crate::rtree::index::{RTree, RTreeMetadata};

/// The default node size used by [`RTreeBuilder::new`]
pub const DEFAULT_RTREE_NODE_SIZE: usize = 4;

/// A builder to create an [`RTree`] by repeated insertion.
///
/// ```
/// use geo_skyline::rtree::RTreeBuilder;
///
/// let mut builder = RTreeBuilder::<f64>::new();
/// builder.add_point(1, 0., 0.);
/// builder.add_point(2, 1., 5.);
/// builder.add_point(3, 5., 1.);
/// let tree = builder.finish();
/// assert_eq!(tree.num_items(), 3);
/// ```
pub struct RTreeBuilder<N: IndexableNum, I = u64> {
    tree: RTree<N, I>,
}

impl<N: IndexableNum, I: PointId> RTreeBuilder<N, I> {
    /// Create a new builder with the default node size.
    pub fn new() -> Self {
        Self::new_with_node_size(DEFAULT_RTREE_NODE_SIZE)
    }

    /// Create a new builder whose nodes hold at most `node_size` entries.
    ///
    /// Panics when `node_size < 2`.
    pub fn new_with_node_size(node_size: usize) -> Self {
        Self::from_metadata(RTreeMetadata::new(node_size))
    }

    /// Create a new builder whose nodes hold at most `node_size` entries, failing when
    /// `node_size < 2`.
    pub fn try_new_with_node_size(node_size: usize) -> Result<Self> {
        Ok(Self::from_metadata(RTreeMetadata::try_new(node_size)?))
    }

    /// Create a new builder with the provided metadata
    pub fn from_metadata(metadata: RTreeMetadata) -> Self {
        Self {
            tree: RTree::empty(metadata),
        }
    }

    /// Build a tree with the default node size from a collection of points.
    pub fn from_points(points: impl IntoIterator<Item = Point<N, I>>) -> RTree<N, I> {
        let mut builder = Self::new();
        builder.extend(points);
        builder.finish()
    }

    /// Access the underlying [RTreeMetadata] of this instance.
    pub fn metadata(&self) -> &RTreeMetadata {
        self.tree.metadata()
    }

    /// The tree built so far.
    pub fn tree(&self) -> &RTree<N, I> {
        &self.tree
    }

    /// Insert a point into the tree.
    ///
    /// This returns the insertion index: the number of points added before this one.
    #[inline]
    pub fn add(&mut self, point: Point<N, I>) -> usize {
        debug_assert!(
            !point.x().is_nan() && !point.y().is_nan(),
            "NaN coordinate in {:?}",
            point
        );
        let index = self.tree.num_items();
        self.tree.insert(point);
        index
    }

    /// Insert a point given by its parts.
    #[inline]
    pub fn add_point(&mut self, id: I, x: N, y: N) -> usize {
        self.add(Point::new(id, x, y))
    }

    /// Insert every point of the iterator, in order.
    pub fn extend(&mut self, points: impl IntoIterator<Item = Point<N, I>>) {
        for point in points {
            self.add(point);
        }
    }

    /// Consume this builder, returning the finished read-only tree.
    ///
    /// Debug builds walk the whole tree with [`RTree::assert_invariants`] first. Release builds
    /// skip that walk and only check that the root fits in a node.
    pub fn finish(self) -> RTree<N, I> {
        let tree = self.tree;
        #[cfg(debug_assertions)]
        tree.assert_invariants();
        assert!(
            tree.node(tree.root_id()).len() <= tree.node_size(),
            "Root holds more than {} entries",
            tree.node_size()
        );

        log::debug!(
            "built R-tree: {} points, {} nodes, height {}, node size {}",
            tree.num_items(),
            tree.num_nodes(),
            tree.height(),
            tree.node_size()
        );
        tree
    }
}

impl<N: IndexableNum, I: PointId> Default for RTreeBuilder<N, I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rtree::Node;

    #[test]
    fn does_not_panic_length_1_tree() {
        let mut builder = RTreeBuilder::<f64>::new();
        builder.add_point(7, -20., 1020.);
        let tree = builder.finish();
        let result = tree.search(-20., 1020., -20., 1020.);
        assert_eq!(result.len(), 1);
        assert_eq!(*result[0].id(), 7);
    }

    #[test]
    fn returns_insertion_index() {
        let mut builder = RTreeBuilder::<f32, String>::new_with_node_size(3);
        assert_eq!(builder.add_point("a".to_string(), 0., 0.), 0);
        assert_eq!(builder.add_point("b".to_string(), 1., 0.), 1);
        assert_eq!(builder.add_point("a".to_string(), 0., 0.), 2);
        assert_eq!(builder.tree().num_items(), 3);
    }

    #[test]
    fn rejects_tiny_node_size() {
        assert!(RTreeBuilder::<f64>::try_new_with_node_size(1).is_err());
        assert!(RTreeBuilder::<f64>::try_new_with_node_size(2).is_ok());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "were inserted")]
    fn finish_checks_invariants_in_debug() {
        let mut builder = RTreeBuilder::<f64>::new_with_node_size(4);
        builder.add_point(0, 0., 0.);
        let root = builder.tree.root_id();
        // Slip a point into the leaf without counting it
        if let Node::Leaf(points) = &mut builder.tree.nodes[root.0] {
            points.push(Point::new(1, 1., 1.));
        }
        builder.finish();
    }
}

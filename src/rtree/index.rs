use geo_traits::{CoordTrait, RectTrait};
use tinyvec::TinyVec;

use crate::error::Result;
use crate::mbr::Mbr;
use crate::nearest::{self, Neighbor};
use crate::point::Point;
use crate::r#type::{IndexableNum, PointId};
use crate::rtree::node::{Node, NodeId};
use crate::rtree::traversal::NodeRef;
use crate::skyline::{self, SkylineConfig};

/// Common metadata to describe a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RTreeMetadata {
    node_size: usize,
    min_fill: usize,
}

impl RTreeMetadata {
    /// Metadata for a tree whose nodes hold at most `node_size` entries.
    ///
    /// Panics when `node_size < 2`; use [`RTreeMetadata::try_new`] to get an error instead.
    pub fn new(node_size: usize) -> Self {
        assert!(node_size >= 2, "Node size must be at least 2");
        Self {
            node_size,
            min_fill: node_size.div_ceil(2),
        }
    }

    pub fn try_new(node_size: usize) -> Result<Self> {
        if node_size < 2 {
            return Err(crate::GeoSkylineError::InvalidNodeSize(node_size));
        }
        Ok(Self::new(node_size))
    }

    /// The maximum number of entries in each node.
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// The minimum number of entries in each non-root node, `ceil(node_size / 2)`.
    pub fn min_fill(&self) -> usize {
        self.min_fill
    }
}

/// A height-balanced R-tree over labelled points.
///
/// Nodes live in one arena and reference their children by [`NodeId`]. The tree is built once,
/// through [`RTreeBuilder`][crate::rtree::RTreeBuilder], and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct RTree<N: IndexableNum, I = u64> {
    pub(crate) nodes: Vec<Node<N, I>>,
    pub(crate) root: NodeId,
    /// Number of levels, 1 when the root is a leaf.
    pub(crate) height: usize,
    pub(crate) num_items: usize,
    pub(crate) metadata: RTreeMetadata,
}

impl<N: IndexableNum, I: PointId> RTree<N, I> {
    pub(crate) fn empty(metadata: RTreeMetadata) -> Self {
        Self {
            nodes: vec![Node::Leaf(vec![])],
            root: NodeId(0),
            height: 1,
            num_items: 0,
            metadata,
        }
    }

    /// Access the metadata describing this RTree
    pub fn metadata(&self) -> &RTreeMetadata {
        &self.metadata
    }

    /// The maximum number of elements in each node.
    pub fn node_size(&self) -> usize {
        self.metadata.node_size()
    }

    /// The total number of points contained in this RTree.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// The total number of nodes in this RTree, including both leaf and internal nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// The number of levels (height) of the tree.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Access a node by id.
    pub fn node(&self, id: NodeId) -> &Node<N, I> {
        &self.nodes[id.0]
    }

    /// The bounds of every point in the tree, or `None` when it is empty.
    pub fn bounds(&self) -> Option<Mbr<N>> {
        self.nodes[self.root.0].mbr()
    }

    /// Access the root node of the RTree for manual traversal.
    pub fn root(&self) -> NodeRef<'_, N, I> {
        NodeRef::new(self, self.root, self.bounds())
    }

    /// Iterate over all points, leaf by leaf.
    pub fn points(&self) -> impl Iterator<Item = &Point<N, I>> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Leaf(points) => Some(points),
                Node::Internal(_) => None,
            })
            .flatten()
    }

    /// Search the RTree for points inside the provided bounding box, borders included.
    ///
    /// An inverted box, with `min > max` on either axis, contains nothing.
    pub fn search(&self, min_x: N, min_y: N, max_x: N, max_y: N) -> Vec<&Point<N, I>> {
        let mut results = vec![];
        if !(min_x <= max_x && min_y <= max_y) {
            return results;
        }
        let query = Mbr::new(min_x, min_y, max_x, max_y);

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[usize; 32]> = TinyVec::new();
        stack.push(self.root.0);

        while let Some(node_index) = stack.pop() {
            match &self.nodes[node_index] {
                Node::Leaf(points) => results.extend(
                    points
                        .iter()
                        .filter(|p| query.contains(p.x(), p.y())),
                ),
                Node::Internal(children) => {
                    for child in children {
                        if query.intersects(&child.mbr) {
                            stack.push(child.node.0);
                        }
                    }
                }
            }
        }

        results
    }

    /// Search the RTree for points inside the provided rectangle.
    pub fn search_rect(&self, rect: &impl RectTrait<T = N>) -> Vec<&Point<N, I>> {
        self.search(
            rect.min().x(),
            rect.min().y(),
            rect.max().x(),
            rect.max().y(),
        )
    }

    /// Search points in order of distance from the given coordinate.
    ///
    /// Equally distant points come out in ascending id order. Stops after `max_results` points,
    /// and never returns a point farther than `max_distance`.
    ///
    /// ```
    /// use geo_skyline::rtree::RTreeBuilder;
    ///
    /// let mut builder = RTreeBuilder::<f64>::new();
    /// builder.add_point(10, 0., 0.);
    /// builder.add_point(20, 3., 4.);
    /// builder.add_point(30, 1., 1.);
    /// let tree = builder.finish();
    ///
    /// let ids: Vec<u64> = tree
    ///     .neighbors(5., 5., None, None)
    ///     .iter()
    ///     .map(|n| *n.point.id())
    ///     .collect();
    /// assert_eq!(ids, vec![20, 30, 10]);
    /// ```
    pub fn neighbors(
        &self,
        x: N,
        y: N,
        max_results: Option<usize>,
        max_distance: Option<N>,
    ) -> Vec<Neighbor<'_, N, I>> {
        nearest::best_first(self, x, y, max_results, max_distance)
    }

    /// Search points in order of distance from the given coordinate.
    pub fn neighbors_coord(
        &self,
        coord: &impl CoordTrait<T = N>,
        max_results: Option<usize>,
        max_distance: Option<N>,
    ) -> Vec<Neighbor<'_, N, I>> {
        self.neighbors(coord.x(), coord.y(), max_results, max_distance)
    }

    /// The nearest point to the given coordinate, using best-first search.
    pub fn nearest(&self, x: N, y: N) -> Result<Neighbor<'_, N, I>> {
        nearest::nearest(self, x, y)
    }

    /// The nearest point to the given coordinate.
    pub fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<Neighbor<'_, N, I>> {
        self.nearest(coord.x(), coord.y())
    }

    /// The points not dominated by any other point, using branch-and-bound skyline search.
    pub fn skyline(&self, config: &SkylineConfig) -> Vec<&Point<N, I>> {
        skyline::bbs(self, config)
    }

    /// Check the structural invariants of the tree, panicking on the first violation.
    ///
    /// - every internal entry's rectangle is exactly the bounds of its subtree
    /// - every node holds at most `node_size` entries, and at least `min_fill` unless it is the
    ///   root
    /// - every leaf sits at depth `height`
    /// - the leaves hold `num_items` points in total
    pub fn assert_invariants(&self) {
        let mut leaf_points = 0;
        self.assert_subtree(self.root, 1, &mut leaf_points);
        assert_eq!(
            leaf_points, self.num_items,
            "Leaves hold {} points when {} were inserted",
            leaf_points, self.num_items
        );
    }

    fn assert_subtree(&self, id: NodeId, depth: usize, leaf_points: &mut usize) -> Option<Mbr<N>> {
        let node = &self.nodes[id.0];
        let is_root = id == self.root;

        assert!(
            node.len() <= self.node_size(),
            "Node {:?} holds {} entries, above capacity {}",
            id,
            node.len(),
            self.node_size()
        );
        if !is_root {
            assert!(
                node.len() >= self.metadata.min_fill(),
                "Node {:?} holds {} entries, below minimum fill {}",
                id,
                node.len(),
                self.metadata.min_fill()
            );
        }

        match node {
            Node::Leaf(points) => {
                assert_eq!(depth, self.height, "Leaf {:?} at depth {}", id, depth);
                *leaf_points += points.len();
            }
            Node::Internal(children) => {
                assert!(depth < self.height, "Internal node {:?} at leaf depth", id);
                assert!(
                    !is_root || children.len() >= 2,
                    "Internal root holds a single child"
                );
                for child in children {
                    let actual = self.assert_subtree(child.node, depth + 1, leaf_points);
                    assert_eq!(
                        actual,
                        Some(child.mbr),
                        "Entry for {:?} is not the tight bound of its subtree",
                        child.node
                    );
                }
            }
        }

        node.mbr()
    }
}

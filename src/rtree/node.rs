use crate::mbr::Mbr;
use crate::point::Point;
use crate::r#type::IndexableNum;

/// The position of a node inside the arena of an [`RTree`][crate::rtree::RTree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The arena offset of this node.
    pub fn get(self) -> usize {
        self.0
    }
}

/// An entry of an internal node: one child and the tight bounds of its whole subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildEntry<N: IndexableNum> {
    pub(crate) node: NodeId,
    pub(crate) mbr: Mbr<N>,
}

impl<N: IndexableNum> ChildEntry<N> {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn mbr(&self) -> &Mbr<N> {
        &self.mbr
    }
}

/// A node of the tree. Leaves hold points, internal nodes hold child entries.
#[derive(Debug, Clone)]
pub enum Node<N: IndexableNum, I> {
    Leaf(Vec<Point<N, I>>),
    Internal(Vec<ChildEntry<N>>),
}

impl<N: IndexableNum, I> Node<N, I> {
    /// The fanout of this node.
    pub fn len(&self) -> usize {
        match self {
            Node::Leaf(points) => points.len(),
            Node::Internal(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Recompute the tight bounds of this node from its entries.
    pub fn mbr(&self) -> Option<Mbr<N>> {
        match self {
            Node::Leaf(points) => {
                let (first, rest) = points.split_first()?;
                Some(rest.iter().fold(first.mbr(), |acc, p| acc.union(&p.mbr())))
            }
            Node::Internal(children) => Mbr::bounding(children.iter().map(|c| &c.mbr)),
        }
    }
}

/// Anything that can be distributed by a node split.
pub(crate) trait Bounded<N: IndexableNum> {
    fn bounds(&self) -> Mbr<N>;
}

impl<N: IndexableNum, I> Bounded<N> for Point<N, I> {
    #[inline]
    fn bounds(&self) -> Mbr<N> {
        self.mbr()
    }
}

impl<N: IndexableNum> Bounded<N> for ChildEntry<N> {
    #[inline]
    fn bounds(&self) -> Mbr<N> {
        self.mbr
    }
}

//! Utilities to traverse the RTree structure.

use crate::mbr::Mbr;
use crate::point::Point;
use crate::r#type::{IndexableNum, PointId};
use crate::rtree::index::RTree;
use crate::rtree::node::{Node, NodeId};

/// A borrowed view of one node of an [`RTree`].
#[derive(Debug)]
pub struct NodeRef<'a, N: IndexableNum, I> {
    /// The tree that this node is a reference onto
    tree: &'a RTree<N, I>,
    id: NodeId,
    /// The bounds recorded for this node by its parent. `None` only for an empty root.
    mbr: Option<Mbr<N>>,
}

impl<N: IndexableNum, I> Clone for NodeRef<'_, N, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: IndexableNum, I> Copy for NodeRef<'_, N, I> {}

impl<'a, N: IndexableNum, I: PointId> NodeRef<'a, N, I> {
    pub(crate) fn new(tree: &'a RTree<N, I>, id: NodeId, mbr: Option<Mbr<N>>) -> Self {
        Self { tree, id, mbr }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The bounds of every point below this node.
    pub fn mbr(&self) -> Option<Mbr<N>> {
        self.mbr
    }

    /// Returns `true` if this is a leaf node holding points.
    pub fn is_leaf(&self) -> bool {
        self.tree.node(self.id).is_leaf()
    }

    /// Returns `true` if this is an internal node with children.
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }

    /// Returns an iterator over the child nodes of this node. It is empty for a leaf.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, N, I>> + 'a {
        let tree = self.tree;
        let children = match tree.node(self.id) {
            Node::Internal(children) => children.as_slice(),
            Node::Leaf(_) => Default::default(),
        };
        children
            .iter()
            .map(move |child| NodeRef::new(tree, child.node, Some(child.mbr)))
    }

    /// The points held by this node. It is empty for an internal node.
    pub fn points(&self) -> &'a [Point<N, I>] {
        match self.tree.node(self.id) {
            Node::Leaf(points) => points.as_slice(),
            Node::Internal(_) => Default::default(),
        }
    }

    /// All leaves below this node, left to right.
    pub fn leaves(&self) -> Vec<NodeRef<'a, N, I>> {
        let mut leaves = vec![];
        let mut stack = vec![*self];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                leaves.push(node);
            } else {
                let mut children: Vec<_> = node.children().collect();
                children.reverse();
                stack.extend(children);
            }
        }
        leaves
    }
}

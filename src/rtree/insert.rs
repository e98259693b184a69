//! Insertion of a single point, with overflow handling and bottom-up tightening.

use crate::mbr::Mbr;
use crate::point::Point;
use crate::r#type::{IndexableNum, PointId};
use crate::rtree::index::RTree;
use crate::rtree::node::{ChildEntry, Node, NodeId};
use crate::rtree::split::{quadratic_split, Split};
use crate::util::cmp_num;

/// What an insertion into a subtree reports back to its parent.
struct Inserted<N: IndexableNum> {
    /// The new tight bounds of the subtree that was descended into.
    mbr: Mbr<N>,
    /// A freshly split-off sibling that the parent must adopt.
    sibling: Option<ChildEntry<N>>,
}

impl<N: IndexableNum, I: PointId> RTree<N, I> {
    /// Insert a point, growing the tree by one level if the root splits.
    pub(crate) fn insert(&mut self, point: Point<N, I>) {
        let root = self.root;
        let Inserted { mbr, sibling } = self.insert_into(root, point);
        self.num_items += 1;

        if let Some(sibling) = sibling {
            let new_root = self.push_node(Node::Internal(vec![
                ChildEntry { node: root, mbr },
                sibling,
            ]));
            self.root = new_root;
            self.height += 1;
            log::debug!("root split, tree height is now {}", self.height);
        }
    }

    fn insert_into(&mut self, node: NodeId, point: Point<N, I>) -> Inserted<N> {
        let max_fill = self.metadata.node_size();
        let min_fill = self.metadata.min_fill();

        if self.nodes[node.0].is_leaf() {
            let point_mbr = point.mbr();
            let Node::Leaf(points) = &mut self.nodes[node.0] else {
                unreachable!()
            };
            points.push(point);

            if points.len() <= max_fill {
                let mbr = points
                    .iter()
                    .fold(point_mbr, |acc, p| acc.union(&p.mbr()));
                return Inserted { mbr, sibling: None };
            }

            let Split {
                left,
                left_mbr,
                right,
                right_mbr,
            } = quadratic_split(std::mem::take(points), min_fill);
            *points = left;
            log::trace!("split leaf {:?} into {} + {}", node, points.len(), right.len());
            let sibling = self.push_node(Node::Leaf(right));
            return Inserted {
                mbr: left_mbr,
                sibling: Some(ChildEntry {
                    node: sibling,
                    mbr: right_mbr,
                }),
            };
        }

        let chosen = self.choose_subtree(node, &point.mbr());
        let child = match &self.nodes[node.0] {
            Node::Internal(children) => children[chosen].node,
            Node::Leaf(_) => unreachable!(),
        };
        let inserted = self.insert_into(child, point);

        let Node::Internal(children) = &mut self.nodes[node.0] else {
            unreachable!()
        };
        children[chosen].mbr = inserted.mbr;
        if let Some(sibling) = inserted.sibling {
            children.push(sibling);
        }

        if children.len() <= max_fill {
            let mbr = children
                .iter()
                .fold(inserted.mbr, |acc, c| acc.union(&c.mbr));
            return Inserted { mbr, sibling: None };
        }

        let Split {
            left,
            left_mbr,
            right,
            right_mbr,
        } = quadratic_split(std::mem::take(children), min_fill);
        *children = left;
        log::trace!(
            "split internal node {:?} into {} + {}",
            node,
            children.len(),
            right.len()
        );
        let sibling = self.push_node(Node::Internal(right));
        Inserted {
            mbr: left_mbr,
            sibling: Some(ChildEntry {
                node: sibling,
                mbr: right_mbr,
            }),
        }
    }

    /// Pick the child needing the least enlargement to cover `mbr`. Ties go to the smallest
    /// resulting area, then to the child with the fewest entries.
    fn choose_subtree(&self, node: NodeId, mbr: &Mbr<N>) -> usize {
        let Node::Internal(children) = &self.nodes[node.0] else {
            unreachable!()
        };

        let mut best = 0;
        let mut best_key: Option<(N, N, usize)> = None;
        for (i, child) in children.iter().enumerate() {
            let key = (
                child.mbr.enlargement(mbr),
                child.mbr.union(mbr).area(),
                self.nodes[child.node.0].len(),
            );
            let better = match &best_key {
                None => true,
                Some(best_key) => cmp_num(key.0, best_key.0)
                    .then_with(|| cmp_num(key.1, best_key.1))
                    .then_with(|| key.2.cmp(&best_key.2))
                    .is_lt(),
            };
            if better {
                best = i;
                best_key = Some(key);
            }
        }
        best
    }

    fn push_node(&mut self, node: Node<N, I>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

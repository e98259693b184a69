//! Branch-and-bound skyline search.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::point::Point;
use crate::r#type::{IndexableNum, PointId};
use crate::rtree::{Node, NodeId, RTree};
use crate::skyline::dominance::{dominates_oriented, SkylineConfig};
use crate::util::cmp_num;

#[derive(Debug)]
enum QueueItem<'a, N: IndexableNum, I> {
    Node(NodeId),
    Point(&'a Point<N, I>),
}

/// An entry of the BBS queue, keyed by its most favorable oriented corner.
///
/// Ordered by the sum of the oriented corner coordinates, then by the corner itself, then nodes
/// before points, then id. If `a` dominates `b` then the key of `a`, or of any entry whose region
/// contains `a`, is strictly smaller than the key of `b`.
#[derive(Debug)]
struct SkylineNode<'a, N: IndexableNum, I> {
    score: N,
    corner: (N, N),
    item: QueueItem<'a, N, I>,
}

impl<'a, N: IndexableNum, I> SkylineNode<'a, N, I> {
    fn new(corner: (N, N), item: QueueItem<'a, N, I>) -> Self {
        Self {
            score: corner.0 + corner.1,
            corner,
            item,
        }
    }
}

impl<N: IndexableNum, I: PointId> Ord for SkylineNode<'_, N, I> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_num(self.score, other.score)
            .then_with(|| cmp_num(self.corner.0, other.corner.0))
            .then_with(|| cmp_num(self.corner.1, other.corner.1))
            .then_with(|| match (&self.item, &other.item) {
                (QueueItem::Node(a), QueueItem::Node(b)) => a.cmp(b),
                (QueueItem::Node(_), QueueItem::Point(_)) => Ordering::Less,
                (QueueItem::Point(_), QueueItem::Node(_)) => Ordering::Greater,
                (QueueItem::Point(a), QueueItem::Point(b)) => a.id().cmp(b.id()),
            })
    }
}

impl<N: IndexableNum, I: PointId> PartialOrd for SkylineNode<'_, N, I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: IndexableNum, I: PointId> PartialEq for SkylineNode<'_, N, I> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: IndexableNum, I: PointId> Eq for SkylineNode<'_, N, I> {}

/// The confirmed skyline, in the order points were accepted.
struct Skyline<'a, N: IndexableNum, I> {
    points: Vec<&'a Point<N, I>>,
    oriented: Vec<(N, N)>,
}

impl<'a, N: IndexableNum, I> Skyline<'a, N, I> {
    fn dominates(&self, corner: (N, N)) -> bool {
        self.oriented
            .iter()
            .any(|s| dominates_oriented(*s, corner))
    }

    fn push(&mut self, point: &'a Point<N, I>, oriented: (N, N)) {
        self.points.push(point);
        self.oriented.push(oriented);
    }
}

/// Compute the skyline of `tree` under `config`.
///
/// Entries are dequeued in ascending key order, so every point is checked only after all points
/// that could dominate it have already been accepted. A node whose best corner is dominated by an
/// accepted point is discarded without being expanded.
pub(crate) fn bbs<'a, N: IndexableNum, I: PointId>(
    tree: &'a RTree<N, I>,
    config: &SkylineConfig,
) -> Vec<&'a Point<N, I>> {
    let mut skyline = Skyline {
        points: vec![],
        oriented: vec![],
    };
    let mut queue = BinaryHeap::new();
    let mut expanded = 1;
    let mut pruned = 0;
    push_children(tree, tree.root_id(), config, &skyline, &mut queue);

    while let Some(Reverse(entry)) = queue.pop() {
        if skyline.dominates(entry.corner) {
            pruned += 1;
            continue;
        }
        match entry.item {
            QueueItem::Point(point) => skyline.push(point, entry.corner),
            QueueItem::Node(node) => {
                expanded += 1;
                push_children(tree, node, config, &skyline, &mut queue);
            }
        }
    }

    log::trace!(
        "bbs skyline: {} points, {} of {} nodes expanded, {} entries pruned",
        skyline.points.len(),
        expanded,
        tree.num_nodes(),
        pruned
    );
    skyline.points
}

fn push_children<'a, N: IndexableNum, I: PointId>(
    tree: &'a RTree<N, I>,
    node: NodeId,
    config: &SkylineConfig,
    skyline: &Skyline<'a, N, I>,
    queue: &mut BinaryHeap<Reverse<SkylineNode<'a, N, I>>>,
) {
    match tree.node(node) {
        Node::Leaf(points) => {
            for point in points {
                let corner = config.orient(point.x(), point.y());
                if !skyline.dominates(corner) {
                    queue.push(Reverse(SkylineNode::new(corner, QueueItem::Point(point))));
                }
            }
        }
        Node::Internal(children) => {
            for child in children {
                let corner = config.best_corner(child.mbr());
                if !skyline.dominates(corner) {
                    queue.push(Reverse(SkylineNode::new(
                        corner,
                        QueueItem::Node(child.node()),
                    )));
                }
            }
        }
    }
}

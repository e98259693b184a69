//! Best-first nearest neighbor search.
//!
//! Entries of the tree are visited from a priority queue keyed by their squared `mindist` to the
//! query. Since the key of every unexpanded subtree lower-bounds the distance of every point
//! inside it, points come off the queue in ascending distance, and the first one is the nearest.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{GeoSkylineError, Result};
use crate::point::Point;
use crate::r#type::{IndexableNum, PointId};
use crate::rtree::{Node, NodeId, RTree};
use crate::util::cmp_num;

/// A point found by a neighbor search, with its Euclidean distance to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<'a, N: IndexableNum, I> {
    pub point: &'a Point<N, I>,
    pub distance: N,
}

/// Order two candidates for the query `(x, y)`: closer first, then smaller id.
///
/// Squared distances are compared, exactly as the search queue does, so that rounding in `sqrt`
/// can never reorder two candidates.
pub(crate) fn cmp_candidates<N: IndexableNum, I: PointId>(
    a: &Point<N, I>,
    b: &Point<N, I>,
    x: N,
    y: N,
) -> Ordering {
    cmp_num(a.distance_squared(x, y), b.distance_squared(x, y)).then_with(|| a.id().cmp(b.id()))
}

#[derive(Debug)]
enum QueueItem<'a, N: IndexableNum, I> {
    Node(NodeId),
    Point(&'a Point<N, I>),
}

/// A wrapper around a queue item and its squared distance for use in the priority queue.
///
/// Ordered by distance, then nodes before points, then point id. Expanding every node at a given
/// distance before emitting points at that same distance is what makes ties resolve to the
/// smallest id.
#[derive(Debug)]
struct NeighborNode<'a, N: IndexableNum, I> {
    dist: N,
    item: QueueItem<'a, N, I>,
}

impl<N: IndexableNum, I: PointId> Ord for NeighborNode<'_, N, I> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_num(self.dist, other.dist).then_with(|| match (&self.item, &other.item) {
            (QueueItem::Node(a), QueueItem::Node(b)) => a.cmp(b),
            (QueueItem::Node(_), QueueItem::Point(_)) => Ordering::Less,
            (QueueItem::Point(_), QueueItem::Node(_)) => Ordering::Greater,
            (QueueItem::Point(a), QueueItem::Point(b)) => a.id().cmp(b.id()),
        })
    }
}

impl<N: IndexableNum, I: PointId> PartialOrd for NeighborNode<'_, N, I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: IndexableNum, I: PointId> PartialEq for NeighborNode<'_, N, I> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: IndexableNum, I: PointId> Eq for NeighborNode<'_, N, I> {}

type NeighborQueue<'a, N, I> = BinaryHeap<Reverse<NeighborNode<'a, N, I>>>;

/// Search points of `tree` in order of distance from `(x, y)`.
///
/// Stops once `max_results` points are found, and skips everything farther than `max_distance`.
pub(crate) fn best_first<N: IndexableNum, I: PointId>(
    tree: &RTree<N, I>,
    x: N,
    y: N,
    max_results: Option<usize>,
    max_distance: Option<N>,
) -> Vec<Neighbor<'_, N, I>> {
    let mut results = vec![];
    if tree.is_empty() || max_results == Some(0) {
        return results;
    }

    let max_dist_squared = max_distance.map_or(N::infinity(), |d| d * d);
    let mut queue = BinaryHeap::new();
    let mut expanded = 1;
    push_children(tree, tree.root_id(), x, y, max_dist_squared, &mut queue);

    while let Some(Reverse(NeighborNode { dist, item })) = queue.pop() {
        match item {
            QueueItem::Point(point) => {
                results.push(Neighbor {
                    point,
                    distance: dist.sqrt(),
                });
                if max_results.is_some_and(|max_results| results.len() == max_results) {
                    break;
                }
            }
            QueueItem::Node(node) => {
                expanded += 1;
                push_children(tree, node, x, y, max_dist_squared, &mut queue);
            }
        }
    }

    log::trace!(
        "best-first search at ({}, {}): {} results, {} of {} nodes expanded",
        x,
        y,
        results.len(),
        expanded,
        tree.num_nodes()
    );
    results
}

fn push_children<'a, N: IndexableNum, I: PointId>(
    tree: &'a RTree<N, I>,
    node: NodeId,
    x: N,
    y: N,
    max_dist_squared: N,
    queue: &mut NeighborQueue<'a, N, I>,
) {
    match tree.node(node) {
        Node::Leaf(points) => {
            for point in points {
                let dist = point.distance_squared(x, y);
                if dist <= max_dist_squared {
                    queue.push(Reverse(NeighborNode {
                        dist,
                        item: QueueItem::Point(point),
                    }));
                }
            }
        }
        Node::Internal(children) => {
            for child in children {
                let dist = child.mbr().mindist_squared(x, y);
                if dist <= max_dist_squared {
                    queue.push(Reverse(NeighborNode {
                        dist,
                        item: QueueItem::Node(child.node()),
                    }));
                }
            }
        }
    }
}

/// The nearest point of `tree` to `(x, y)`, with ties going to the smallest id.
pub(crate) fn nearest<N: IndexableNum, I: PointId>(
    tree: &RTree<N, I>,
    x: N,
    y: N,
) -> Result<Neighbor<'_, N, I>> {
    best_first(tree, x, y, Some(1), None)
        .into_iter()
        .next()
        .ok_or(GeoSkylineError::EmptyIndex)
}

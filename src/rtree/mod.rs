//! An insertion-built, height-balanced R-tree over labelled points.
//!
//! Nodes are stored in a single arena and children are referenced by [`NodeId`]. Inserting
//! descends along the path of least enlargement. Overflowing nodes are split with the quadratic
//! seed heuristic and ancestors are re-tightened bottom-up, so that every internal entry is the
//! exact bound of its subtree.

mod builder;
mod index;
mod insert;
mod node;
mod split;
pub mod traversal;

pub use builder::{RTreeBuilder, DEFAULT_RTREE_NODE_SIZE};
pub use index::{RTree, RTreeMetadata};
pub use node::{ChildEntry, Node, NodeId};
pub use traversal::NodeRef;

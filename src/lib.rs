#![doc = include_str!("../README.md")]

mod error;
pub mod io;
mod mbr;
mod nearest;
pub mod partition;
mod point;
pub mod report;
pub mod rtree;
pub mod scan;
pub mod skyline;
mod r#trait;
mod r#type;
mod util;

pub use error::{GeoSkylineError, Result};
pub use mbr::{Coord, Mbr};
pub use nearest::Neighbor;
pub use point::Point;
pub use r#trait::SpatialQuery;
pub use r#type::{IndexableNum, PointId};

#[cfg(test)]
pub(crate) mod test;

//! Skyline (Pareto-dominance) queries.
//!
//! Which end of each axis is preferable depends on the dataset, so every query takes an explicit
//! [`SkylineConfig`].

mod bbs;
mod dominance;

pub(crate) use bbs::bbs;
pub use dominance::{Direction, SkylineConfig};

use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum GeoSkylineError {
    /// A dataset line could not be read as `<id> <x> <y>`.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A nearest neighbor was requested from an index holding no points.
    #[error("Nearest neighbor search on an empty index")]
    EmptyIndex,

    #[error("Node size must be at least 2, got {0}")]
    InvalidNodeSize(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeoSkylineError>;

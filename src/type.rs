use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::Float;

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Every search in this crate
/// relies on `sqrt`, negation and a total order over finite values, so only the IEEE float types
/// are admitted.
pub trait IndexableNum:
    private::Sealed + Float + FromStr + Debug + Display + Send + Sync + 'static
{
}

impl IndexableNum for f32 {}

impl IndexableNum for f64 {}

/// A trait for the opaque labels attached to each [`Point`][crate::Point].
///
/// Ids only need a total order, which is used to break ties between equally-near points. They
/// are never required to be unique.
pub trait PointId: Ord + Clone + Debug + Send + Sync {}

impl<T: Ord + Clone + Debug + Send + Sync> PointId for T {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

use std::cmp::Ordering;

use crate::r#type::IndexableNum;

/// Compare two coordinates or distances.
///
/// NaN never enters an index built through the public API, so an unordered pair is treated as
/// equal rather than panicking.
#[inline]
pub(crate) fn cmp_num<N: IndexableNum>(a: N, b: N) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Run two independent closures, concurrently when the `rayon` feature is enabled.
#[cfg(feature = "rayon")]
#[inline]
pub(crate) fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

/// Run two independent closures, concurrently when the `rayon` feature is enabled.
#[cfg(not(feature = "rayon"))]
#[inline]
pub(crate) fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    (a(), b())
}

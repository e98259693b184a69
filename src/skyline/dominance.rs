use crate::mbr::Mbr;
use crate::point::Point;
use crate::r#type::IndexableNum;

/// Whether smaller or larger values are preferable on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Minimize,
    Maximize,
}

impl Direction {
    /// Map a value so that smaller is always better.
    #[inline]
    fn orient<N: IndexableNum>(self, value: N) -> N {
        match self {
            Direction::Minimize => value,
            Direction::Maximize => -value,
        }
    }

    /// The most favorable end of `[min, max]`.
    #[inline]
    fn best<N: IndexableNum>(self, min: N, max: N) -> N {
        match self {
            Direction::Minimize => min,
            Direction::Maximize => max,
        }
    }
}

/// Per-axis optimization directions for a skyline query.
///
/// ```
/// use geo_skyline::skyline::{Direction, SkylineConfig};
/// use geo_skyline::Point;
///
/// // Cheap (small x) and large (big y) is best
/// let config = SkylineConfig::new(Direction::Minimize, Direction::Maximize);
/// let b = Point::new(2u64, 1., 5.);
/// let d = Point::new(4u64, 3., 3.);
/// assert!(config.dominates(&b, &d));
/// assert!(!config.dominates(&d, &b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkylineConfig {
    pub x: Direction,
    pub y: Direction,
}

impl SkylineConfig {
    pub const fn new(x: Direction, y: Direction) -> Self {
        Self { x, y }
    }

    /// Both coordinates mapped so that smaller is better.
    #[inline]
    pub(crate) fn orient<N: IndexableNum>(&self, x: N, y: N) -> (N, N) {
        (self.x.orient(x), self.y.orient(y))
    }

    /// The oriented corner of `mbr` that is most favorable on both axes. Every point inside the
    /// rectangle is dominated by or equal to this corner.
    #[inline]
    pub(crate) fn best_corner<N: IndexableNum>(&self, mbr: &Mbr<N>) -> (N, N) {
        self.orient(
            self.x.best(mbr.min_x(), mbr.max_x()),
            self.y.best(mbr.min_y(), mbr.max_y()),
        )
    }

    /// Returns `true` if `a` is at least as good as `b` on both axes and strictly better on one.
    pub fn dominates<N: IndexableNum, I>(&self, a: &Point<N, I>, b: &Point<N, I>) -> bool {
        dominates_oriented(self.orient(a.x(), a.y()), self.orient(b.x(), b.y()))
    }

    /// Returns `true` if `a` dominates every point that could lie inside `mbr`.
    pub fn dominates_mbr<N: IndexableNum, I>(&self, a: &Point<N, I>, mbr: &Mbr<N>) -> bool {
        dominates_oriented(self.orient(a.x(), a.y()), self.best_corner(mbr))
    }
}

/// Dominance between two oriented coordinates, where smaller is better on both axes.
#[inline]
pub(crate) fn dominates_oriented<N: IndexableNum>(a: (N, N), b: (N, N)) -> bool {
    a.0 <= b.0 && a.1 <= b.1 && (a.0 < b.0 || a.1 < b.1)
}

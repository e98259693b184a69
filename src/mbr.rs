//! Minimum bounding rectangles.

use geo_traits::{
    CoordTrait, GeometryTrait, GeometryType, RectTrait, UnimplementedGeometryCollection,
    UnimplementedLine, UnimplementedLineString, UnimplementedMultiLineString,
    UnimplementedMultiPoint, UnimplementedMultiPolygon, UnimplementedPoint, UnimplementedPolygon,
    UnimplementedTriangle,
};

use crate::r#type::IndexableNum;

/// An axis-aligned minimum bounding rectangle.
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mbr<N: IndexableNum> {
    min_x: N,
    min_y: N,
    max_x: N,
    max_y: N,
}

impl<N: IndexableNum> Mbr<N> {
    /// Create a new rectangle from its corners.
    pub fn new(min_x: N, min_y: N, max_x: N, max_y: N) -> Self {
        assert!(
            min_x <= max_x && min_y <= max_y,
            "Inverted bounding rectangle ({:?}, {:?}, {:?}, {:?})",
            min_x,
            min_y,
            max_x,
            max_y
        );
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The degenerate rectangle of a single coordinate.
    pub fn from_point(x: N, y: N) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// The tightest rectangle containing every rectangle of the iterator, or `None` when it is
    /// empty.
    pub fn bounding<'a>(mut mbrs: impl Iterator<Item = &'a Mbr<N>>) -> Option<Self> {
        let first = *mbrs.next()?;
        Some(mbrs.fold(first, |acc, mbr| acc.union(mbr)))
    }

    /// Get the minimum `x` value of this rectangle.
    pub fn min_x(&self) -> N {
        self.min_x
    }

    /// Get the minimum `y` value of this rectangle.
    pub fn min_y(&self) -> N {
        self.min_y
    }

    /// Get the maximum `x` value of this rectangle.
    pub fn max_x(&self) -> N {
        self.max_x
    }

    /// Get the maximum `y` value of this rectangle.
    pub fn max_y(&self) -> N {
        self.max_y
    }

    /// Componentwise union of two rectangles.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    #[inline]
    pub fn area(&self) -> N {
        (self.max_x - self.min_x) * (self.max_y - self.min_y)
    }

    /// The growth in area needed for this rectangle to also cover `other`.
    #[inline]
    pub fn enlargement(&self, other: &Self) -> N {
        self.union(other).area() - self.area()
    }

    /// Returns `true` if the coordinate lies inside or on the border of this rectangle.
    #[inline]
    pub fn contains(&self, x: N, y: N) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Returns `true` if this rectangle intersects another one.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.max_x < other.min_x {
            return false;
        }

        if self.max_y < other.min_y {
            return false;
        }

        if self.min_x > other.max_x {
            return false;
        }

        if self.min_y > other.max_y {
            return false;
        }

        true
    }

    /// Squared lower bound on the distance from `(x, y)` to any point inside this rectangle.
    #[inline]
    pub fn mindist_squared(&self, x: N, y: N) -> N {
        let dx = axis_dist(x, self.min_x, self.max_x);
        let dy = axis_dist(y, self.min_y, self.max_y);
        dx * dx + dy * dy
    }

    /// Lower bound on the Euclidean distance from `(x, y)` to any point inside this rectangle.
    ///
    /// This is `0` when the coordinate is inside the rectangle, and otherwise the distance to the
    /// nearest point of its boundary. It never exceeds [`Point::distance`][crate::Point::distance]
    /// for a contained point, including for zero-area rectangles.
    #[inline]
    pub fn mindist(&self, x: N, y: N) -> N {
        self.mindist_squared(x, y).sqrt()
    }
}

/// 1D distance from a value to a range.
#[inline]
pub(crate) fn axis_dist<N: IndexableNum>(k: N, min: N, max: N) -> N {
    if k < min {
        min - k
    } else if k <= max {
        N::zero()
    } else {
        k - max
    }
}

/// A single coordinate.
///
/// Used in the implementation of RectTrait for Mbr.
pub struct Coord<N: IndexableNum> {
    x: N,
    y: N,
}

impl<N: IndexableNum> CoordTrait for Coord<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

impl<N: IndexableNum> GeometryTrait for Mbr<N> {
    type T = N;
    type PointType<'a>
        = UnimplementedPoint<N>
    where
        Self: 'a;
    type LineStringType<'a>
        = UnimplementedLineString<N>
    where
        Self: 'a;
    type PolygonType<'a>
        = UnimplementedPolygon<N>
    where
        Self: 'a;
    type MultiPointType<'a>
        = UnimplementedMultiPoint<N>
    where
        Self: 'a;
    type MultiLineStringType<'a>
        = UnimplementedMultiLineString<N>
    where
        Self: 'a;
    type MultiPolygonType<'a>
        = UnimplementedMultiPolygon<N>
    where
        Self: 'a;
    type GeometryCollectionType<'a>
        = UnimplementedGeometryCollection<N>
    where
        Self: 'a;
    type RectType<'a>
        = Mbr<N>
    where
        Self: 'a;
    type TriangleType<'a>
        = UnimplementedTriangle<N>
    where
        Self: 'a;
    type LineType<'a>
        = UnimplementedLine<N>
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Self::PointType<'_>,
        Self::LineStringType<'_>,
        Self::PolygonType<'_>,
        Self::MultiPointType<'_>,
        Self::MultiLineStringType<'_>,
        Self::MultiPolygonType<'_>,
        Self::GeometryCollectionType<'_>,
        Self::RectType<'_>,
        Self::TriangleType<'_>,
        Self::LineType<'_>,
    > {
        GeometryType::Rect(self)
    }
}

impl<N: IndexableNum> RectTrait for Mbr<N> {
    type CoordType<'a>
        = Coord<N>
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        Coord {
            x: self.min_x,
            y: self.min_y,
        }
    }

    fn max(&self) -> Self::CoordType<'_> {
        Coord {
            x: self.max_x,
            y: self.max_y,
        }
    }
}

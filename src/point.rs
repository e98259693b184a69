use geo_traits::CoordTrait;

use crate::mbr::Mbr;
use crate::r#type::IndexableNum;

/// An immutable labelled 2-D point.
///
/// The id is an opaque label: duplicates of ids and of coordinates are both allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<N: IndexableNum, I = u64> {
    id: I,
    x: N,
    y: N,
}

impl<N: IndexableNum, I> Point<N, I> {
    /// Create a new point.
    pub fn new(id: I, x: N, y: N) -> Self {
        Self { id, x, y }
    }

    /// The label of this point.
    pub fn id(&self) -> &I {
        &self.id
    }

    /// The `x` coordinate.
    pub fn x(&self) -> N {
        self.x
    }

    /// The `y` coordinate.
    pub fn y(&self) -> N {
        self.y
    }

    /// The degenerate bounding rectangle of this point, with `min == max`.
    pub fn mbr(&self) -> Mbr<N> {
        Mbr::from_point(self.x, self.y)
    }

    /// Squared Euclidean distance to the given coordinate.
    #[inline]
    pub fn distance_squared(&self, x: N, y: N) -> N {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to the given coordinate.
    #[inline]
    pub fn distance(&self, x: N, y: N) -> N {
        self.distance_squared(x, y).sqrt()
    }
}

impl<N: IndexableNum, I> CoordTrait for Point<N, I> {
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

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn distance_to_coordinate() {
        let p = Point::new(20u64, 3.0f64, 4.0);
        assert_eq!(p.distance(0., 0.), 5.0);
        assert_eq!(p.distance_squared(0., 0.), 25.0);
        assert_eq!(p.distance(3., 4.), 0.0);
    }

    #[test]
    fn point_mbr_is_degenerate() {
        let mbr = Point::new("a", 1.5f32, -2.0).mbr();
        assert_eq!(mbr.min_x(), mbr.max_x());
        assert_eq!(mbr.min_y(), mbr.max_y());
        assert_eq!(mbr.area(), 0.0);
    }

    #[test]
    fn coord_trait_access() {
        let p = Point::new(1u64, 7.0f64, 8.0);
        assert_eq!(CoordTrait::nth_or_panic(&p, 0), 7.0);
        assert_eq!(CoordTrait::nth_or_panic(&p, 1), 8.0);
    }
}

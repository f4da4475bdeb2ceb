mod rect;

pub use rect::DetectionRect;

use geo_types::{Coord, Point};

/// Trait for types that can provide integer pixel coordinates.
///
/// Implemented for `(i32, i32)` tuples, `geo_types::Coord<i32>` and `geo_types::Point<i32>`.
/// This allows functions to accept any of them.
pub trait Coordinate {
    /// Returns the x-coordinate (pixel column, growing to the right).
    fn x(&self) -> i32;
    /// Returns the y-coordinate (pixel row, growing downward).
    fn y(&self) -> i32;
}

impl Coordinate for (i32, i32) {
    fn x(&self) -> i32 {
        self.0
    }
    fn y(&self) -> i32 {
        self.1
    }
}

impl Coordinate for Coord<i32> {
    fn x(&self) -> i32 {
        self.x
    }
    fn y(&self) -> i32 {
        self.y
    }
}

impl Coordinate for Point<i32> {
    fn x(&self) -> i32 {
        Point::x(*self)
    }
    fn y(&self) -> i32 {
        Point::y(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (100, 200);
        assert_eq!(tuple.x(), 100);
        assert_eq!(tuple.y(), 200);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(100, 200);
        assert_eq!(Coordinate::x(&point), 100);
        assert_eq!(Coordinate::y(&point), 200);
    }

    #[test]
    fn test_coordinate_trait_coord() {
        let coord = Coord { x: -3, y: 7 };
        assert_eq!(Coordinate::x(&coord), -3);
        assert_eq!(Coordinate::y(&coord), 7);
    }
}

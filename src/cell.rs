use crate::geom::{HexVertices, VertexRounding, hexagon_vertices, vertices_to_polygon};
use geo_types::{Coord, Polygon};

/// A single hexagon of the overlay tiling.
///
/// Each `Hexagon` knows its pixel center, its circumradius and where it sits in the
/// grid. It is immutable once built; whether it gets filled in a given frame is
/// decided by the caller from a selection query.
///
/// # Example
///
/// ```
/// use hexvisor::Hexagon;
///
/// let hexagon = Hexagon::new(103, 100, 40);
/// let vertices = hexagon.polygon();
/// assert_eq!(vertices.len(), 6);
/// assert_eq!((vertices[0].x, vertices[0].y), (143, 100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hexagon {
    /// Center in frame pixel coordinates
    pub center: Coord<i32>,
    /// Distance from the center to every vertex
    pub radius: u32,
    /// Column index in the grid
    pub col: u32,
    /// Row index in the grid
    pub row: u32,
}

impl Hexagon {
    /// Creates a free-standing hexagon. The caller guarantees `radius > 0`.
    pub fn new(center_x: i32, center_y: i32, radius: u32) -> Self {
        let center = Coord {
            x: center_x,
            y: center_y,
        };
        Self::at(center, radius, 0, 0)
    }

    pub(crate) fn at(center: Coord<i32>, radius: u32, col: u32, row: u32) -> Self {
        Self {
            center,
            radius,
            col,
            row,
        }
    }

    /// Horizontal pixel position of the center.
    pub fn center_x(&self) -> i32 {
        self.center.x
    }

    /// Vertical pixel position of the center, growing downward.
    pub fn center_y(&self) -> i32 {
        self.center.y
    }

    /// Returns the six vertices, rounded to the nearest pixel.
    pub fn polygon(&self) -> HexVertices {
        self.polygon_with(VertexRounding::default())
    }

    /// Returns the six vertices using the given rounding.
    pub fn polygon_with(&self, rounding: VertexRounding) -> HexVertices {
        hexagon_vertices(&self.center, self.radius, rounding)
    }

    /// Converts this hexagon to a closed `geo_types::Polygon`.
    ///
    /// Suitable for spatial predicates or GeoJSON/WKT export.
    pub fn to_polygon(&self, rounding: VertexRounding) -> Polygon<f64> {
        vertices_to_polygon(&self.polygon_with(rounding))
    }
}

use crate::coord::Coordinate;
use crate::index::constants::HEXAGON_SIDES;
use geo_types::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The six integer vertices of one hexagon, ordered by increasing angle from east.
pub type HexVertices = [Coord<i32>; HEXAGON_SIDES];

/// How a vertex offset `radius·cos θ` / `radius·sin θ` is turned into whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexRounding {
    /// Round to the nearest pixel
    #[default]
    Nearest,
    /// Truncate toward zero, pixel-identical to the legacy renderer
    Truncate,
}

impl VertexRounding {
    fn apply(self, offset: f64) -> i32 {
        match self {
            VertexRounding::Nearest => offset.round() as i32,
            VertexRounding::Truncate => offset as i32,
        }
    }
}

/// Computes the vertices of a hexagon centred on `center`.
///
/// Vertex `k` sits at angle `2πk/6`, so the first vertex is directly east of the
/// center and the rest follow at 60° steps. With y growing downward this walks the
/// outline clockwise on screen.
pub fn hexagon_vertices(
    center: &impl Coordinate,
    radius: u32,
    rounding: VertexRounding,
) -> HexVertices {
    let r = radius as f64;
    let mut vertices = [Coord { x: 0, y: 0 }; HEXAGON_SIDES];

    for (k, vertex) in vertices.iter_mut().enumerate() {
        let angle = 2.0 * PI * (k as f64 / HEXAGON_SIDES as f64);
        vertex.x = center.x().saturating_add(rounding.apply(r * angle.cos()));
        vertex.y = center.y().saturating_add(rounding.apply(r * angle.sin()));
    }

    vertices
}

/// Closes the vertex ring into a float polygon for geo operations and export.
pub fn vertices_to_polygon(vertices: &HexVertices) -> Polygon<f64> {
    let mut coords: Vec<Coord<f64>> = vertices
        .iter()
        .map(|v| Coord {
            x: v.x as f64,
            y: v.y as f64,
        })
        .collect();
    coords.push(coords[0]);

    Polygon::new(LineString::from(coords), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    #[test]
    fn test_hexagon_vertices_nearest() {
        let vertices = hexagon_vertices(&(103, 100), 40, VertexRounding::Nearest);

        assert_eq!(
            vertices,
            [
                Coord { x: 143, y: 100 },
                Coord { x: 123, y: 135 },
                Coord { x: 83, y: 135 },
                Coord { x: 63, y: 100 },
                Coord { x: 83, y: 65 },
                Coord { x: 123, y: 65 },
            ]
        );
    }

    #[test]
    fn test_first_vertex_points_east() {
        for rounding in [VertexRounding::Nearest, VertexRounding::Truncate] {
            let vertices = hexagon_vertices(&(0, 0), 25, rounding);
            assert_eq!(vertices[0], Coord { x: 25, y: 0 });
            assert_eq!(vertices[3], Coord { x: -25, y: 0 });
        }
    }

    #[test]
    fn test_truncation_never_moves_outward() {
        let nearest = hexagon_vertices(&(0, 0), 40, VertexRounding::Nearest);
        let truncated = hexagon_vertices(&(0, 0), 40, VertexRounding::Truncate);

        for (n, t) in nearest.iter().zip(truncated.iter()) {
            assert!(t.x.abs() <= n.x.abs());
            assert!(t.y.abs() <= n.y.abs());
            assert!((n.x - t.x).abs() <= 1);
            assert!((n.y - t.y).abs() <= 1);
        }
        assert_eq!(truncated[1].y, 34);
        assert_eq!(nearest[1].y, 35);
    }

    #[test]
    fn test_vertices_lie_on_circumcircle() {
        // truncation can pull a vertex in by up to √2 pixels
        for (rounding, tolerance) in [
            (VertexRounding::Nearest, 1.0),
            (VertexRounding::Truncate, 1.5),
        ] {
            for radius in 1..=120u32 {
                let center = (radius as i32 * 3, -(radius as i32));
                for v in hexagon_vertices(&center, radius, rounding) {
                    let dx = (v.x - center.0) as f64;
                    let dy = (v.y - center.1) as f64;
                    let distance = (dx * dx + dy * dy).sqrt();
                    assert!(
                        (distance - radius as f64).abs() <= tolerance,
                        "radius {} distance {}",
                        radius,
                        distance
                    );
                }
            }
        }
    }

    #[test]
    fn test_vertices_wind_in_angle_order() {
        let vertices = hexagon_vertices(&(0, 0), 40, VertexRounding::Nearest);

        // positive shoelace sum means counter-clockwise in math axes
        let twice_area: i64 = (0..HEXAGON_SIDES)
            .map(|i| {
                let a = vertices[i];
                let b = vertices[(i + 1) % HEXAGON_SIDES];
                a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
            })
            .sum();
        assert!(twice_area > 0);
    }

    #[test]
    fn test_vertices_to_polygon() {
        let vertices = hexagon_vertices(&(100, 100), 10, VertexRounding::Nearest);
        let polygon = vertices_to_polygon(&vertices);
        let exterior = polygon.exterior();

        assert_eq!(exterior.coords().count(), 7); // 6 vertices + 1 to close
        assert_eq!(exterior.0[0], exterior.0[6]);

        // regular hexagon area is 3√3/2·r², about 259.8 for r = 10
        let area = polygon.unsigned_area();
        assert!((area - 259.8).abs() < 15.0, "area {}", area);
    }

    #[test]
    fn test_vertices_near_i32_limits_saturate() {
        let vertices = hexagon_vertices(&(i32::MAX - 10, i32::MIN + 10), 40, VertexRounding::Nearest);

        assert_eq!(vertices[0], Coord { x: i32::MAX, y: i32::MIN + 10 });
        assert_eq!(vertices[3], Coord { x: i32::MAX - 50, y: i32::MIN + 10 });
        assert_eq!(vertices[4].y, i32::MIN);
    }

}

mod hexagon;

pub use hexagon::{HexVertices, VertexRounding, hexagon_vertices, vertices_to_polygon};

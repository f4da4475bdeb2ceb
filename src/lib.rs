//! # hexvisor
//!
//! Masks a detected region of a video frame with a fixed tiling of hexagons. The
//! capture, detector and renderer live outside this crate: it takes one detection rect
//! per frame and hands back the hexagon outlines to fill.
//!
//! ### 1. `HexGrid` - Build Once, Query Every Frame
//!
//! ```
//! use hexvisor::{DetectionRect, HexGrid};
//!
//! # fn main() -> Result<(), hexvisor::VisorError> {
//! let grid = HexGrid::from_canvas(800, 600, 40)?;
//!
//! let face = DetectionRect::new(100, 100, 200, 200);
//! for vertices in grid.select_in_rectangle(face) {
//!     // fill `vertices` on the frame buffer
//!     println!("{:?}", vertices);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `FrameMasker` - Per-Frame Driver
//!
//! ```
//! use hexvisor::{DetectionRect, FrameDetections, FrameMasker, VisorConfig};
//!
//! # fn main() -> Result<(), hexvisor::VisorError> {
//! let grid = VisorConfig::default().build_grid()?;
//! let masker = FrameMasker::new(&grid);
//!
//! let frames = vec![
//!     FrameDetections::new(0, vec![DetectionRect::from_xywh(120, 90, 160, 160)]),
//!     FrameDetections::new(1, vec![]),
//! ];
//! let masks = masker.mask_frames(&frames);
//! assert!(masks[1].is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Replaying Detections From Disk
//!
//! ```no_run
//! use hexvisor::{FrameMasker, GeometryFormat, MasksToGeoJson, VisorConfig};
//! use hexvisor::{read_detections, write_masks_csv};
//!
//! let grid = VisorConfig::default().build_grid().unwrap();
//! let frames = read_detections("detections.csv").unwrap();
//! let masks = FrameMasker::new(&grid).mask_frames(&frames);
//!
//! write_masks_csv(&masks, "masks.csv", Some(GeometryFormat::Wkt), grid.rounding()).unwrap();
//! masks.to_geojson_file("masks.geojson", grid.rounding()).unwrap();
//! ```
//!

pub mod cell;
pub mod config;
pub mod coord;
pub mod error;
pub mod frame;
pub mod geom;
pub mod grid;
pub mod index;
pub mod io;

pub use cell::Hexagon;
pub use config::VisorConfig;
pub use coord::{Coordinate, DetectionRect};
pub use error::VisorError;
pub use frame::{FrameDetections, FrameMask, FrameMasker};
pub use geom::{HexVertices, VertexRounding, hexagon_vertices, vertices_to_polygon};
pub use grid::{HexGrid, HexGridBuilder, SelectionPolicy};
pub use index::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_RADIUS, GridSpacing, HEXAGON_SIDES,
    MAX_RADIUS, canvas_dimensions, col_row_to_center, point_to_col_row,
};
pub use io::{
    GeometryFormat, MasksToGeoJson, read_detections, read_detections_from, write_masks_csv,
};

pub use geo_types;

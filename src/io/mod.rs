pub mod csv;
pub mod geojson;

pub use self::csv::{GeometryFormat, read_detections, read_detections_from, write_masks_csv};
pub use self::geojson::MasksToGeoJson;

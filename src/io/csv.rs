use crate::coord::DetectionRect;
use crate::error::VisorError;
use crate::frame::{FrameDetections, FrameMask};
use crate::geom::VertexRounding;
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Output format for hex polygon geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON geometry object, in frame pixels with y pointing down
    GeoJson,
}

/// One row of a detections file. Empty corner fields mark a frame with no detection.
#[derive(Debug, Deserialize)]
struct DetectionRecord {
    frame: u64,
    min_x: Option<i32>,
    min_y: Option<i32>,
    max_x: Option<i32>,
    max_y: Option<i32>,
}

impl DetectionRecord {
    /// All four corners give a detection, none gives an empty frame. Anything else is
    /// a malformed row.
    fn rect(&self) -> Result<Option<DetectionRect>, VisorError> {
        match (self.min_x, self.min_y, self.max_x, self.max_y) {
            (Some(min_x), Some(min_y), Some(max_x), Some(max_y)) => {
                Ok(Some(DetectionRect::new(min_x, min_y, max_x, max_y)))
            }
            (None, None, None, None) => Ok(None),
            _ => Err(VisorError::CsvError(format!(
                "frame {}: detection row needs all four corners or none",
                self.frame
            ))),
        }
    }
}

fn polygon_to_wkt(polygon: &geo_types::Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &geo_types::Polygon<f64>) -> String {
    let geom = geojson::Geometry::new(geojson::Value::from(polygon));
    geom.to_string()
}

/// Reads per-frame detections from a CSV file.
///
/// The file needs a `frame,min_x,min_y,max_x,max_y` header. Rows sharing a frame number
/// are grouped in the order they appear, so the first row of a frame is its highest
/// priority detection.
///
/// # Example
///
/// ```no_run
/// use hexvisor::read_detections;
///
/// let frames = read_detections("detections.csv").unwrap();
/// for detections in &frames {
///     println!("frame {}: {} rects", detections.frame, detections.rects.len());
/// }
/// ```
pub fn read_detections(path: impl AsRef<Path>) -> Result<Vec<FrameDetections>, VisorError> {
    let path = path.as_ref();
    debug!("reading detections from {}", path.display());

    let file = File::open(path).map_err(|e| VisorError::IoError(e.to_string()))?;
    read_detections_from(file)
}

pub fn read_detections_from<R: Read>(reader: R) -> Result<Vec<FrameDetections>, VisorError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut frames: Vec<FrameDetections> = Vec::new();
    let mut positions: HashMap<u64, usize> = HashMap::new();

    for result in reader.deserialize() {
        let record: DetectionRecord = result.map_err(|e| VisorError::CsvError(e.to_string()))?;

        let idx = *positions.entry(record.frame).or_insert_with(|| {
            frames.push(FrameDetections::new(record.frame, Vec::new()));
            frames.len() - 1
        });

        if let Some(rect) = record.rect()? {
            frames[idx].rects.push(rect);
        }
    }

    Ok(frames)
}

/// Writes one CSV row per filled hexagon.
///
/// Columns are `frame,col,row,center_x,center_y`, plus `hex_geometry` when a geometry
/// format is given.
pub fn write_masks_csv(
    masks: &[FrameMask],
    output_path: impl AsRef<Path>,
    include_hex_geometry: Option<GeometryFormat>,
    rounding: VertexRounding,
) -> Result<(), VisorError> {
    let output_path = output_path.as_ref();
    debug!(
        "writing {} frame masks to {}",
        masks.len(),
        output_path.display()
    );

    let out_file = File::create(output_path).map_err(|e| VisorError::IoError(e.to_string()))?;
    write_masks_to(masks, out_file, include_hex_geometry, rounding)
}

fn write_masks_to<W: Write>(
    masks: &[FrameMask],
    out: W,
    include_hex_geometry: Option<GeometryFormat>,
    rounding: VertexRounding,
) -> Result<(), VisorError> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header_row = vec!["frame", "col", "row", "center_x", "center_y"];
    if include_hex_geometry.is_some() {
        header_row.push("hex_geometry");
    }
    writer
        .write_record(&header_row)
        .map_err(|e| VisorError::CsvError(e.to_string()))?;

    for mask in masks {
        for hexagon in &mask.hexagons {
            let mut row: Vec<String> = vec![
                mask.frame.to_string(),
                hexagon.col.to_string(),
                hexagon.row.to_string(),
                hexagon.center_x().to_string(),
                hexagon.center_y().to_string(),
            ];

            if let Some(format) = include_hex_geometry {
                let polygon = hexagon.to_polygon(rounding);
                let geom_str = match format {
                    GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                    GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
                };
                row.push(geom_str);
            }

            writer
                .write_record(&row)
                .map_err(|e| VisorError::CsvError(e.to_string()))?;
        }
    }

    writer
        .flush()
        .map_err(|e| VisorError::CsvError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameMasker;
    use crate::grid::HexGrid;
    use tempfile::tempdir;

    #[test]
    fn test_read_detections_groups_frames() -> Result<(), VisorError> {
        let data = "\
frame,min_x,min_y,max_x,max_y
0,100,100,200,200
1,10,10,50,50
0,400,300,500,400
2,,,,
";
        let frames = read_detections_from(data.as_bytes())?;

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].frame, 0);
        assert_eq!(
            frames[0].rects,
            vec![
                DetectionRect::new(100, 100, 200, 200),
                DetectionRect::new(400, 300, 500, 400),
            ]
        );
        assert_eq!(frames[1].rects, vec![DetectionRect::new(10, 10, 50, 50)]);
        assert_eq!(frames[2].frame, 2);
        assert!(frames[2].rects.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_detections_with_spaces() -> Result<(), VisorError> {
        let data = "frame, min_x, min_y, max_x, max_y\n 4, -5, 0, 20, 30\n";
        let frames = read_detections_from(data.as_bytes())?;

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].rects, vec![DetectionRect::new(-5, 0, 20, 30)]);
        Ok(())
    }

    #[test]
    fn test_read_detections_invalid_row() {
        let data = "frame,min_x,min_y,max_x,max_y\nzero,1,2,3,4\n";
        let result = read_detections_from(data.as_bytes());

        assert!(matches!(result, Err(VisorError::CsvError(_))));
    }

    #[test]
    fn test_read_detections_partial_corners() {
        for row in ["0,100,100,200,", "3,,100,200,200", "7,100,,,"] {
            let data = format!("frame,min_x,min_y,max_x,max_y\n{}\n", row);
            let result = read_detections_from(data.as_bytes());

            let Err(VisorError::CsvError(msg)) = result else {
                panic!("expected a csv error for {:?}, got {:?}", row, result);
            };
            let frame = row.split(',').next().unwrap_or_default();
            assert!(msg.contains(&format!("frame {}", frame)), "{}", msg);
        }
    }

    #[test]
    fn test_read_detections_missing_file() {
        let result = read_detections("/definitely/not/here.csv");
        assert!(matches!(result, Err(VisorError::IoError(_))));
    }

    #[test]
    fn test_write_masks_csv() -> Result<(), VisorError> {
        let dir = tempdir().map_err(|e| VisorError::IoError(e.to_string()))?;
        let output_path = dir.path().join("masks.csv");

        let grid = HexGrid::new(20, 15, 40);
        let masks = vec![
            FrameMasker::new(&grid).mask(0, &[DetectionRect::new(100, 100, 200, 200)]),
            FrameMasker::new(&grid).mask(1, &[]),
        ];
        write_masks_csv(&masks, &output_path, None, VertexRounding::Nearest)?;

        let output =
            std::fs::read_to_string(&output_path).map_err(|e| VisorError::IoError(e.to_string()))?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "frame,col,row,center_x,center_y",
                "0,1,1,103,100",
                "0,2,1,172,100",
                "0,1,2,138,160",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_write_masks_csv_with_wkt() -> Result<(), VisorError> {
        let dir = tempdir().map_err(|e| VisorError::IoError(e.to_string()))?;
        let output_path = dir.path().join("masks.csv");

        let grid = HexGrid::new(20, 15, 40);
        let rect = DetectionRect::new(103, 100, 103, 100);
        let masks = vec![FrameMasker::new(&grid).mask(0, &[rect])];
        write_masks_csv(
            &masks,
            &output_path,
            Some(GeometryFormat::Wkt),
            VertexRounding::Nearest,
        )?;

        let output =
            std::fs::read_to_string(&output_path).map_err(|e| VisorError::IoError(e.to_string()))?;
        assert!(output.starts_with("frame,col,row,center_x,center_y,hex_geometry"));
        assert!(output.contains("POLYGON"));
        assert!(output.contains("143 100"));
        Ok(())
    }

    #[test]
    fn test_write_masks_csv_with_geojson() -> Result<(), VisorError> {
        let grid = HexGrid::new(20, 15, 40);
        let rect = DetectionRect::new(103, 100, 103, 100);
        let masks = vec![FrameMasker::new(&grid).mask(0, &[rect])];

        let mut buffer = Vec::new();
        write_masks_to(
            &masks,
            &mut buffer,
            Some(GeometryFormat::GeoJson),
            VertexRounding::Nearest,
        )?;

        let output = String::from_utf8(buffer).map_err(|e| VisorError::IoError(e.to_string()))?;
        assert!(output.contains("Polygon"));
        assert!(output.contains("coordinates"));
        Ok(())
    }
}

use crate::error::VisorError;
use crate::frame::FrameMask;
use crate::geom::VertexRounding;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use log::debug;
use std::path::Path;

/// Trait for converting collections of [`FrameMask`]s to GeoJSON.
///
/// Coordinates are frame pixels with the origin at the top-left corner and y pointing
/// down, not WGS84 longitude/latitude. GIS tools will place the features near null
/// island; load them into a pixel-space viewer or flip y before overlaying.
///
/// Implemented for `[FrameMask]` and, through deref, `Vec<FrameMask>`.
pub trait MasksToGeoJson {
    /// One Feature per filled hexagon, tagged with `frame`, `col` and `row` properties.
    fn to_feature_collection(&self, rounding: VertexRounding) -> FeatureCollection;
    /// Writes the feature collection to a `.geojson` file.
    fn to_geojson_file(
        &self,
        path: impl AsRef<Path>,
        rounding: VertexRounding,
    ) -> Result<(), VisorError>;
}

impl MasksToGeoJson for [FrameMask] {
    fn to_feature_collection(&self, rounding: VertexRounding) -> FeatureCollection {
        let features: Vec<Feature> = self
            .iter()
            .flat_map(|mask| {
                mask.hexagons.iter().map(move |hexagon| {
                    let polygon = hexagon.to_polygon(rounding);

                    let mut properties = JsonObject::new();
                    properties.insert("frame".to_string(), JsonValue::from(mask.frame));
                    properties.insert("col".to_string(), JsonValue::from(hexagon.col));
                    properties.insert("row".to_string(), JsonValue::from(hexagon.row));

                    Feature {
                        bbox: None,
                        geometry: Some(Geometry::new(Value::from(&polygon))),
                        id: None,
                        properties: Some(properties),
                        foreign_members: None,
                    }
                })
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    fn to_geojson_file(
        &self,
        path: impl AsRef<Path>,
        rounding: VertexRounding,
    ) -> Result<(), VisorError> {
        let path = path.as_ref();
        let collection = self.to_feature_collection(rounding);
        debug!(
            "writing {} hexagon features to {}",
            collection.features.len(),
            path.display()
        );

        std::fs::write(path, collection.to_string()).map_err(|e| VisorError::IoError(e.to_string()))
    }
}

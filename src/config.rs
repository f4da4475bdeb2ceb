use crate::error::VisorError;
use crate::geom::VertexRounding;
use crate::grid::{HexGrid, SelectionPolicy};
use crate::index::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_RADIUS, canvas_dimensions,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Startup settings for a masking session.
///
/// Every field is optional in JSON; missing ones fall back to an 800×600 canvas
/// tiled with radius-40 hexagons.
///
/// # Example
/// ```
/// use hexvisor::{SelectionPolicy, VertexRounding, VisorConfig};
///
/// # fn main() -> Result<(), hexvisor::VisorError> {
/// let config = VisorConfig::new(1280, 720, 32)
///     .rounding(VertexRounding::Truncate)
///     .selection(SelectionPolicy::Overlap);
///
/// let grid = config.build_grid()?;
/// assert_eq!((grid.columns(), grid.rows()), (40, 22));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisorConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub radius: u32,
    pub rounding: VertexRounding,
    pub selection: SelectionPolicy,
}

impl Default for VisorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, DEFAULT_RADIUS)
    }
}

impl VisorConfig {
    pub fn new(canvas_width: u32, canvas_height: u32, radius: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            radius,
            rounding: VertexRounding::default(),
            selection: SelectionPolicy::default(),
        }
    }

    pub fn rounding(mut self, rounding: VertexRounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, VisorError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| VisorError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, VisorError> {
        let path = path.as_ref();
        debug!("loading config from {}", path.display());

        let json = std::fs::read_to_string(path).map_err(|e| VisorError::IoError(e.to_string()))?;
        Self::from_json_str(&json)
    }

    /// Checks that the canvas holds at least one full hexagon.
    pub fn validate(&self) -> Result<(), VisorError> {
        let (columns, rows) = canvas_dimensions(self.canvas_width, self.canvas_height, self.radius)?;
        if columns == 0 || rows == 0 {
            return Err(VisorError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        Ok(())
    }

    /// Returns `(columns, rows)` for the configured canvas.
    pub fn grid_dimensions(&self) -> Result<(u32, u32), VisorError> {
        canvas_dimensions(self.canvas_width, self.canvas_height, self.radius)
    }

    pub fn build_grid(&self) -> Result<HexGrid, VisorError> {
        self.validate()?;

        HexGrid::builder()
            .canvas(self.canvas_width, self.canvas_height)
            .radius(self.radius)
            .rounding(self.rounding)
            .build()
    }
}

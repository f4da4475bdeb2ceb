use crate::cell::Hexagon;
use crate::coord::{Coordinate, DetectionRect};
use crate::error::VisorError;
use crate::geom::{HexVertices, VertexRounding};
use crate::index::{
    GridSpacing, MAX_RADIUS, canvas_dimensions, col_row_to_center, point_to_col_row,
};
use geo::Intersects;
use geo_types::Polygon;
use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Decides which hexagons a detection rect selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// The hexagon center lies inside the rect, bounds inclusive
    #[default]
    CenterInside,
    /// Any part of the hexagon outline touches the rect
    Overlap,
}

/// A fixed tiling of hexagons over a canvas.
///
/// The geometry is computed once at construction and never changes. Rows are
/// `trunc(3r/2)` pixels apart, neighbours in a row `trunc(r·√3)` apart, and every
/// other row is shifted by half a step so the rows interlock.
///
/// # Example
///
/// ```
/// use hexvisor::{DetectionRect, HexGrid};
///
/// # fn main() -> Result<(), hexvisor::VisorError> {
/// let grid = HexGrid::from_canvas(800, 600, 40)?;
/// assert_eq!(grid.len(), 300);
///
/// let face = DetectionRect::new(100, 100, 200, 200);
/// for vertices in grid.select_in_rectangle(face) {
///     assert_eq!(vertices.len(), 6);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HexGrid {
    cells: Vec<Hexagon>,
    columns: u32,
    rows: u32,
    radius: u32,
    spacing: GridSpacing,
    rounding: VertexRounding,
}

impl HexGrid {
    /// Starts a [`HexGridBuilder`].
    pub fn builder() -> HexGridBuilder {
        HexGridBuilder::new()
    }

    /// Builds a `columns × rows` grid. The caller guarantees `radius > 0`.
    pub fn new(columns: u32, rows: u32, radius: u32) -> Self {
        Self::with_rounding(columns, rows, radius, VertexRounding::default())
    }

    /// Builds a `columns × rows` grid whose vertices use `rounding`.
    pub fn with_rounding(columns: u32, rows: u32, radius: u32, rounding: VertexRounding) -> Self {
        let spacing = GridSpacing::for_radius(radius);
        let cells = generate_cells(columns, rows, radius, &spacing);

        debug!(
            "built hex grid: {}x{} cells, radius {}, column step {}, row step {}",
            columns, rows, radius, spacing.column_step, spacing.row_step
        );

        Self {
            cells,
            columns,
            rows,
            radius,
            spacing,
            rounding,
        }
    }

    /// Builds the grid covering a `width × height` canvas, one column per `radius`
    /// pixels of width and one row per `radius` pixels of height.
    pub fn from_canvas(width: u32, height: u32, radius: u32) -> Result<Self, VisorError> {
        let (columns, rows) = canvas_dimensions(width, height, radius)?;
        Ok(Self::new(columns, rows, radius))
    }

    /// Number of hexagons per row.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Circumradius shared by every hexagon.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Pixel steps the centers were laid out with.
    pub fn spacing(&self) -> &GridSpacing {
        &self.spacing
    }

    /// Rounding applied to every vertex this grid produces.
    pub fn rounding(&self) -> VertexRounding {
        self.rounding
    }

    /// Total number of hexagons, `columns × rows`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the grid has no columns or no rows.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All hexagons in storage order (`index = col·rows + row`).
    pub fn cells(&self) -> &[Hexagon] {
        &self.cells
    }

    /// Iterates hexagons in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Hexagon> {
        self.cells.iter()
    }

    /// All hexagons row by row, left to right within each row.
    ///
    /// This is the order every selection query reports in.
    pub fn iter_row_major(&self) -> impl Iterator<Item = &Hexagon> {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |col| &self.cells[self.index(col, row)])
        })
    }

    /// Hexagon at `(col, row)`, `None` when out of range.
    pub fn get(&self, col: u32, row: u32) -> Option<&Hexagon> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(self.index(col, row))
    }

    /// Inclusive bounding rect of every hexagon center, `None` for an empty grid.
    pub fn extent(&self) -> Option<DetectionRect> {
        let first = self.cells.first()?;
        let init = DetectionRect {
            min: first.center,
            max: first.center,
        };

        Some(self.cells.iter().fold(init, |acc, cell| {
            DetectionRect::new(
                acc.min.x.min(cell.center.x),
                acc.min.y.min(cell.center.y),
                acc.max.x.max(cell.center.x),
                acc.max.y.max(cell.center.y),
            )
        }))
    }

    /// Returns the hexagon whose center is closest to `point`, provided the point is
    /// within one radius of it.
    pub fn get_cell_at(&self, point: &impl Coordinate) -> Option<&Hexagon> {
        let (col, row) = point_to_col_row(point, &self.spacing);

        let mut best: Option<(&Hexagon, i64)> = None;
        for r in row - 1..=row + 1 {
            for c in col - 1..=col + 1 {
                let Some(cell) = self.get_signed(c, r) else {
                    continue;
                };
                let dx = cell.center.x as i64 - point.x() as i64;
                let dy = cell.center.y as i64 - point.y() as i64;
                let distance = dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy));
                if best.is_none_or(|(_, d)| distance < d) {
                    best = Some((cell, distance));
                }
            }
        }

        let radius = self.radius as i64;
        best.filter(|(_, d)| *d <= radius * radius)
            .map(|(cell, _)| cell)
    }

    /// Hexagons whose center lies inside `rect`, bounds inclusive, in row-major order.
    ///
    /// An inverted rect selects nothing. A zero-area rect selects only a hexagon
    /// whose center sits exactly on it.
    pub fn cells_in_rectangle(&self, rect: DetectionRect) -> impl Iterator<Item = &Hexagon> {
        self.cells_with(rect, SelectionPolicy::CenterInside)
    }

    /// Vertices of every hexagon whose center lies inside `rect`.
    ///
    /// The iterator is lazy and borrows the grid; the grid itself is never modified,
    /// so repeated queries with the same rect yield identical output.
    pub fn select_in_rectangle(&self, rect: DetectionRect) -> impl Iterator<Item = HexVertices> {
        self.select_with(rect, SelectionPolicy::CenterInside)
    }

    /// Hexagons selected by `rect` under `policy`, in row-major order.
    pub fn cells_with(
        &self,
        rect: DetectionRect,
        policy: SelectionPolicy,
    ) -> impl Iterator<Item = &Hexagon> {
        trace!("selecting {:?} with {:?}", rect, policy);

        let bounds = rect.to_rect();
        let rounding = self.rounding;
        self.iter_row_major().filter(move |cell| match policy {
            SelectionPolicy::CenterInside => rect.contains(&cell.center),
            SelectionPolicy::Overlap => {
                bounds.is_some_and(|b| cell.to_polygon(rounding).intersects(&b))
            }
        })
    }

    /// Vertices of the hexagons selected by `rect` under `policy`.
    pub fn select_with(
        &self,
        rect: DetectionRect,
        policy: SelectionPolicy,
    ) -> impl Iterator<Item = HexVertices> {
        let rounding = self.rounding;
        self.cells_with(rect, policy)
            .map(move |cell| cell.polygon_with(rounding))
    }

    /// Every hexagon as a closed `geo_types::Polygon`, in storage order.
    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        let rounding = self.rounding;
        self.cells
            .par_iter()
            .map(|cell| cell.to_polygon(rounding))
            .collect()
    }

    /// Hexagons matching `predicate`, in storage order.
    pub fn filter<F>(&self, predicate: F) -> Vec<&Hexagon>
    where
        F: Fn(&Hexagon) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }

    fn index(&self, col: u32, row: u32) -> usize {
        col as usize * self.rows as usize + row as usize
    }

    fn get_signed(&self, col: i64, row: i64) -> Option<&Hexagon> {
        let col = u32::try_from(col).ok()?;
        let row = u32::try_from(row).ok()?;
        self.get(col, row)
    }
}

/// Builder for [`HexGrid`].
#[derive(Debug, Default)]
pub struct HexGridBuilder {
    radius: Option<u32>,
    dimensions: Option<(u32, u32)>,
    canvas: Option<(u32, u32)>,
    rounding: VertexRounding,
}

impl HexGridBuilder {
    /// Creates an empty builder with nearest-pixel rounding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hexagon circumradius. Required.
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sets the column and row count directly. Takes precedence over `canvas`.
    pub fn dimensions(mut self, columns: u32, rows: u32) -> Self {
        self.dimensions = Some((columns, rows));
        self
    }

    /// Derives the column and row count from a canvas size.
    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas = Some((width, height));
        self
    }

    /// Sets how vertices are rounded to pixels.
    pub fn rounding(mut self, rounding: VertexRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builds the grid, failing on a missing or out-of-range radius or missing size.
    pub fn build(self) -> Result<HexGrid, VisorError> {
        let radius = self
            .radius
            .ok_or_else(|| VisorError::ConfigError("radius must be set".to_string()))?;
        if radius == 0 || radius > MAX_RADIUS {
            return Err(VisorError::InvalidRadius(radius));
        }

        let (columns, rows) = match (self.dimensions, self.canvas) {
            (Some(dimensions), _) => dimensions,
            (None, Some((width, height))) => canvas_dimensions(width, height, radius)?,
            (None, None) => {
                return Err(VisorError::ConfigError(
                    "either dimensions or canvas must be set".to_string(),
                ));
            }
        };

        Ok(HexGrid::with_rounding(columns, rows, radius, self.rounding))
    }
}

fn generate_cells(columns: u32, rows: u32, radius: u32, spacing: &GridSpacing) -> Vec<Hexagon> {
    let mut cells = Vec::with_capacity(columns as usize * rows as usize);

    for col in 0..columns {
        for row in 0..rows {
            let center = col_row_to_center(col, row, spacing);
            cells.push(Hexagon::at(center, radius, col, row));
        }
    }

    cells
}

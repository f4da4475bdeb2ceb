use crate::coord::Coordinate;
use crate::error::VisorError;
use crate::index::constants::{MAX_RADIUS, SQRT_3};
use geo_types::Coord;

/// Integer pixel steps between neighbouring hexagon centers for one radius.
///
/// Every value is truncated from its float formula, so a grid built from the same
/// radius always lands on the same pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpacing {
    /// Horizontal distance between neighbours in the same row, `trunc(r·√3)`
    pub column_step: i32,
    /// Vertical distance between consecutive rows, `trunc(3r/2)`
    pub row_step: i32,
    /// Vertical position of row 0, `r`
    pub first_row_y: i32,
    /// Horizontal position of column 0 on even rows, `trunc(r·√3)`
    pub even_row_start: i32,
    /// Horizontal position of column 0 on odd rows, `trunc(r·√3/2)`
    pub odd_row_start: i32,
}

impl GridSpacing {
    /// Spacing for `radius`. Radii above [`MAX_RADIUS`] saturate at `i32::MAX` rather
    /// than wrapping.
    pub fn for_radius(radius: u32) -> Self {
        let r = radius as f64;
        let column_step = (r * SQRT_3) as i32;

        Self {
            column_step,
            row_step: saturate(radius as i64 * 3 / 2),
            first_row_y: saturate(radius as i64),
            even_row_start: column_step,
            odd_row_start: (r * SQRT_3 / 2.0) as i32,
        }
    }

    /// Horizontal position of column 0 for the given row.
    pub fn row_start(&self, row: i64) -> i32 {
        if row.rem_euclid(2) == 0 {
            self.even_row_start
        } else {
            self.odd_row_start
        }
    }

    /// Horizontal shift between an even row and the odd row below it.
    pub fn row_offset(&self) -> i32 {
        self.even_row_start - self.odd_row_start
    }
}

/// Clamps a widened pixel value back into `i32`.
pub(crate) fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Converts grid column/row indices to the pixel center of that hexagon.
pub fn col_row_to_center(col: u32, row: u32, spacing: &GridSpacing) -> Coord<i32> {
    let x = spacing.row_start(row as i64) as i64 + col as i64 * spacing.column_step as i64;
    let y = spacing.first_row_y as i64 + row as i64 * spacing.row_step as i64;

    Coord {
        x: saturate(x),
        y: saturate(y),
    }
}

/// Converts a pixel position to the nearest logical `(col, row)`.
///
/// The result is not bounded by any grid, negative or oversized indices are returned
/// as-is for the caller to check. Every `i32` point is accepted.
pub fn point_to_col_row<C: Coordinate>(coord: &C, spacing: &GridSpacing) -> (i64, i64) {
    let row_step = spacing.row_step.max(1) as f64;
    let column_step = spacing.column_step.max(1) as f64;

    let ry = (coord.y() as i64 - spacing.first_row_y as i64) as f64 / row_step;
    let row = ry.round() as i64;

    let qx = (coord.x() as i64 - spacing.row_start(row) as i64) as f64 / column_step;
    let col = qx.round() as i64;

    (col, row)
}

/// Derives `(columns, rows)` for a canvas as `(floor(width / r), floor(height / r))`.
///
/// Fails with [`VisorError::InvalidRadius`] for a zero radius or one above [`MAX_RADIUS`].
pub fn canvas_dimensions(width: u32, height: u32, radius: u32) -> Result<(u32, u32), VisorError> {
    if radius == 0 || radius > MAX_RADIUS {
        return Err(VisorError::InvalidRadius(radius));
    }

    Ok((width / radius, height / radius))
}

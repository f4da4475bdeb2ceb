pub mod constants;
mod layout;

pub use constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_RADIUS, HEXAGON_SIDES, MAX_RADIUS,
    SQRT_3,
};
pub use layout::{GridSpacing, canvas_dimensions, col_row_to_center, point_to_col_row};

/// √3, the ratio between a hexagon's across-flats width and its circumradius.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Number of vertices in a hexagon
pub const HEXAGON_SIDES: usize = 6;

/// Canvas width used when no configuration is supplied
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;

/// Canvas height used when no configuration is supplied
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Hexagon circumradius used when no configuration is supplied
pub const DEFAULT_RADIUS: u32 = 40;

/// Largest radius accepted by the fallible constructors. Beyond it the pixel
/// arithmetic saturates at the `i32` limits instead of producing a usable grid.
pub const MAX_RADIUS: u32 = 1 << 24;

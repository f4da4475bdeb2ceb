/// Error type for hexvisor operations.
#[derive(Debug, PartialEq)]
pub enum VisorError {
    /// The hexagon radius must be greater than zero.
    InvalidRadius(u32),
    /// The canvas is too small to hold a single hexagon at the given radius.
    InvalidCanvas { width: u32, height: u32 },
    /// A configuration value could not be parsed or failed validation.
    ConfigError(String),
    /// File I/O error.
    IoError(String),
    /// CSV parsing, reading or writing error.
    CsvError(String),
    /// Failed to build or serialize output geometry.
    GeometryError(String),
}

impl std::fmt::Display for VisorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisorError::InvalidRadius(r) => write!(f, "Invalid radius: {}", r),
            VisorError::InvalidCanvas { width, height } => {
                write!(f, "Invalid canvas: {}x{}", width, height)
            }
            VisorError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            VisorError::IoError(msg) => write!(f, "IO error: {}", msg),
            VisorError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            VisorError::GeometryError(msg) => write!(f, "Geometry error: {}", msg),
        }
    }
}

impl std::error::Error for VisorError {}

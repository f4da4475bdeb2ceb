use crate::coord::Coordinate;
use geo_types::{Coord, Rect};

/// An axis-aligned detection region in frame pixel coordinates.
///
/// Both corners are inclusive. Unlike `geo_types::Rect` the corners are never
/// re-ordered: a rect whose `min` exceeds `max` on either axis is kept as given and
/// contains no point at all.
///
/// # Example
///
/// ```
/// use hexvisor::DetectionRect;
///
/// let rect = DetectionRect::new(100, 100, 200, 200);
/// assert!(rect.contains(&(100, 200)));
/// assert!(!rect.contains(&(201, 150)));
///
/// let inverted = DetectionRect::new(200, 200, 100, 100);
/// assert!(inverted.is_inverted());
/// assert!(!inverted.contains(&(150, 150)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetectionRect {
    pub min: Coord<i32>,
    pub max: Coord<i32>,
}

impl DetectionRect {
    /// Builds a rect from its two corners, kept exactly as given.
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min: Coord { x: min_x, y: min_y },
            max: Coord { x: max_x, y: max_y },
        }
    }

    /// Builds a rect from any two [`Coordinate`]s.
    pub fn from_corners(min: &impl Coordinate, max: &impl Coordinate) -> Self {
        Self::new(min.x(), min.y(), max.x(), max.y())
    }

    /// Builds a rect from an origin and a size, the way object detectors report boxes.
    ///
    /// The far corner is `origin + size` and stays inclusive.
    pub fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// Inclusive containment on both axes.
    pub fn contains(&self, point: &impl Coordinate) -> bool {
        self.min.x <= point.x()
            && point.x() <= self.max.x
            && self.min.y <= point.y()
            && point.y() <= self.max.y
    }

    /// True when `min` exceeds `max` on either axis.
    pub fn is_inverted(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// `max.x - min.x`, negative for a rect inverted on x.
    pub fn width(&self) -> i64 {
        self.max.x as i64 - self.min.x as i64
    }

    /// `max.y - min.y`, negative for a rect inverted on y.
    pub fn height(&self) -> i64 {
        self.max.y as i64 - self.min.y as i64
    }

    /// Converts to a float `geo_types::Rect`, or `None` for an inverted rect.
    pub fn to_rect(&self) -> Option<Rect<f64>> {
        if self.is_inverted() {
            return None;
        }

        Some(Rect::new(
            Coord {
                x: self.min.x as f64,
                y: self.min.y as f64,
            },
            Coord {
                x: self.max.x as f64,
                y: self.max.y as f64,
            },
        ))
    }
}

impl From<Rect<i32>> for DetectionRect {
    fn from(rect: Rect<i32>) -> Self {
        Self {
            min: rect.min(),
            max: rect.max(),
        }
    }
}

use crate::cell::Hexagon;
use crate::coord::DetectionRect;
use crate::geom::{HexVertices, VertexRounding};
use crate::grid::{HexGrid, SelectionPolicy};
use log::trace;
use rayon::prelude::*;
use std::collections::HashSet;

/// Detections an upstream detector reported for one frame, most confident first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDetections {
    pub frame: u64,
    pub rects: Vec<DetectionRect>,
}

impl FrameDetections {
    pub fn new(frame: u64, rects: Vec<DetectionRect>) -> Self {
        Self { frame, rects }
    }
}

/// The hexagons to fill on one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameMask {
    pub frame: u64,
    /// The rect the mask was selected from, `None` when nothing was detected
    pub detection: Option<DetectionRect>,
    pub hexagons: Vec<Hexagon>,
}

impl FrameMask {
    pub fn len(&self) -> usize {
        self.hexagons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexagons.is_empty()
    }

    pub fn polygons(&self, rounding: VertexRounding) -> Vec<HexVertices> {
        self.hexagons
            .iter()
            .map(|hexagon| hexagon.polygon_with(rounding))
            .collect()
    }
}

/// Turns per-frame detections into masks against a shared, read-only grid.
///
/// # Example
///
/// ```
/// use hexvisor::{DetectionRect, FrameMasker, HexGrid};
///
/// # fn main() -> Result<(), hexvisor::VisorError> {
/// let grid = HexGrid::from_canvas(800, 600, 40)?;
/// let masker = FrameMasker::new(&grid);
///
/// let mask = masker.mask(0, &[DetectionRect::new(100, 100, 200, 200)]);
/// assert_eq!(mask.len(), 3);
///
/// let nothing = masker.mask(1, &[]);
/// assert!(nothing.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FrameMasker<'g> {
    grid: &'g HexGrid,
    policy: SelectionPolicy,
}

impl<'g> FrameMasker<'g> {
    pub fn new(grid: &'g HexGrid) -> Self {
        Self {
            grid,
            policy: SelectionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn grid(&self) -> &'g HexGrid {
        self.grid
    }

    /// Masks the first (highest priority) detection and ignores the rest.
    pub fn mask(&self, frame: u64, rects: &[DetectionRect]) -> FrameMask {
        let detection = rects.first().copied();
        let hexagons = match detection {
            Some(rect) => self.grid.cells_with(rect, self.policy).copied().collect(),
            None => Vec::new(),
        };

        trace!("frame {}: {} hexagons to fill", frame, hexagons.len());

        FrameMask {
            frame,
            detection,
            hexagons,
        }
    }

    /// Masks every detection of the frame, filling each hexagon once.
    ///
    /// Output keeps the grid's row-major order.
    pub fn mask_each(&self, frame: u64, rects: &[DetectionRect]) -> FrameMask {
        let mut selected: HashSet<(u32, u32)> = HashSet::new();
        for rect in rects {
            for cell in self.grid.cells_with(*rect, self.policy) {
                selected.insert((cell.col, cell.row));
            }
        }

        let hexagons: Vec<Hexagon> = self
            .grid
            .iter_row_major()
            .filter(|cell| selected.contains(&(cell.col, cell.row)))
            .copied()
            .collect();

        trace!(
            "frame {}: {} hexagons to fill from {} detections",
            frame,
            hexagons.len(),
            rects.len()
        );

        FrameMask {
            frame,
            detection: rects.first().copied(),
            hexagons,
        }
    }

    /// Masks a batch of frames in parallel. Output order matches input order.
    pub fn mask_frames(&self, frames: &[FrameDetections]) -> Vec<FrameMask> {
        frames
            .par_iter()
            .map(|detections| self.mask(detections.frame, &detections.rects))
            .collect()
    }
}

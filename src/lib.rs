#![doc = include_str!("../README.md")]

pub mod cells;
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod lines;
pub mod sampler;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{read_image_grid, GridReader, ReaderParams};
pub use crate::diagnostics::{DetectionReport, PipelineTrace};
pub use crate::error::{GridError, Result};
pub use crate::types::CellGrid;

/// Small prelude for quick experiments.
///
/// ```
/// use grid_reader::prelude::*;
///
/// let line = Rgb::gray(235);
/// let mut m = PixelMatrix::filled(4, 4, Rgb::WHITE);
/// for i in 1..4 {
///     m.set(i, 0, line);
///     m.set(0, i, line);
/// }
/// m.set(1, 1, Rgb::BLACK);
///
/// let grid = GridReader::new(ReaderParams::default()).process(&m).unwrap();
/// assert_eq!(grid.to_string(), "1.\n..");
/// ```
pub mod prelude {
    pub use crate::image::{PixelMatrix, Rgb};
    pub use crate::{CellGrid, GridReader, ReaderParams};
}

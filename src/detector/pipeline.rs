//! Pipeline driving the grid reader end-to-end.
//!
//! ```no_run
//! use grid_reader::image::{PixelMatrix, Rgb};
//! use grid_reader::{GridReader, ReaderParams};
//!
//! # fn example(matrix: PixelMatrix) -> grid_reader::Result<()> {
//! let reader = GridReader::new(ReaderParams::default());
//! let grid = reader.process(&matrix)?;
//! println!("{grid}");
//! # Ok(())
//! # }
//! ```
use super::params::ReaderParams;
use crate::cells::{build_squares, classify_regions, consecutive_pairs};
use crate::diagnostics::{
    CellStage, DetectionReport, InputDescriptor, PipelineTrace, TimingBreakdown,
};
use crate::error::Result;
use crate::image::io::decode_image;
use crate::image::{ImageView, PixelMatrix};
use crate::lines::detect_grid_lines;
use crate::types::CellGrid;
use log::{debug, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Reads the dark/light pattern of a drawn grid from a pixel matrix.
#[derive(Clone, Debug, Default)]
pub struct GridReader {
    params: ReaderParams,
}

impl GridReader {
    pub fn new(params: ReaderParams) -> Self {
        Self { params }
    }

    /// Run the reader, returning only the cell grid.
    pub fn process(&self, matrix: &PixelMatrix) -> Result<CellGrid> {
        self.process_with_diagnostics(matrix).map(|report| report.grid)
    }

    /// Run the reader and return the grid with a trace of every stage.
    pub fn process_with_diagnostics(&self, matrix: &PixelMatrix) -> Result<DetectionReport> {
        let (width, height) = (matrix.width(), matrix.height());
        debug!("GridReader::process start w={} h={}", width, height);
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let stage = Instant::now();
        let lines = detect_grid_lines(
            matrix,
            self.params.grid_line_color,
            self.params.max_line_gap,
        )?;
        timings.push("lines", elapsed_ms(stage));
        debug!(
            "GridReader::process lines horizontal={}/{} vertical={}/{}",
            lines.horizontal.len(),
            lines.horizontal_raw.len(),
            lines.vertical.len(),
            lines.vertical_raw.len()
        );
        if lines.horizontal.is_empty() {
            warn!("no grid lines found on the top row");
        }
        if lines.vertical.is_empty() {
            warn!("no grid lines found on the left column");
        }

        let stage = Instant::now();
        let horizontal_pairs = consecutive_pairs(&lines.horizontal);
        let vertical_pairs = consecutive_pairs(&lines.vertical);
        let squares = build_squares(&horizontal_pairs, &vertical_pairs);
        timings.push("squares", elapsed_ms(stage));

        let stage = Instant::now();
        let classified = classify_regions(matrix, &squares, self.params.dark_threshold);
        timings.push("classify", elapsed_ms(stage));

        let grid = CellGrid::from_classified(&classified);
        let degenerate = classified
            .iter()
            .flatten()
            .filter(|c| c.mean.is_none())
            .count();
        debug!(
            "GridReader::process grid={}x{} dark={} degenerate={}",
            grid.rows(),
            grid.cols(),
            grid.dark_count(),
            degenerate
        );
        timings.total_ms = elapsed_ms(total_start);

        let cells = CellStage {
            rows: grid.rows(),
            cols: grid.cols(),
            dark_cells: grid.dark_count(),
            degenerate_cells: degenerate,
            horizontal_pairs,
            vertical_pairs,
            cells: classified,
        };
        Ok(DetectionReport {
            grid,
            trace: PipelineTrace {
                input: InputDescriptor { width, height },
                params: self.params.clone(),
                lines,
                cells,
                timings,
            },
        })
    }
}

/// Decode the image at `path` and read its grid.
///
/// A decode failure is returned as [`GridError::Decode`](crate::GridError)
/// and no grid is produced.
pub async fn read_image_grid(
    path: impl Into<PathBuf>,
    params: ReaderParams,
) -> Result<CellGrid> {
    let matrix = decode_image(path).await?;
    GridReader::new(params).process(&matrix)
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

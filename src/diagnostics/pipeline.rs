use super::TimingBreakdown;
use crate::cells::{BoundaryPair, ClassifiedCell};
use crate::detector::ReaderParams;
use crate::lines::GridLines;
use crate::types::CellGrid;
use serde::Serialize;

/// Result produced by [`GridReader::process_with_diagnostics`](crate::GridReader).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub grid: CellGrid,
    pub trace: PipelineTrace,
}

/// Intermediate results of every stage the reader executed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub params: ReaderParams,
    pub lines: GridLines,
    pub cells: CellStage,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Cell construction and classification outcome.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStage {
    pub rows: usize,
    pub cols: usize,
    pub dark_cells: usize,
    /// Cells whose region selected no pixels; these are reported light.
    pub degenerate_cells: usize,
    pub horizontal_pairs: Vec<BoundaryPair>,
    pub vertical_pairs: Vec<BoundaryPair>,
    pub cells: Vec<Vec<ClassifiedCell>>,
}

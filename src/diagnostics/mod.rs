//! Serialisable report of a reader run.
//!
//! `DetectionReport` bundles the output [`CellGrid`](crate::CellGrid) with a
//! `PipelineTrace` holding the detected lines, cell extents, per-cell means
//! and stage timings.

pub mod pipeline;
pub mod timing;

pub use pipeline::{CellStage, DetectionReport, InputDescriptor, PipelineTrace};
pub use timing::{StageTiming, TimingBreakdown};

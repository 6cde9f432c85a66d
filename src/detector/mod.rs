//! Grid reader orchestrating line detection, cell construction and
//! classification.
//!
//! Overview
//! - Samples the top row and left column of the image and records every
//!   position whose colour equals the grid-line colour.
//! - Collapses near-consecutive positions, pairs adjacent survivors into cell
//!   extents, and crosses both axes into a row-major grid of regions.
//! - Averages each region and labels it dark when all channel means fall
//!   strictly below the threshold.
//!
//! Modules
//! - [`params`] – configuration knobs with their default constants.
//! - `pipeline` – the [`GridReader`] implementation and the async entry point.

pub mod params;
mod pipeline;

pub use params::ReaderParams;
pub use pipeline::{read_image_grid, GridReader};

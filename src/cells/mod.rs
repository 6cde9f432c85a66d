//! Cell geometry and classification.
//!
//! - [`pairing`] turns line positions into per-axis cell extents.
//! - [`squares`] crosses the two axes into a row-major grid of regions.
//! - [`classify`] averages each region and labels it dark or light.

pub mod classify;
pub mod pairing;
pub mod squares;

pub use classify::{classify_region, classify_regions, is_dark, mean_color, ClassifiedCell};
pub use pairing::{consecutive_pairs, BoundaryPair};
pub use squares::{build_squares, CellRegion};

//! Parameters of the grid reader.
//!
//! The defaults reproduce the fixed behaviour the reader was built around:
//! light-gray `(235, 235, 235)` grid lines, a per-channel darkness threshold of
//! 30 and a one-pixel collapse tolerance.

use crate::image::Rgb;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GRID_LINE_COLOR: Rgb = Rgb::gray(235);
pub const DEFAULT_DARK_THRESHOLD: f64 = 30.0;
pub const DEFAULT_MAX_LINE_GAP: usize = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderParams {
    /// Exact colour of grid-line pixels.
    pub grid_line_color: Rgb,
    /// A cell is dark when all three channel means are strictly below this.
    pub dark_threshold: f64,
    /// Maximum distance from the previous raw match for a line index to be kept.
    pub max_line_gap: usize,
}

impl Default for ReaderParams {
    fn default() -> Self {
        Self {
            grid_line_color: DEFAULT_GRID_LINE_COLOR,
            dark_threshold: DEFAULT_DARK_THRESHOLD,
            max_line_gap: DEFAULT_MAX_LINE_GAP,
        }
    }
}

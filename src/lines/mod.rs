//! Grid-line detection along the two image axes.
//!
//! A grid line is recognised by exact colour equality with the configured
//! grid-line colour on the sampled top row (horizontal positions) and left
//! column (vertical positions). The raw match positions are then thinned by
//! [`collapse_near_consecutive`].

use crate::error::Result;
use crate::image::{PixelMatrix, Rgb};
use crate::sampler::sample_axes;
use serde::Serialize;

/// Line positions detected on one matrix, before and after collapsing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLines {
    /// Raw matches on the top row (column indices).
    pub horizontal_raw: Vec<usize>,
    /// Raw matches on the left column (row indices).
    pub vertical_raw: Vec<usize>,
    /// Collapsed column indices; bound cells horizontally.
    pub horizontal: Vec<usize>,
    /// Collapsed row indices; bound cells vertically.
    pub vertical: Vec<usize>,
}

/// Indices `i` with `pixels[i] == color`, in ascending order.
pub fn matching_indices(pixels: &[Rgb], color: Rgb) -> Vec<usize> {
    pixels
        .iter()
        .enumerate()
        .filter(|&(_, &p)| p == color)
        .map(|(i, _)| i)
        .collect()
}

/// Keep `items[0]` and every `items[i]` within `max_gap` of `items[i - 1]`.
///
/// The comparison is against the raw predecessor, not the last kept index:
/// `[2, 3, 10, 11, 12]` with `max_gap = 1` yields `[2, 3, 11, 12]`.
pub fn collapse_near_consecutive(items: &[usize], max_gap: usize) -> Vec<usize> {
    let Some(&first) = items.first() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(items.len());
    out.push(first);
    out.extend(
        items
            .windows(2)
            .filter(|w| w[1].abs_diff(w[0]) <= max_gap)
            .map(|w| w[1]),
    );
    out
}

/// Detect and collapse grid lines on both axes of `matrix`.
pub fn detect_grid_lines(
    matrix: &PixelMatrix,
    color: Rgb,
    max_gap: usize,
) -> Result<GridLines> {
    let samples = sample_axes(matrix)?;
    let horizontal_raw = matching_indices(samples.top_row, color);
    let vertical_raw = matching_indices(&samples.left_column, color);
    Ok(GridLines {
        horizontal: collapse_near_consecutive(&horizontal_raw, max_gap),
        vertical: collapse_near_consecutive(&vertical_raw, max_gap),
        horizontal_raw,
        vertical_raw,
    })
}

#[cfg(test)]
mod tests;

//! Extraction of the two 1D probes used for grid-line detection.

use crate::error::{GridError, Result};
use crate::image::{ImageView, PixelMatrix, Rgb};

/// The first row and first column of a pixel matrix.
#[derive(Clone, Debug)]
pub struct AxisSamples<'a> {
    /// `M[0]`, one pixel per column.
    pub top_row: &'a [Rgb],
    /// `M[r][0]` for every row `r`.
    pub left_column: Vec<Rgb>,
}

/// Sample the top row and left column of `matrix`.
///
/// Fails with [`GridError::EmptyImage`] when the matrix has no rows or no
/// columns.
pub fn sample_axes(matrix: &PixelMatrix) -> Result<AxisSamples<'_>> {
    if matrix.is_empty() {
        return Err(GridError::EmptyImage {
            width: matrix.width(),
            height: matrix.height(),
        });
    }
    Ok(AxisSamples {
        top_row: matrix.row(0),
        left_column: matrix.rows().map(|row| row[0]).collect(),
    })
}

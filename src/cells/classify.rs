//! Mean-colour aggregation and dark/light labelling of cell regions.

use super::squares::CellRegion;
use crate::image::{ImageView, MeanColor, PixelMatrix};
use log::debug;
use serde::Serialize;

/// A cell region with its mean colour and darkness label.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedCell {
    pub region: CellRegion,
    /// `None` when the region selects no pixels.
    pub mean: Option<MeanColor>,
    pub is_dark: bool,
}

/// Mean colour of `matrix[y1..y2][x1..x2]`.
///
/// Bounds past the matrix edge are clamped, so the region behaves like a
/// slice. Returns `None` when the clamped region contains no pixels.
pub fn mean_color(matrix: &PixelMatrix, region: &CellRegion) -> Option<MeanColor> {
    let x2 = region.x2.min(matrix.width());
    let y2 = region.y2.min(matrix.height());
    let x1 = region.x1.min(x2);
    let y1 = region.y1.min(y2);
    let count = (x2 - x1) * (y2 - y1);
    if count == 0 {
        return None;
    }

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for row in matrix.rows().skip(y1).take(y2 - y1) {
        for px in &row[x1..x2] {
            r += u64::from(px.r);
            g += u64::from(px.g);
            b += u64::from(px.b);
        }
    }
    let n = count as f64;
    Some(MeanColor {
        r: r as f64 / n,
        g: g as f64 / n,
        b: b as f64 / n,
    })
}

/// Dark when every channel mean is strictly below `threshold`.
#[inline]
pub fn is_dark(mean: &MeanColor, threshold: f64) -> bool {
    mean.r < threshold && mean.g < threshold && mean.b < threshold
}

/// Average and label one region. Regions without pixels are light.
pub fn classify_region(
    matrix: &PixelMatrix,
    region: CellRegion,
    threshold: f64,
) -> ClassifiedCell {
    let mean = mean_color(matrix, &region);
    if mean.is_none() {
        debug!("classify_region: degenerate region {:?} -> light", region);
    }
    ClassifiedCell {
        region,
        mean,
        is_dark: mean.is_some_and(|m| is_dark(&m, threshold)),
    }
}

/// Classify every region, preserving the row/column shape.
pub fn classify_regions(
    matrix: &PixelMatrix,
    squares: &[Vec<CellRegion>],
    threshold: f64,
) -> Vec<Vec<ClassifiedCell>> {
    squares
        .iter()
        .map(|row| {
            row.iter()
                .map(|&region| classify_region(matrix, region, threshold))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Rgb;

    fn region(x1: usize, x2: usize, y1: usize, y2: usize) -> CellRegion {
        CellRegion { x1, x2, y1, y2 }
    }

    #[test]
    fn uniform_region_mean_equals_colour() {
        let color = Rgb::new(12, 200, 77);
        let m = PixelMatrix::filled(6, 4, color);
        let mean = mean_color(&m, &region(1, 5, 0, 3)).unwrap();
        assert_eq!(mean, MeanColor::from(color));
    }

    #[test]
    fn mean_uses_half_open_bounds() {
        let mut m = PixelMatrix::filled(4, 4, Rgb::BLACK);
        // Column 2 and row 2 lie outside [0, 2) x [0, 2).
        for i in 0..4 {
            m.set(2, i, Rgb::WHITE);
            m.set(i, 2, Rgb::WHITE);
        }
        m.set(1, 1, Rgb::new(40, 80, 120));
        let mean = mean_color(&m, &region(0, 2, 0, 2)).unwrap();
        assert_eq!(mean.r, 10.0);
        assert_eq!(mean.g, 20.0);
        assert_eq!(mean.b, 30.0);
    }

    #[test]
    fn threshold_is_strict_per_channel() {
        let t = 30.0;
        assert!(is_dark(&MeanColor::from(Rgb::gray(29)), t));
        assert!(!is_dark(&MeanColor::from(Rgb::new(30, 29, 29)), t));
        assert!(!is_dark(&MeanColor::from(Rgb::new(29, 29, 30)), t));
        assert!(!is_dark(&MeanColor::from(Rgb::gray(30)), t));
    }

    #[test]
    fn degenerate_region_is_light_without_mean() {
        let m = PixelMatrix::filled(4, 4, Rgb::BLACK);
        for r in [region(2, 2, 0, 3), region(0, 3, 1, 1), region(3, 1, 0, 2)] {
            let cell = classify_region(&m, r, 30.0);
            assert!(cell.mean.is_none());
            assert!(!cell.is_dark);
        }
    }

    #[test]
    fn out_of_bounds_region_is_clamped() {
        let m = PixelMatrix::filled(3, 3, Rgb::BLACK);
        let cell = classify_region(&m, region(1, 10, 1, 10), 30.0);
        assert_eq!(cell.mean, Some(MeanColor::from(Rgb::BLACK)));
        assert!(cell.is_dark);
        assert!(classify_region(&m, region(5, 9, 0, 3), 30.0).mean.is_none());
    }

    #[test]
    fn regions_keep_grid_shape() {
        let mut m = PixelMatrix::filled(4, 2, Rgb::WHITE);
        m.set(2, 1, Rgb::BLACK);
        m.set(3, 1, Rgb::BLACK);
        let squares = vec![
            vec![region(0, 2, 0, 1), region(2, 4, 0, 1)],
            vec![region(0, 2, 1, 2), region(2, 4, 1, 2)],
        ];
        let out = classify_regions(&m, &squares, 30.0);
        let dark: Vec<Vec<bool>> = out
            .iter()
            .map(|row| row.iter().map(|c| c.is_dark).collect())
            .collect();
        assert_eq!(dark, vec![vec![false, false], vec![false, true]]);
    }
}

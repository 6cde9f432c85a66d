use super::pairing::BoundaryPair;
use serde::Serialize;

/// Rectangular pixel region `[x1, x2) × [y1, y2)` covering one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CellRegion {
    pub x1: usize,
    pub x2: usize,
    pub y1: usize,
    pub y2: usize,
}

impl CellRegion {
    pub fn from_pairs(horizontal: BoundaryPair, vertical: BoundaryPair) -> Self {
        Self {
            x1: horizontal.start,
            x2: horizontal.end,
            y1: vertical.start,
            y2: vertical.end,
        }
    }
}

/// Cross product of the two pair sequences, row-major: one output row per
/// vertical pair, one column per horizontal pair. An empty axis yields an
/// empty grid.
pub fn build_squares(
    horizontal: &[BoundaryPair],
    vertical: &[BoundaryPair],
) -> Vec<Vec<CellRegion>> {
    if horizontal.is_empty() {
        return Vec::new();
    }
    vertical
        .iter()
        .map(|&v| {
            horizontal
                .iter()
                .map(|&h| CellRegion::from_pairs(h, v))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::pairing::consecutive_pairs;

    #[test]
    fn grid_shape_is_vertical_by_horizontal() {
        let h = consecutive_pairs(&[0, 3, 6, 9]);
        let v = consecutive_pairs(&[1, 5, 8]);
        let squares = build_squares(&h, &v);
        assert_eq!(squares.len(), v.len());
        for (r, row) in squares.iter().enumerate() {
            assert_eq!(row.len(), h.len());
            for (c, cell) in row.iter().enumerate() {
                assert_eq!((cell.x1, cell.x2), (h[c].start, h[c].end));
                assert_eq!((cell.y1, cell.y2), (v[r].start, v[r].end));
            }
        }
    }

    #[test]
    fn empty_axis_gives_empty_grid() {
        let pairs = consecutive_pairs(&[0, 4, 8]);
        assert!(build_squares(&[], &pairs).is_empty());
        assert!(build_squares(&pairs, &[]).is_empty());
    }
}

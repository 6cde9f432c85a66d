use super::*;
use crate::error::GridError;

const LINE: Rgb = Rgb::gray(235);

#[test]
fn matching_requires_exact_colour() {
    let pixels = [
        LINE,
        Rgb::new(235, 235, 234),
        Rgb::WHITE,
        LINE,
        Rgb::new(236, 235, 235),
    ];
    assert_eq!(matching_indices(&pixels, LINE), vec![0, 3]);
    assert!(matching_indices(&[], LINE).is_empty());
}

#[test]
fn collapse_compares_against_raw_predecessor() {
    assert_eq!(
        collapse_near_consecutive(&[2, 3, 10, 11, 12], 1),
        vec![2, 3, 11, 12]
    );
}

#[test]
fn collapse_drops_isolated_indices_after_the_first() {
    assert_eq!(collapse_near_consecutive(&[0, 10, 20], 1), vec![0]);
    assert_eq!(collapse_near_consecutive(&[5], 1), vec![5]);
    assert!(collapse_near_consecutive(&[], 1).is_empty());
}

#[test]
fn collapse_gap_is_configurable() {
    assert_eq!(collapse_near_consecutive(&[1, 3, 9, 10], 2), vec![1, 3, 10]);
    assert_eq!(collapse_near_consecutive(&[4, 4, 4], 0), vec![4, 4, 4]);
}

#[test]
fn detects_lines_on_both_axes_independently() {
    let mut m = PixelMatrix::filled(8, 6, Rgb::WHITE);
    for x in [0, 1, 5, 6] {
        m.set(x, 0, LINE);
    }
    for y in [2, 3] {
        m.set(0, y, LINE);
    }
    let lines = detect_grid_lines(&m, LINE, 1).unwrap();
    assert_eq!(lines.horizontal_raw, vec![0, 1, 5, 6]);
    assert_eq!(lines.horizontal, vec![0, 1, 6]);
    assert_eq!(lines.vertical_raw, vec![0, 2, 3]);
    assert_eq!(lines.vertical, vec![0, 3]);
}

#[test]
fn empty_matrix_has_no_lines() {
    let m = PixelMatrix::from_rows(Vec::new()).unwrap();
    assert!(matches!(
        detect_grid_lines(&m, LINE, 1),
        Err(GridError::EmptyImage { .. })
    ));
}

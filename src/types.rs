use crate::cells::ClassifiedCell;
use serde::Serialize;
use std::fmt;

/// Row-major grid of cell states; `true` marks a dark cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CellGrid {
    cells: Vec<Vec<bool>>,
}

impl CellGrid {
    pub fn new(cells: Vec<Vec<bool>>) -> Self {
        Self { cells }
    }

    pub fn from_classified(classified: &[Vec<ClassifiedCell>]) -> Self {
        Self::new(
            classified
                .iter()
                .map(|row| row.iter().map(|c| c.is_dark).collect())
                .collect(),
        )
    }

    /// Number of rows (vertical boundary pairs).
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (horizontal boundary pairs).
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn dark_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&d| d).count()
    }

    /// Render each row with one character per cell.
    pub fn to_lines(&self, dark: char, light: char) -> Vec<String> {
        self.iter_rows()
            .map(|row| row.iter().map(|&d| if d { dark } else { light }).collect())
            .collect()
    }
}

/// One line per row, `1` for dark and `.` for light.
impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.to_lines('1', '.').iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

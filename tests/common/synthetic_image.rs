#![allow(dead_code)]

use grid_reader::image::{PixelMatrix, Rgb};

pub const LINE: Rgb = Rgb::gray(235);

/// Geometry of a ruled synthetic grid.
pub struct RuledGrid {
    /// Blank border before the first line on both axes.
    pub margin: usize,
    /// Interior size of a cell, excluding lines.
    pub cell: usize,
    /// Line thickness.
    pub line: usize,
}

impl RuledGrid {
    pub fn pitch(&self) -> usize {
        self.cell + self.line
    }

    /// Render `pattern` (`'1'` dark, anything else light) on a white page.
    ///
    /// Lines run across the whole image so the top row and left column cross
    /// every one of them.
    pub fn render(&self, pattern: &[&str]) -> PixelMatrix {
        assert!(!pattern.is_empty(), "pattern must have rows");
        let rows = pattern.len();
        let cols = pattern[0].len();
        let width = self.margin * 2 + cols * self.pitch() + self.line;
        let height = self.margin * 2 + rows * self.pitch() + self.line;
        let mut img = PixelMatrix::filled(width, height, Rgb::WHITE);

        for (r, row) in pattern.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                if ch != '1' {
                    continue;
                }
                let x0 = self.margin + c * self.pitch() + self.line;
                let y0 = self.margin + r * self.pitch() + self.line;
                for y in y0..y0 + self.cell {
                    for x in x0..x0 + self.cell {
                        img.set(x, y, Rgb::BLACK);
                    }
                }
            }
        }
        for k in 0..=cols {
            let x0 = self.margin + k * self.pitch();
            for x in x0..x0 + self.line {
                for y in 0..height {
                    img.set(x, y, LINE);
                }
            }
        }
        for k in 0..=rows {
            let y0 = self.margin + k * self.pitch();
            for y in y0..y0 + self.line {
                for x in 0..width {
                    img.set(x, y, LINE);
                }
            }
        }
        img
    }
}

/// The 4x4 layout with lines at {1, 2, 3} on both axes; cell pixels are the
/// four single pixels at (1..3, 1..3), coloured row-major from `cells`.
pub fn tiny_grid(cells: [Rgb; 4]) -> PixelMatrix {
    let mut img = PixelMatrix::filled(4, 4, Rgb::WHITE);
    for i in 1..4 {
        img.set(i, 0, LINE);
        img.set(0, i, LINE);
    }
    img.set(1, 1, cells[0]);
    img.set(2, 1, cells[1]);
    img.set(1, 2, cells[2]);
    img.set(2, 2, cells[3]);
    img
}

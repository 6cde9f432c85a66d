use super::{ImageView, Rgb};
use crate::error::{GridError, Result};

/// Owned, rectangular, row-major matrix of RGB pixels.
///
/// Row index is the vertical position, column index the horizontal one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMatrix {
    width: usize,
    height: usize,
    data: Vec<Rgb>,
}

impl PixelMatrix {
    /// Wrap a flat row-major buffer of `width * height` pixels.
    pub fn new(width: usize, height: usize, data: Vec<Rgb>) -> Result<Self> {
        let expected = width.checked_mul(height).ok_or(GridError::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        if data.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Matrix filled with a single colour.
    ///
    /// # Panics
    /// If `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        let len = width.checked_mul(height).expect("image size overflow");
        Self {
            width,
            height,
            data: vec![color; len],
        }
    }

    /// Build from nested rows; every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for (row, pixels) in rows.into_iter().enumerate() {
            if pixels.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    actual: pixels.len(),
                });
            }
            data.extend(pixels);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        self.data[y * self.width + x] = color;
    }
}

impl ImageView for PixelMatrix {
    type Pixel = Rgb;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

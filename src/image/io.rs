//! I/O helpers around the core pipeline.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned [`PixelMatrix`].
//! - `decode_image`: async wrapper running the blocking decode off the runtime.
//! - `save_grid_image`: render a [`CellGrid`] as black/white blocks.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{PixelMatrix, Rgb};
use crate::error::{GridError, Result};
use crate::types::CellGrid;
use image::{Rgb as RgbPixel, RgbImage};
use log::warn;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Load an image from disk as 8-bit RGB. Alpha, if any, is discarded.
pub fn load_rgb_image(path: &Path) -> Result<PixelMatrix> {
    let img = image::open(path)
        .map_err(|e| decode_error(path, e.to_string()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|p| Rgb::from(*p)).collect();
    PixelMatrix::new(width, height, data)
}

/// Decode `path` on the blocking pool. Either the whole matrix or a
/// [`GridError::Decode`] is produced, never a partial image.
pub async fn decode_image(path: impl Into<PathBuf>) -> Result<PixelMatrix> {
    let path = path.into();
    let task_path = path.clone();
    tokio::task::spawn_blocking(move || load_rgb_image(&task_path))
        .await
        .map_err(|e| decode_error(&path, e.to_string()))?
}

/// Save a cell grid to a PNG, drawing each cell as a `cell_px` square.
///
/// An empty grid has no pixels to encode; nothing is written and `Ok(false)`
/// is returned.
pub fn save_grid_image(grid: &CellGrid, cell_px: u32, path: &Path) -> Result<bool> {
    if grid.is_empty() {
        warn!("empty grid, skipping image {}", path.display());
        return Ok(false);
    }
    ensure_parent_dir(path)?;
    let cell_px = cell_px.max(1);
    let width = grid.cols() as u32 * cell_px;
    let height = grid.rows() as u32 * cell_px;
    let out = RgbImage::from_fn(width, height, |x, y| {
        let dark = grid.get((y / cell_px) as usize, (x / cell_px) as usize);
        let c = if dark == Some(true) { Rgb::BLACK } else { Rgb::WHITE };
        RgbPixel(c.into())
    });
    out.save(path).map_err(|e| io_error(path, e.to_string()))?;
    Ok(true)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| io_error(path, e.to_string()))?;
    fs::write(path, json).map_err(|e| io_error(path, e.to_string()))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e.to_string()))?;
        }
    }
    Ok(())
}

fn decode_error(path: &Path, reason: String) -> GridError {
    GridError::Decode {
        path: path.to_path_buf(),
        reason,
    }
}

fn io_error(path: &Path, reason: String) -> GridError {
    GridError::Io {
        path: path.to_path_buf(),
        reason,
    }
}

//! Error taxonomy shared by the library and the command-line runner.

use std::path::PathBuf;

/// Failures surfaced by decoding, the core pipeline and configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The image collaborator could not produce a pixel matrix.
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    /// The matrix has no rows or no columns to sample.
    #[error("image is empty ({width}x{height})")]
    EmptyImage { width: usize, height: usize },
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("size mismatch: expected {expected} pixels, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("{0}")]
    Config(String),
    #[error("failed to write {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, GridError>;

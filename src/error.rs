//! Error types for rasterkit operations.
//!
//! Rasterization itself never fails on coordinates: pixels that land outside
//! the buffer are clipped. The variants here cover misuse of the public API
//! (bad dimensions, out-of-range reads, negative radii) and output I/O.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a pixel buffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Read of a pixel outside the buffer through the public accessor.
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        /// Requested x coordinate.
        x: i32,
        /// Requested y coordinate.
        y: i32,
        /// Buffer width.
        width: u32,
        /// Buffer height.
        height: u32,
    },

    /// Circle radius below zero.
    #[error("Negative radius: {0}")]
    NegativeRadius(i32),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Scene description could not be parsed.
    #[cfg(feature = "scene")]
    #[error("Scene parse error at line {line}: {message}")]
    SceneParse {
        /// Line number (1-based, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}

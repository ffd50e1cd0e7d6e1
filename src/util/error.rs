//! Error types for gestmatch.

use thiserror::Error;

/// Result alias for gestmatch operations.
pub type GestMatchResult<T> = std::result::Result<T, GestMatchError>;

/// Errors that can occur while loading templates or matching frames.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GestMatchError {
    /// An image dimension is zero or overflows addressing arithmetic.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The backing buffer is too small for the requested view.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A region of interest does not fit inside the image.
    #[error("roi {width}x{height} at ({x}, {y}) out of bounds for {img_width}x{img_height} image")]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// The template cannot be scored with a normalized metric.
    #[error("degenerate template: {reason}")]
    DegenerateTemplate { reason: &'static str },
    /// A gesture folder could not produce a usable template image.
    #[error("template load failed for {path}: {reason}")]
    TemplateLoad { path: String, reason: String },
    /// Reading or decoding an image file failed.
    #[error("image io failed for {path}: {reason}")]
    ImageIo { path: String, reason: String },
}

//! Error types for trueno-canvas operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-canvas operations.
///
/// Mask predicates never fail; every variant here comes from caller misuse
/// of the path model, invalid configuration, or the PNG exporter.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for the framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// `line_to` was called with no subpath begun since the last path reset.
    #[error("No current subpath: call move_to before line_to")]
    NoCurrentSubpath,

    /// Arc radius must be strictly positive.
    #[error("Invalid arc radius: {0} (must be > 0)")]
    InvalidRadius(i32),

    /// Stroke width must be at least one pixel.
    #[error("Invalid stroke width: {0} (must be >= 1)")]
    InvalidStrokeWidth(u32),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("0x100"));
    }

    #[test]
    fn test_invalid_radius_display() {
        let err = Error::InvalidRadius(-3);
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}

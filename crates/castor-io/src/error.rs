//! Error types for image I/O.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Format not recognized or not compiled in.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Bit depth or color type the format module cannot represent.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Pixel data inconsistent with its declared shape.
    #[error("format error: {0}")]
    Format(String),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

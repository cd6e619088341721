//! Error types for castor-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the image container and of
//! the correction pipeline built on top of it:
//!
//! - Rejecting images without distinct color channels ([`Error::InvalidColorSpace`])
//! - Buffer construction with mismatched lengths ([`Error::InvalidDimensions`])
//! - Bounds-checked pixel access ([`Error::OutOfBounds`])
//!
//! The correction itself is total over valid RGB input: amounts outside
//! [0, 1] are clamped, never rejected, so no variant exists for them.
//!
//! # Usage
//!
//! ```rust
//! use castor_core::{ChannelLayout, Error, Result};
//!
//! fn require_color(layout: ChannelLayout) -> Result<()> {
//!     if !layout.is_color() {
//!         return Err(Error::invalid_color_space(format!(
//!             "expected RGB or RGBA, got {layout}"
//!         )));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the castor image pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The image lacks distinct color channels.
    ///
    /// Returned when a grayscale (or grayscale+alpha) image is passed to an
    /// operation that needs separate R, G and B values, such as the magenta
    /// correction. This is the only failure mode of the correction itself.
    #[error("invalid color space: {0}")]
    InvalidColorSpace(String),

    /// Pixel coordinates are outside image bounds.
    ///
    /// Returned when accessing a pixel at (x, y) where `x >= width` or
    /// `y >= height`.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Invalid image dimensions or buffer size.
    ///
    /// Returned when constructing an image from a buffer whose length does
    /// not match `width * height * channels`, or when a buffer passed to an
    /// in-place operation has an incompatible length.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Channel count mismatch between a pixel slice and the image layout.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Expected channel count
        expected: u8,
        /// Actual channel count
        got: u8,
    },
}

impl Error {
    /// Creates an [`Error::InvalidColorSpace`] error.
    #[inline]
    pub fn invalid_color_space(msg: impl Into<String>) -> Self {
        Self::InvalidColorSpace(msg.into())
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ChannelMismatch`] error.
    #[inline]
    pub fn channel_mismatch(expected: u8, got: u8) -> Self {
        Self::ChannelMismatch { expected, got }
    }

    /// Returns `true` if this is the grayscale-rejection error.
    #[inline]
    pub fn is_invalid_color_space(&self) -> bool {
        matches!(self, Self::InvalidColorSpace(_))
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

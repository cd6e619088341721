//! # castor-core
//!
//! Core types for star-color correction in narrowband astrophotography.
//!
//! This crate provides the foundation the rest of the castor workspace is
//! built on:
//!
//! - [`Image`] - owned, interleaved image buffer, generic over sample format
//! - [`PixelFormat`] - sample storage abstraction (u8, u16, f16, f32)
//! - [`ChannelLayout`] - runtime channel layout (Gray .. RGBA)
//! - [`Error`] / [`Result`] - the pipeline's error surface
//!
//! ## Design
//!
//! Narrowband composites come off disk in whatever depth the stacking
//! software produced, so the channel layout and bit depth are runtime
//! properties here, not type parameters. The one invariant the type system
//! does enforce is the value range: every [`PixelFormat`] normalizes to
//! [0.0, 1.0] on the way into f32 processing and clamps on the way back.
//!
//! Grayscale layouts are representable on purpose: loaders must be able to
//! say what they read, and the correction must be able to reject it with
//! [`Error::InvalidColorSpace`] instead of guessing.
//!
//! ## Crate structure
//!
//! ```text
//! castor-core (this crate)
//!    ^
//!    |
//!    +-- castor-ops (invert, SCNR, magenta correction)
//!    +-- castor-io  (PNG/TIFF loading and saving)
//!    +-- castor-cli (the castor binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod error;
pub mod image;
pub mod pixel;

// Re-exports for convenience
pub use channel::ChannelLayout;
pub use error::{Error, Result};
pub use image::Image;
pub use pixel::PixelFormat;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use castor_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::ChannelLayout;
    pub use crate::error::{Error, Result};
    pub use crate::image::Image;
    pub use crate::pixel::PixelFormat;
}

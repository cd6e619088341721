//! Magenta star halo correction.
//!
//! Narrowband palettes that map Ha/OIII/SII into RGB (SHO and friends)
//! tend to leave stars with a magenta fringe, because stars are broadband
//! emitters and pick up roughly equal red and blue while the green
//! channel stays low. Since magenta is the complement of green, the
//! classic fix is a three step sandwich:
//!
//! 1. invert the image, turning magenta halos into green ones
//! 2. run SCNR green suppression with lightness preservation
//! 3. invert again
//!
//! The result removes the magenta cast while keeping star brightness,
//! something a direct subtraction of magenta would not do.
//!
//! [`correct_magenta_stars`] is the image-level entry point; the
//! [`MagentaCorrection`] parameter struct and the in-place buffer walkers
//! are exposed for callers that manage their own pixel storage.
//!
//! # Example
//!
//! ```rust,ignore
//! use castor_ops::correct_magenta_stars;
//!
//! let fixed = correct_magenta_stars(&image, 0.8)?;
//! ```

use castor_core::{Image, PixelFormat, Result};
use tracing::debug;

use crate::guard::ensure_color_channels;
use crate::invert::invert_rgb;
use crate::scnr::Scnr;

/// Default correction strength, carried over from the dialog this
/// operation originated in.
pub const DEFAULT_AMOUNT: f32 = 0.8;

/// Magenta correction parameters.
///
/// The only knob is `amount`, the strength of the green suppression in
/// the inverted domain. It is clamped to `[0, 1]` before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagentaCorrection {
    /// Correction strength in `[0, 1]`. Out-of-range values are clamped.
    pub amount: f32,
}

impl Default for MagentaCorrection {
    fn default() -> Self {
        Self::new(DEFAULT_AMOUNT)
    }
}

impl MagentaCorrection {
    /// Creates correction parameters, clamping `amount` to `[0, 1]`.
    pub fn new(amount: f32) -> Self {
        Self {
            amount: amount.clamp(0.0, 1.0),
        }
    }

    /// Returns parameters that leave every pixel unchanged.
    pub fn identity() -> Self {
        Self { amount: 0.0 }
    }

    /// Returns true if applying these parameters would not change any pixel.
    pub fn is_identity(&self) -> bool {
        self.amount <= 0.0
    }

    /// Corrects a single RGB pixel.
    ///
    /// At `amount <= 0` the input is returned bit-exact, without the
    /// invert round trip.
    #[inline]
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        if self.is_identity() {
            return rgb;
        }

        let scnr = Scnr {
            amount: self.amount,
            preserve_lightness: true,
        };
        invert_rgb(scnr.apply(invert_rgb(rgb)))
    }
}

/// Applies the correction to an interleaved RGB buffer in place.
pub fn apply_correction_inplace(buffer: &mut [f32], correction: &MagentaCorrection) {
    if correction.is_identity() {
        return;
    }

    for chunk in buffer.chunks_exact_mut(3) {
        let out = correction.apply([chunk[0], chunk[1], chunk[2]]);
        chunk[0] = out[0];
        chunk[1] = out[1];
        chunk[2] = out[2];
    }
}

/// Applies the correction to an interleaved RGBA buffer in place.
///
/// Alpha is left untouched.
pub fn apply_correction_rgba_inplace(buffer: &mut [f32], correction: &MagentaCorrection) {
    if correction.is_identity() {
        return;
    }

    for chunk in buffer.chunks_exact_mut(4) {
        let out = correction.apply([chunk[0], chunk[1], chunk[2]]);
        chunk[0] = out[0];
        chunk[1] = out[1];
        chunk[2] = out[2];
        // alpha unchanged
    }
}

/// Corrects magenta star halos in a color image.
///
/// Returns a new image with the same dimensions, layout, and pixel
/// format. `amount` is silently clamped to `[0, 1]`; an amount of `0`
/// returns a copy of the input. Alpha channels pass through untouched.
///
/// Integer and half-float images are processed in `f32` and quantized
/// back on the way out.
///
/// # Errors
///
/// Returns [`castor_core::Error::InvalidColorSpace`] for `Gray` and
/// `GrayAlpha` layouts; the correction needs separate RGB channels.
pub fn correct_magenta_stars<T: PixelFormat>(image: &Image<T>, amount: f32) -> Result<Image<T>> {
    ensure_color_channels(image.layout(), "magenta correction")?;

    let correction = MagentaCorrection::new(amount);
    debug!(
        width = image.width(),
        height = image.height(),
        layout = %image.layout(),
        amount = correction.amount,
        "correcting magenta stars"
    );

    let mut work = image.to_f32();
    let channels = work.channels();

    #[cfg(feature = "parallel")]
    {
        let width = image.width() as usize;
        crate::parallel::correct_rows_inplace(work.data_mut(), width, channels, &correction)?;
    }

    #[cfg(not(feature = "parallel"))]
    {
        let data = work.data_mut();
        if channels == 4 {
            apply_correction_rgba_inplace(data, &correction);
        } else {
            apply_correction_inplace(data, &correction);
        }
    }

    Ok(work.convert())
}

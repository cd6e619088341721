//! SCNR green suppression (Subtractive Chromatic Noise Reduction).
//!
//! Pulls the green channel of each pixel down toward a neutral level
//! computed from the other two channels. The variant implemented here is
//! *average neutral* protection:
//!
//! ```text
//! neutral = (R + B) / 2
//! G' = G - amount * (G - neutral)    when G > neutral
//! ```
//!
//! Pixels whose green does not exceed the neutral level pass through
//! untouched, so only an actual green cast is affected.
//!
//! With [`Scnr::preserve_lightness`] enabled (the default) the pixel is
//! rescaled after suppression so its HSL lightness `(max + min) / 2`
//! matches the value it had before, then clamped to `[0, 1]`. This keeps
//! star profiles at their original brightness while the cast is removed.
//!
//! # Example
//!
//! ```rust,ignore
//! use castor_ops::scnr::{Scnr, apply_scnr_inplace};
//!
//! let scnr = Scnr::new(0.8);
//! apply_scnr_inplace(&mut pixels, &scnr);
//! ```

/// SCNR parameters.
///
/// `amount` is clamped to `[0, 1]` before use: `0` leaves the image
/// unchanged, `1` pulls green all the way down to the neutral level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scnr {
    /// Suppression strength in `[0, 1]`. Out-of-range values are clamped.
    pub amount: f32,
    /// Rescale the pixel after suppression so its lightness is unchanged.
    pub preserve_lightness: bool,
}

impl Default for Scnr {
    fn default() -> Self {
        Self::identity()
    }
}

impl Scnr {
    /// Creates SCNR parameters with the given strength and lightness
    /// preservation enabled.
    pub fn new(amount: f32) -> Self {
        Self {
            amount: amount.clamp(0.0, 1.0),
            preserve_lightness: true,
        }
    }

    /// Returns parameters that leave every pixel unchanged.
    pub fn identity() -> Self {
        Self {
            amount: 0.0,
            preserve_lightness: true,
        }
    }

    /// Returns true if applying these parameters would not change any pixel.
    pub fn is_identity(&self) -> bool {
        self.amount <= 0.0
    }

    /// Applies green suppression to a single RGB pixel.
    ///
    /// Input channels are expected in `[0, 1]`; the output is clamped to
    /// the same range.
    #[inline]
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let amount = self.amount.clamp(0.0, 1.0);
        if amount <= 0.0 {
            return rgb;
        }

        let [r, g, b] = rgb;
        let neutral = average_neutral(r, b);
        if g <= neutral {
            return rgb;
        }

        let suppressed = g - amount * (g - neutral);
        if !self.preserve_lightness {
            return [r, suppressed, b];
        }

        let before = lightness([r, g, b]);
        let after = lightness([r, suppressed, b]);
        if after <= 0.0 {
            // Pixel went fully black; no scale can restore lightness.
            return [r, suppressed, b];
        }

        let scale = before / after;
        [
            (r * scale).clamp(0.0, 1.0),
            (suppressed * scale).clamp(0.0, 1.0),
            (b * scale).clamp(0.0, 1.0),
        ]
    }
}

/// Neutral green level under average protection: `(R + B) / 2`.
#[inline]
pub fn average_neutral(r: f32, b: f32) -> f32 {
    (r + b) * 0.5
}

/// HSL lightness of an RGB pixel: `(max + min) / 2`.
///
/// This is the measure the lightness-preservation step keeps constant.
#[inline]
pub fn lightness(rgb: [f32; 3]) -> f32 {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);
    (max + min) * 0.5
}

/// Applies SCNR to an interleaved RGB buffer in place.
pub fn apply_scnr_inplace(buffer: &mut [f32], scnr: &Scnr) {
    if scnr.is_identity() {
        return;
    }

    for chunk in buffer.chunks_exact_mut(3) {
        let rgb = [chunk[0], chunk[1], chunk[2]];
        let out = scnr.apply(rgb);
        chunk[0] = out[0];
        chunk[1] = out[1];
        chunk[2] = out[2];
    }
}

/// Applies SCNR to an interleaved RGBA buffer in place.
///
/// Alpha is left untouched.
pub fn apply_scnr_rgba_inplace(buffer: &mut [f32], scnr: &Scnr) {
    if scnr.is_identity() {
        return;
    }

    for chunk in buffer.chunks_exact_mut(4) {
        let rgb = [chunk[0], chunk[1], chunk[2]];
        let out = scnr.apply(rgb);
        chunk[0] = out[0];
        chunk[1] = out[1];
        chunk[2] = out[2];
        // alpha unchanged
    }
}

//! Pixel sample formats.
//!
//! The correction is defined over normalized channel values in [0.0, 1.0].
//! Real files store those values as 8- or 16-bit fixed point, half floats or
//! full floats; [`PixelFormat`] abstracts over the storage so [`Image`]
//! buffers of any depth can flow through the same pipeline.
//!
//! # Supported types
//!
//! - `u8` - 8-bit unsigned, fixed-point encoding of [0, 1] (v / 255)
//! - `u16` - 16-bit unsigned, fixed-point encoding of [0, 1] (v / 65535)
//! - `f16` - 16-bit half float (via the `half` crate)
//! - `f32` - 32-bit float, the working format of the correction
//!
//! # Dependencies
//!
//! - `half` crate for `f16` support
//!
//! [`Image`]: crate::image::Image

use half::f16;

/// Trait for pixel sample storage types.
///
/// Conversion through f32 is the contract every operation relies on:
/// [`to_f32`](PixelFormat::to_f32) normalizes integer formats into
/// [0.0, 1.0], and [`from_f32`](PixelFormat::from_f32) clamps back into the
/// representable range, so a buffer round-tripped through an operation can
/// never leave its value range.
///
/// # Example
///
/// ```
/// use castor_core::PixelFormat;
///
/// let v: u16 = PixelFormat::from_f32(0.5);
/// assert_eq!(v, 32768);
/// assert!((v.to_f32() - 0.5).abs() < 1e-4);
/// ```
pub trait PixelFormat: Copy + Clone + Default + Send + Sync + PartialOrd + 'static {
    /// Number of bits per channel.
    const BITS: u32;

    /// Whether this is a floating-point format.
    const IS_FLOAT: bool;

    /// Convert to f32, normalizing integer formats to [0.0, 1.0].
    fn to_f32(self) -> f32;

    /// Convert from f32, clamping to the representable [0.0, 1.0] range
    /// for integer formats.
    fn from_f32(v: f32) -> Self;

    /// Zero value (black).
    fn zero() -> Self;

    /// Full-scale value (1.0 for floats, the maximum for integers).
    fn one() -> Self;
}

impl PixelFormat for u8 {
    const BITS: u32 = 8;
    const IS_FLOAT: bool = false;

    #[inline]
    fn to_f32(self) -> f32 {
        self as f32 / 255.0
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        255
    }
}

impl PixelFormat for u16 {
    const BITS: u32 = 16;
    const IS_FLOAT: bool = false;

    #[inline]
    fn to_f32(self) -> f32 {
        self as f32 / 65535.0
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        (v.clamp(0.0, 1.0) * 65535.0).round() as u16
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        65535
    }
}

impl PixelFormat for f16 {
    const BITS: u32 = 16;
    const IS_FLOAT: bool = true;

    #[inline]
    fn to_f32(self) -> f32 {
        self.to_f32()
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        f16::from_f32(v)
    }

    #[inline]
    fn zero() -> Self {
        f16::ZERO
    }

    #[inline]
    fn one() -> Self {
        f16::ONE
    }
}

impl PixelFormat for f32 {
    const BITS: u32 = 32;
    const IS_FLOAT: bool = true;

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_u8_roundtrip() {
        for v in [0u8, 1, 127, 128, 254, 255] {
            let f = v.to_f32();
            assert!((0.0..=1.0).contains(&f));
            assert_eq!(u8::from_f32(f), v);
        }
    }

    #[test]
    fn test_u16_roundtrip() {
        for v in [0u16, 1, 32767, 32768, 65534, 65535] {
            let f = v.to_f32();
            assert!((0.0..=1.0).contains(&f));
            assert_eq!(u16::from_f32(f), v);
        }
    }

    #[test]
    fn test_from_f32_clamps_integers() {
        assert_eq!(u8::from_f32(-0.5), 0);
        assert_eq!(u8::from_f32(1.5), 255);
        assert_eq!(u16::from_f32(-0.5), 0);
        assert_eq!(u16::from_f32(2.0), 65535);
    }

    #[test]
    fn test_f16_precision() {
        let v = f16::from_f32(0.5);
        assert_relative_eq!(v.to_f32(), 0.5);
        assert_eq!(f16::zero(), f16::ZERO);
        assert_eq!(f16::one(), f16::ONE);
    }

    #[test]
    fn test_float_passthrough() {
        assert_eq!(f32::from_f32(0.25), 0.25);
        assert_eq!(0.25f32.to_f32(), 0.25);
        assert!(f32::IS_FLOAT);
        assert!(!u16::IS_FLOAT);
        assert_eq!(u8::BITS, 8);
        assert_eq!(f32::BITS, 32);
    }
}

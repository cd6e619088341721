//! Row-parallel driver for the magenta correction.
//!
//! The correction is pure per pixel, so rows can be processed on rayon's
//! worker pool in any order without changing the result. This module is
//! gated behind the `parallel` feature (enabled by default).

use castor_core::{ChannelLayout, Error, Result};
use rayon::prelude::*;

use crate::magenta::{MagentaCorrection, apply_correction_inplace, apply_correction_rgba_inplace};

/// Applies the magenta correction to an interleaved sample buffer, one
/// image row per rayon task.
///
/// `width` is in pixels; `channels` must be 3 (RGB) or 4 (RGBA). The
/// buffer length must be a whole number of rows. An empty buffer is a
/// no-op.
///
/// # Errors
///
/// Returns [`Error::InvalidColorSpace`] for channel counts other than 3
/// or 4, and [`Error::InvalidDimensions`] when the buffer does not split
/// into rows of `width` pixels.
pub fn correct_rows_inplace(
    data: &mut [f32],
    width: usize,
    channels: usize,
    correction: &MagentaCorrection,
) -> Result<()> {
    if data.is_empty() {
        return Ok(());
    }

    let layout = ChannelLayout::from_count(channels as u32)
        .filter(|layout| layout.is_color())
        .ok_or_else(|| {
            Error::invalid_color_space(format!("expected 3 or 4 channels, got {channels}"))
        })?;

    let row_samples = width.checked_mul(channels).ok_or_else(|| {
        Error::invalid_dimensions(width as u32, 0, "row sample count overflows usize")
    })?;
    if row_samples == 0 {
        return Err(Error::invalid_dimensions(width as u32, 0, "zero-length rows"));
    }
    if data.len() % row_samples != 0 {
        return Err(Error::invalid_dimensions(
            width as u32,
            (data.len() / row_samples) as u32,
            format!(
                "buffer of {} samples is not a whole number of {row_samples}-sample rows",
                data.len()
            ),
        ));
    }

    if correction.is_identity() {
        return Ok(());
    }

    let rgba = layout.has_alpha();
    data.par_chunks_mut(row_samples).for_each(|row| {
        if rgba {
            apply_correction_rgba_inplace(row, correction);
        } else {
            apply_correction_inplace(row, correction);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halo_buffer(pixels: usize, channels: usize) -> Vec<f32> {
        let mut data = Vec::with_capacity(pixels * channels);
        for i in 0..pixels {
            let t = i as f32 / pixels as f32;
            data.push(0.9 - 0.2 * t);
            data.push(0.2 + 0.3 * t);
            data.push(0.85);
            if channels == 4 {
                data.push(1.0 - t);
            }
        }
        data
    }

    #[test]
    fn matches_serial_rgb() {
        let correction = MagentaCorrection::new(0.8);
        let mut parallel = halo_buffer(64, 3);
        let mut serial = parallel.clone();

        correct_rows_inplace(&mut parallel, 8, 3, &correction).unwrap();
        apply_correction_inplace(&mut serial, &correction);

        assert_eq!(parallel, serial);
    }

    #[test]
    fn matches_serial_rgba() {
        let correction = MagentaCorrection::new(1.0);
        let mut parallel = halo_buffer(32, 4);
        let mut serial = parallel.clone();

        correct_rows_inplace(&mut parallel, 4, 4, &correction).unwrap();
        apply_correction_rgba_inplace(&mut serial, &correction);

        assert_eq!(parallel, serial);
    }

    #[test]
    fn empty_buffer_is_noop() {
        let correction = MagentaCorrection::new(0.8);
        let mut data: Vec<f32> = Vec::new();
        assert!(correct_rows_inplace(&mut data, 0, 3, &correction).is_ok());
    }

    #[test]
    fn rejects_gray_channel_count() {
        let correction = MagentaCorrection::new(0.8);
        let mut data = vec![0.5; 8];
        let err = correct_rows_inplace(&mut data, 4, 2, &correction).unwrap_err();
        assert!(err.is_invalid_color_space());
    }

    #[test]
    fn rejects_ragged_buffer() {
        let correction = MagentaCorrection::new(0.8);
        // 10 samples do not split into rows of 2 RGB pixels.
        let mut data = vec![0.5; 10];
        let result = correct_rows_inplace(&mut data, 2, 3, &correction);
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn rejects_zero_width() {
        let correction = MagentaCorrection::new(0.8);
        let mut data = vec![0.5; 6];
        assert!(correct_rows_inplace(&mut data, 0, 3, &correction).is_err());
    }

    #[test]
    fn identity_leaves_buffer_alone() {
        let correction = MagentaCorrection::identity();
        let mut data = halo_buffer(16, 3);
        let before = data.clone();
        correct_rows_inplace(&mut data, 4, 3, &correction).unwrap();
        assert_eq!(data, before);
    }
}

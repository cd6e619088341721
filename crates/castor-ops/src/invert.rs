//! Channel inversion.
//!
//! Maps every color sample to its complement: `v' = 1 - v`. Applying the
//! inversion twice returns the original image, which is what makes it
//! useful as a bracketing step for operations that target the complement
//! of a color (see [`crate::magenta`]).
//!
//! Values are clamped to `[0, 1]` so out-of-range float input cannot
//! escape the normalized domain.

/// Inverts a single normalized sample.
#[inline]
pub fn invert_value(v: f32) -> f32 {
    (1.0 - v).clamp(0.0, 1.0)
}

/// Inverts an RGB triplet.
#[inline]
pub fn invert_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [
        invert_value(rgb[0]),
        invert_value(rgb[1]),
        invert_value(rgb[2]),
    ]
}

/// Inverts an interleaved RGB buffer in place.
pub fn apply_invert_inplace(buffer: &mut [f32]) {
    for v in buffer.iter_mut() {
        *v = invert_value(*v);
    }
}

/// Inverts an interleaved RGBA buffer in place.
///
/// Alpha is left untouched.
pub fn apply_invert_rgba_inplace(buffer: &mut [f32]) {
    for chunk in buffer.chunks_exact_mut(4) {
        chunk[0] = invert_value(chunk[0]);
        chunk[1] = invert_value(chunk[1]);
        chunk[2] = invert_value(chunk[2]);
        // alpha unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn endpoints() {
        assert_eq!(invert_value(0.0), 1.0);
        assert_eq!(invert_value(1.0), 0.0);
    }

    #[test]
    fn roundtrip() {
        for v in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            assert!((invert_value(invert_value(v)) - v).abs() < EPSILON);
        }
    }

    #[test]
    fn out_of_range_clamped() {
        assert_eq!(invert_value(-0.5), 1.0);
        assert_eq!(invert_value(2.0), 0.0);
    }

    #[test]
    fn rgb_triplet() {
        let out = invert_rgb([1.0, 0.0, 0.25]);
        assert!((out[0] - 0.0).abs() < EPSILON);
        assert!((out[1] - 1.0).abs() < EPSILON);
        assert!((out[2] - 0.75).abs() < EPSILON);
    }

    #[test]
    fn rgba_preserves_alpha() {
        let mut buffer = vec![0.2, 0.4, 0.6, 0.5, 1.0, 0.0, 0.5, 0.25];
        apply_invert_rgba_inplace(&mut buffer);
        assert!((buffer[0] - 0.8).abs() < EPSILON);
        assert!((buffer[3] - 0.5).abs() < EPSILON);
        assert!((buffer[4] - 0.0).abs() < EPSILON);
        assert!((buffer[7] - 0.25).abs() < EPSILON);
    }

    #[test]
    fn inplace_matches_value() {
        let mut buffer = vec![0.1, 0.5, 0.9, 0.3, 0.7, 0.2];
        let expected: Vec<f32> = buffer.iter().map(|&v| invert_value(v)).collect();
        apply_invert_inplace(&mut buffer);
        assert_eq!(buffer, expected);
    }
}

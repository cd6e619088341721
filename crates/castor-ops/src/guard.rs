//! Channel layout guards for color operations.
//!
//! Star-color corrections reason about the relationship between the red,
//! green, and blue channels. Applying them to grayscale data can produce
//! incorrect results, so the layouts without separate RGB channels are
//! rejected up front.

use castor_core::{ChannelLayout, Error, Result};

/// Validates that a channel layout carries separate RGB channels.
///
/// `Rgb` and `Rgba` pass; `Gray` and `GrayAlpha` fail with
/// [`Error::InvalidColorSpace`]. The `op` name is included in the error
/// message so callers can surface which operation refused the image.
///
/// # Example
///
/// ```rust,ignore
/// use castor_ops::guard::ensure_color_channels;
///
/// ensure_color_channels(image.layout(), "magenta correction")?;
/// // Now safe to touch individual channels
/// ```
pub fn ensure_color_channels(layout: ChannelLayout, op: &str) -> Result<()> {
    if layout.is_color() {
        return Ok(());
    }

    Err(Error::invalid_color_space(format!(
        "{op} requires an RGB image, got {layout}"
    )))
}

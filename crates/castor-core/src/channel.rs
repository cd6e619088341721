//! Channel layouts for loaded images.
//!
//! Astrophotography material arrives in a handful of interleaved layouts:
//! grayscale masters, grayscale with alpha, RGB composites and RGBA. The
//! correction only operates on the color layouts; the grayscale ones exist
//! so loaders can represent what they read and callers get a precise
//! rejection instead of silently corrected luminance data.

use std::fmt;

/// Interleaved channel layout of an image buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Single luminance channel.
    Gray,
    /// Luminance plus alpha.
    GrayAlpha,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ChannelLayout {
    /// Number of channels per pixel.
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::GrayAlpha => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Whether the layout carries an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::GrayAlpha | Self::Rgba)
    }

    /// Whether the layout carries distinct R, G and B channels.
    #[inline]
    pub const fn is_color(self) -> bool {
        matches!(self, Self::Rgb | Self::Rgba)
    }

    /// Maps a raw channel count to a layout, if one exists.
    ///
    /// Counts above 4 (spectral data, deep channels) have no layout here
    /// and return `None`.
    #[inline]
    pub const fn from_count(channels: u32) -> Option<Self> {
        match channels {
            1 => Some(Self::Gray),
            2 => Some(Self::GrayAlpha),
            3 => Some(Self::Rgb),
            4 => Some(Self::Rgba),
            _ => None,
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gray => "Gray",
            Self::GrayAlpha => "Gray+A",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
        };
        f.write_str(name)
    }
}

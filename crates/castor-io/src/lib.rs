//! # castor-io
//!
//! Image I/O for star-correction pipelines.
//!
//! This crate reads and writes the raster formats astrophotography
//! stacking tools commonly export:
//!
//! - **PNG** - Lossless 8/16-bit with alpha
//! - **TIFF** - 8/16-bit integer and 32-bit float, LZW compression
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use castor_io::{read, write};
//!
//! // Read any supported format (auto-detected)
//! let image = read("stack.tif")?;
//!
//! // Write to a different format
//! write("stack.png", &image)?;
//! ```
//!
//! Grayscale files are read as grayscale. Deciding whether that is
//! acceptable is left to the operation consuming the image; the color
//! corrections in `castor-ops` reject such layouts.
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Bit Depths | Features |
//! |--------|------|-------|------------|----------|
//! | PNG | Yes | Yes | 8, 16 | Alpha, grayscale |
//! | TIFF | Yes | Yes | 8, 16, 32f | LZW compression, grayscale |
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `tiff` - TIFF support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "tiff")]
pub mod tiff;

pub use detect::Format;
pub use error::{IoError, IoResult};

use castor_core::{ChannelLayout, Image, PixelFormat};
use std::path::Path;
use tracing::debug;

/// Reads an image from a file, auto-detecting the format.
///
/// The format is detected by magic bytes first, file extension second.
///
/// # Example
///
/// ```rust,ignore
/// use castor_io::read;
///
/// let image = read("stack.tif")?;
/// println!("Size: {}x{}", image.width, image.height);
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the format is not
/// supported, or the file is corrupted.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let path = path.as_ref();
    let format = Format::detect(path)?;

    let image = match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "tiff")]
        Format::Tiff => tiff::read(path),

        _ => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }?;

    debug!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        channels = image.channels,
        format = %image.format,
        "read image"
    );

    Ok(image)
}

/// Writes an image to a file, detecting format from extension.
///
/// # Example
///
/// ```rust,ignore
/// use castor_io::{read, write};
///
/// let image = read("stack.tif")?;
/// write("preview.png", &image)?;
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be created, the extension maps to
/// no supported format, or the pixel data is incompatible with it.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);

    debug!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        format = %image.format,
        target = %format,
        "writing image"
    );

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        #[cfg(feature = "tiff")]
        Format::Tiff => tiff::write(path, image),

        _ => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

/// Image data container for I/O operations.
///
/// This is a format-agnostic container holding pixel data at whatever
/// bit depth the file carried. Integer data stays integer until an
/// operation asks for floats, so a read/write round trip is lossless.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of channels (1 gray, 2 gray+alpha, 3 RGB, 4 RGBA).
    pub channels: u32,
    /// Per-sample storage format.
    pub format: SampleFormat,
    /// Raw interleaved pixel data.
    pub data: PixelData,
}

/// Per-sample storage format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// 8-bit unsigned integer per channel.
    U8,
    /// 16-bit unsigned integer per channel.
    U16,
    /// 32-bit float per channel.
    F32,
}

/// Raw pixel data storage.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData {
    /// 8-bit unsigned data.
    U8(Vec<u8>),
    /// 16-bit unsigned data.
    U16(Vec<u16>),
    /// 32-bit float data.
    F32(Vec<f32>),
}

impl ImageData {
    /// Creates ImageData from u8 pixel data.
    pub fn from_u8(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            format: SampleFormat::U8,
            data: PixelData::U8(data),
        }
    }

    /// Creates ImageData from u16 pixel data.
    pub fn from_u16(width: u32, height: u32, channels: u32, data: Vec<u16>) -> Self {
        Self {
            width,
            height,
            channels,
            format: SampleFormat::U16,
            data: PixelData::U16(data),
        }
    }

    /// Creates ImageData from f32 pixel data.
    pub fn from_f32(width: u32, height: u32, channels: u32, data: Vec<f32>) -> Self {
        Self {
            width,
            height,
            channels,
            format: SampleFormat::F32,
            data: PixelData::F32(data),
        }
    }

    /// Returns the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the total number of samples (pixels * channels).
    pub fn sample_count(&self) -> usize {
        self.pixel_count() * self.channels as usize
    }

    /// Returns the channel layout, if the channel count maps to one.
    pub fn layout(&self) -> Option<ChannelLayout> {
        ChannelLayout::from_count(self.channels)
    }

    /// Returns true if the image has separate RGB channels.
    pub fn is_color(&self) -> bool {
        self.layout().is_some_and(|layout| layout.is_color())
    }

    /// Converts pixel data to normalized f32 (for processing).
    pub fn to_f32(&self) -> Vec<f32> {
        match &self.data {
            PixelData::U8(data) => data.iter().map(|&v| v as f32 / 255.0).collect(),
            PixelData::U16(data) => data.iter().map(|&v| v as f32 / 65535.0).collect(),
            PixelData::F32(data) => data.clone(),
        }
    }

    /// Converts pixel data to u8, rounding float samples.
    pub fn to_u8(&self) -> Vec<u8> {
        match &self.data {
            PixelData::U8(data) => data.clone(),
            PixelData::U16(data) => data.iter().map(|&v| (v >> 8) as u8).collect(),
            PixelData::F32(data) => data.iter().map(|&v| u8::from_f32(v)).collect(),
        }
    }

    /// Converts pixel data to u16, rounding float samples.
    pub fn to_u16(&self) -> Vec<u16> {
        match &self.data {
            PixelData::U8(data) => data.iter().map(|&v| ((v as u16) << 8) | v as u16).collect(),
            PixelData::U16(data) => data.clone(),
            PixelData::F32(data) => data.iter().map(|&v| u16::from_f32(v)).collect(),
        }
    }

    /// Returns a copy converted to the given sample format.
    pub fn convert_to(&self, format: SampleFormat) -> Self {
        match format {
            SampleFormat::U8 => Self::from_u8(self.width, self.height, self.channels, self.to_u8()),
            SampleFormat::U16 => {
                Self::from_u16(self.width, self.height, self.channels, self.to_u16())
            }
            SampleFormat::F32 => {
                Self::from_f32(self.width, self.height, self.channels, self.to_f32())
            }
        }
    }

    /// Converts into a typed f32 image for processing.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Format`] if the channel count maps to no layout
    /// or the sample count does not match the dimensions.
    pub fn to_image_f32(&self) -> IoResult<Image<f32>> {
        let layout = ChannelLayout::from_count(self.channels).ok_or_else(|| {
            IoError::Format(format!("no channel layout for {} channels", self.channels))
        })?;

        Image::from_vec(self.width, self.height, layout, self.to_f32())
            .map_err(|e| IoError::Format(e.to_string()))
    }

    /// Creates ImageData from a processed f32 image.
    pub fn from_image(image: &Image<f32>) -> Self {
        Self::from_f32(
            image.width(),
            image.height(),
            image.channels() as u32,
            image.data().to_vec(),
        )
    }
}

impl SampleFormat {
    /// Returns bytes per channel for this format.
    pub fn bytes_per_channel(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::F32 => 4,
        }
    }
}

impl std::fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::U8 => "8-bit integer",
            Self::U16 => "16-bit integer",
            Self::F32 => "32-bit float",
        };
        write!(f, "{name}")
    }
}

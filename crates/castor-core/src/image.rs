//! Interleaved image buffer.
//!
//! [`Image`] is the container the correction pipeline operates on: a flat,
//! row-major, interleaved sample buffer plus its dimensions and
//! [`ChannelLayout`]. It is a plain owned value; operations take it by
//! reference and produce whole new images, matching the pure-transform
//! contract of the pipeline (no partial results are ever observable).
//!
//! The sample type is generic over [`PixelFormat`], so 8-bit previews and
//! 16-bit or float masters use the same code paths. Processing happens in
//! f32; [`Image::convert`] moves buffers between storage formats.
//!
//! # Example
//!
//! ```
//! use castor_core::{ChannelLayout, Image};
//!
//! let mut img: Image<f32> = Image::new(64, 48, ChannelLayout::Rgb);
//! img.set_pixel(3, 4, &[1.0, 0.2, 1.0]).unwrap();
//! assert_eq!(img.pixel(3, 4).unwrap(), &[1.0, 0.2, 1.0]);
//! ```

use crate::channel::ChannelLayout;
use crate::error::{Error, Result};
use crate::pixel::PixelFormat;

/// An owned interleaved image buffer.
///
/// Samples are stored row-major, pixels interleaved: for an RGB image the
/// buffer is `R G B R G B ...` left to right, top to bottom.
#[derive(Clone, PartialEq)]
pub struct Image<T: PixelFormat = f32> {
    data: Vec<T>,
    width: u32,
    height: u32,
    layout: ChannelLayout,
}

impl<T: PixelFormat> Image<T> {
    /// Creates a zero-filled (black, transparent) image.
    pub fn new(width: u32, height: u32, layout: ChannelLayout) -> Self {
        let samples = width as usize * height as usize * layout.count();
        Self {
            data: vec![T::zero(); samples],
            width,
            height,
            layout,
        }
    }

    /// Creates an image from existing sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not exactly
    /// `width * height * layout.count()`.
    pub fn from_vec(width: u32, height: u32, layout: ChannelLayout, data: Vec<T>) -> Result<Self> {
        let expected = width as usize * height as usize * layout.count();
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            layout,
        })
    }

    /// Creates an image with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] if `pixel.len()` does not match
    /// the layout's channel count.
    pub fn filled(width: u32, height: u32, layout: ChannelLayout, pixel: &[T]) -> Result<Self> {
        if pixel.len() != layout.count() {
            return Err(Error::channel_mismatch(
                layout.count() as u8,
                pixel.len() as u8,
            ));
        }
        let pixel_count = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixel_count * layout.count());
        for _ in 0..pixel_count {
            data.extend_from_slice(pixel);
        }
        Ok(Self {
            data,
            width,
            height,
            layout,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the channel layout.
    #[inline]
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Returns the number of channels per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.count()
    }

    /// Whether the image has distinct R, G and B channels.
    #[inline]
    pub fn is_color(&self) -> bool {
        self.layout.is_color()
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the total number of samples (pixels * channels).
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the raw sample data.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the raw sample data mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the image and returns its sample buffer.
    #[inline]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn sample_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.layout.count()
    }

    /// Returns the channel values of the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the
    /// image.
    pub fn pixel(&self, x: u32, y: u32) -> Result<&[T]> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        let offset = self.sample_offset(x, y);
        Ok(&self.data[offset..offset + self.layout.count()])
    }

    /// Overwrites the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the image and
    /// [`Error::ChannelMismatch`] if `pixel.len()` does not match the
    /// layout.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: &[T]) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        if pixel.len() != self.layout.count() {
            return Err(Error::channel_mismatch(
                self.layout.count() as u8,
                pixel.len() as u8,
            ));
        }
        let offset = self.sample_offset(x, y);
        self.data[offset..offset + pixel.len()].copy_from_slice(pixel);
        Ok(())
    }

    /// Iterates over pixels as channel slices, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.layout.count())
    }

    /// Iterates over pixels as mutable channel slices, row-major.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.data.chunks_exact_mut(self.layout.count())
    }

    /// Converts the sample format, going through normalized f32.
    ///
    /// Converting to a narrower format quantizes; converting back will not
    /// restore the lost precision.
    pub fn convert<U: PixelFormat>(&self) -> Image<U> {
        Image {
            data: self.data.iter().map(|&v| U::from_f32(v.to_f32())).collect(),
            width: self.width,
            height: self.height,
            layout: self.layout,
        }
    }

    /// Converts to an f32 image, the working format of the pipeline.
    #[inline]
    pub fn to_f32(&self) -> Image<f32> {
        self.convert()
    }
}

impl<T: PixelFormat> std::fmt::Debug for Image<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("layout", &self.layout)
            .field("bits", &T::BITS)
            .field("float", &T::IS_FLOAT)
            .finish()
    }
}

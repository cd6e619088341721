//! PNG format support.
//!
//! Provides reading and writing of PNG files with support for 8-bit and
//! 16-bit images, alpha channels, and grayscale. Grayscale files are
//! read as grayscale rather than expanded to RGB, so downstream color
//! operations can tell the difference.
//!
//! # Example
//!
//! ```rust,ignore
//! use castor_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use crate::{ImageData, IoError, IoResult, PixelData, SampleFormat};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Reads a PNG file from the given path.
///
/// # Example
///
/// ```rust,ignore
/// use castor_io::png;
///
/// let image = png::read("input.png")?;
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width;
    let height = info.height;

    let (channels, format, data) = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => {
            (3, SampleFormat::U8, PixelData::U8(buf[..info.buffer_size()].to_vec()))
        }
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            (4, SampleFormat::U8, PixelData::U8(buf[..info.buffer_size()].to_vec()))
        }
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            (1, SampleFormat::U8, PixelData::U8(buf[..info.buffer_size()].to_vec()))
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            (2, SampleFormat::U8, PixelData::U8(buf[..info.buffer_size()].to_vec()))
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            let u16_data = bytes_to_u16(&buf[..info.buffer_size()]);
            (3, SampleFormat::U16, PixelData::U16(u16_data))
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
            let u16_data = bytes_to_u16(&buf[..info.buffer_size()]);
            (4, SampleFormat::U16, PixelData::U16(u16_data))
        }
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => {
            let u16_data = bytes_to_u16(&buf[..info.buffer_size()]);
            (1, SampleFormat::U16, PixelData::U16(u16_data))
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Sixteen) => {
            let u16_data = bytes_to_u16(&buf[..info.buffer_size()]);
            (2, SampleFormat::U16, PixelData::U16(u16_data))
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    Ok(ImageData {
        width,
        height,
        channels,
        format,
        data,
    })
}

/// Writes an image to a PNG file.
///
/// 8-bit data stays 8-bit; 16-bit and float data go out as 16-bit, which
/// is the deepest PNG supports.
///
/// # Example
///
/// ```rust,ignore
/// use castor_io::png;
///
/// png::write("output.png", &image)?;
/// ```
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let color_type = match image.channels {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => {
            return Err(IoError::EncodeError(format!(
                "unsupported channel count: {n}"
            )));
        }
    };

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(color_type);
    encoder.set_compression(png::Compression::default());

    // Add sRGB chunk
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let bytes = match image.format {
        SampleFormat::U8 => {
            encoder.set_depth(png::BitDepth::Eight);
            image.to_u8()
        }
        SampleFormat::U16 | SampleFormat::F32 => {
            encoder.set_depth(png::BitDepth::Sixteen);
            u16_to_be_bytes(&image.to_u16())
        }
    };

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

/// Converts big-endian byte slice to u16 vector.
fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}

/// Converts u16 samples to the big-endian bytes PNG stores.
fn u16_to_be_bytes(samples: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for v in samples {
        bytes.extend_from_slice(&v.to_be_bytes());
    }
    bytes
}

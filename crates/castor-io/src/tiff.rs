//! TIFF format support.
//!
//! Provides reading and writing of TIFF files, the workhorse export
//! format of stacking tools. Data is kept at its native bit depth in
//! both directions: 8-bit and 16-bit integer and 32-bit float images
//! round-trip without loss. Output is LZW compressed.
//!
//! # Example
//!
//! ```rust,ignore
//! use castor_io::tiff;
//!
//! let image = tiff::read("stack.tif")?;
//! tiff::write("output.tif", &image)?;
//! ```

use crate::{ImageData, IoError, IoResult, PixelData, SampleFormat};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads a TIFF file from the given path.
///
/// # Example
///
/// ```rust,ignore
/// use castor_io::tiff;
///
/// let image = tiff::read("input.tiff")?;
/// println!("Size: {}x{}", image.width, image.height);
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    use tiff::ColorType;
    use tiff::decoder::{Decoder, DecodingResult};

    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut decoder =
        Decoder::new(reader).map_err(|e: tiff::TiffError| IoError::DecodeError(e.to_string()))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e: tiff::TiffError| IoError::DecodeError(e.to_string()))?;
    let color_type = decoder
        .colortype()
        .map_err(|e: tiff::TiffError| IoError::DecodeError(e.to_string()))?;

    let result = decoder
        .read_image()
        .map_err(|e: tiff::TiffError| IoError::DecodeError(e.to_string()))?;

    let (data, format, channels) = match (color_type, result) {
        // 8-bit integer
        (ColorType::Gray(8), DecodingResult::U8(buf)) => (PixelData::U8(buf), SampleFormat::U8, 1),
        (ColorType::RGB(8), DecodingResult::U8(buf)) => (PixelData::U8(buf), SampleFormat::U8, 3),
        (ColorType::RGBA(8), DecodingResult::U8(buf)) => (PixelData::U8(buf), SampleFormat::U8, 4),
        // 16-bit integer
        (ColorType::Gray(16), DecodingResult::U16(buf)) => {
            (PixelData::U16(buf), SampleFormat::U16, 1)
        }
        (ColorType::RGB(16), DecodingResult::U16(buf)) => {
            (PixelData::U16(buf), SampleFormat::U16, 3)
        }
        (ColorType::RGBA(16), DecodingResult::U16(buf)) => {
            (PixelData::U16(buf), SampleFormat::U16, 4)
        }
        // 32-bit float
        (ColorType::Gray(32), DecodingResult::F32(buf)) => {
            (PixelData::F32(buf), SampleFormat::F32, 1)
        }
        (ColorType::RGB(32), DecodingResult::F32(buf)) => {
            (PixelData::F32(buf), SampleFormat::F32, 3)
        }
        (ColorType::RGBA(32), DecodingResult::F32(buf)) => {
            (PixelData::F32(buf), SampleFormat::F32, 4)
        }
        (ct, _) => {
            return Err(IoError::DecodeError(format!(
                "unsupported TIFF color type: {:?}",
                ct
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

/// Writes an image to a TIFF file with LZW compression.
///
/// The sample format is preserved: integer data is written at its bit
/// depth, float data as 32-bit IEEE. Gray+alpha data has no TIFF
/// encoding here; write it as PNG instead.
///
/// # Example
///
/// ```rust,ignore
/// use castor_io::tiff;
///
/// tiff::write("output.tiff", &image)?;
/// ```
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    use tiff::encoder::{TiffEncoder, colortype, compression};

    let file = File::create(path.as_ref())?;

    let mut encoder =
        TiffEncoder::new(file).map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;

    let width = image.width;
    let height = image.height;

    match (&image.data, image.channels) {
        (PixelData::U8(data), 1) => {
            encoder
                .write_image_with_compression::<colortype::Gray8, compression::Lzw>(
                    width,
                    height,
                    compression::Lzw,
                    data,
                )
                .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
        }
        (PixelData::U8(data), 3) => {
            encoder
                .write_image_with_compression::<colortype::RGB8, compression::Lzw>(
                    width,
                    height,
                    compression::Lzw,
                    data,
                )
                .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
        }
        (PixelData::U8(data), 4) => {
            encoder
                .write_image_with_compression::<colortype::RGBA8, compression::Lzw>(
                    width,
                    height,
                    compression::Lzw,
                    data,
                )
                .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
        }
        (PixelData::U16(data), 1) => {
            encoder
                .write_image_with_compression::<colortype::Gray16, compression::Lzw>(
                    width,
                    height,
                    compression::Lzw,
                    data,
                )
                .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
        }
        (PixelData::U16(data), 3) => {
            encoder
                .write_image_with_compression::<colortype::RGB16, compression::Lzw>(
                    width,
                    height,
                    compression::Lzw,
                    data,
                )
                .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
        }
        (PixelData::U16(data), 4) => {
            encoder
                .write_image_with_compression::<colortype::RGBA16, compression::Lzw>(
                    width,
                    height,
                    compression::Lzw,
                    data,
                )
                .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
        }
        (PixelData::F32(data), 1) => {
            encoder
                .write_image_with_compression::<colortype::Gray32Float, compression::Lzw>(
                    width,
                    height,
                    compression::Lzw,
                    data,
                )
                .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
        }
        (PixelData::F32(data), 3) => {
            encoder
                .write_image_with_compression::<colortype::RGB32Float, compression::Lzw>(
                    width,
                    height,
                    compression::Lzw,
                    data,
                )
                .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
        }
        (PixelData::F32(data), 4) => {
            encoder
                .write_image_with_compression::<colortype::RGBA32Float, compression::Lzw>(
                    width,
                    height,
                    compression::Lzw,
                    data,
                )
                .map_err(|e: tiff::TiffError| IoError::EncodeError(e.to_string()))?;
        }
        (_, n) => {
            return Err(IoError::EncodeError(format!(
                "unsupported channel count for TIFF: {}",
                n
            )));
        }
    }

    Ok(())
}

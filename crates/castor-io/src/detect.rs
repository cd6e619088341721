//! Format detection utilities.
//!
//! Detects image formats from file extensions and magic bytes.

use crate::IoResult;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG format.
    Png,
    /// TIFF format.
    Tiff,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from file path (extension + magic bytes).
    ///
    /// First checks magic bytes, falls back to extension.
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();

        if let Ok(format) = Self::from_magic_bytes(path) {
            if format != Format::Unknown {
                return Ok(format);
            }
        }

        Ok(Self::from_extension(path))
    }

    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("png") => Format::Png,
            Some("tif") | Some("tiff") => Format::Tiff,
            _ => Format::Unknown,
        }
    }

    /// Detects format from file magic bytes.
    pub fn from_magic_bytes<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let mut file = File::open(path)?;
        let mut header = [0u8; 8];

        let bytes_read = file.read(&mut header)?;
        if bytes_read < 4 {
            return Ok(Format::Unknown);
        }

        Ok(Self::from_bytes(&header[..bytes_read]))
    }

    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.len() < 4 {
            return Format::Unknown;
        }

        // PNG: 0x89 0x50 0x4E 0x47 0x0D 0x0A 0x1A 0x0A
        if bytes.len() >= 8 && bytes[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
            return Format::Png;
        }

        // TIFF: II (little-endian) or MM (big-endian)
        if bytes[0..4] == [0x49, 0x49, 0x2A, 0x00] {
            return Format::Tiff;
        }
        if bytes[0..4] == [0x4D, 0x4D, 0x00, 0x2A] {
            return Format::Tiff;
        }

        Format::Unknown
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Png => "PNG",
            Format::Tiff => "TIFF",
            Format::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_detection() {
        assert_eq!(Format::from_extension("test.png"), Format::Png);
        assert_eq!(Format::from_extension("test.PNG"), Format::Png);
        assert_eq!(Format::from_extension("test.tif"), Format::Tiff);
        assert_eq!(Format::from_extension("test.tiff"), Format::Tiff);
        assert_eq!(Format::from_extension("test.fits"), Format::Unknown);
        assert_eq!(Format::from_extension("no_extension"), Format::Unknown);
    }

    #[test]
    fn test_magic_bytes() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(Format::from_bytes(&png), Format::Png);

        let tiff_le = [0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
        assert_eq!(Format::from_bytes(&tiff_le), Format::Tiff);

        let tiff_be = [0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08];
        assert_eq!(Format::from_bytes(&tiff_be), Format::Tiff);

        let unknown = [0x00, 0x00, 0x00, 0x00];
        assert_eq!(Format::from_bytes(&unknown), Format::Unknown);

        let short = [0x89, 0x50];
        assert_eq!(Format::from_bytes(&short), Format::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(Format::Png.to_string(), "PNG");
        assert_eq!(Format::Tiff.to_string(), "TIFF");
    }
}

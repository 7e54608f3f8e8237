//! Format detection utilities.
//!
//! Detects image formats from file extensions and magic bytes. Magic bytes
//! win when both are available, so a mislabeled file is still decoded by
//! the right codec (or rejected honestly).

use crate::IoResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
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
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("png") => Format::Png,
            Some("jpg") | Some("jpeg") => Format::Jpeg,
            _ => Format::Unknown,
        }
    }

    /// Detects format from file magic bytes.
    pub fn from_magic_bytes<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let mut file = File::open(path)?;
        let mut header = [0u8; 8];

        let bytes_read = file.read(&mut header)?;
        if bytes_read < 3 {
            return Ok(Format::Unknown);
        }

        Ok(Self::from_bytes(&header[..bytes_read]))
    }

    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        // PNG: 0x89 0x50 0x4E 0x47 0x0D 0x0A 0x1A 0x0A
        if bytes.len() >= 8 && bytes[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
            return Format::Png;
        }

        // JPEG: 0xFF 0xD8 0xFF
        if bytes.len() >= 3 && bytes[0..3] == [0xFF, 0xD8, 0xFF] {
            return Format::Jpeg;
        }

        Format::Unknown
    }

    /// Returns the canonical output extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Jpeg => "jpg",
            Format::Unknown => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("a.png"), Format::Png);
        assert_eq!(Format::from_extension("a.PNG"), Format::Png);
        assert_eq!(Format::from_extension("a.jpg"), Format::Jpeg);
        assert_eq!(Format::from_extension("a.jpeg"), Format::Jpeg);
        assert_eq!(Format::from_extension("a.gif"), Format::Unknown);
        assert_eq!(Format::from_extension("noext"), Format::Unknown);
    }

    #[test]
    fn test_from_bytes() {
        let png_magic = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(Format::from_bytes(&png_magic), Format::Png);
        assert_eq!(Format::from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]), Format::Jpeg);
        assert_eq!(Format::from_bytes(&[0x47, 0x49, 0x46]), Format::Unknown); // GIF
        assert_eq!(Format::from_bytes(&[]), Format::Unknown);
    }

    #[test]
    fn test_extension() {
        assert_eq!(Format::Png.extension(), "png");
        assert_eq!(Format::Jpeg.extension(), "jpg");
    }
}

//! JPEG format support.
//!
//! Provides reading and writing of JPEG files - the lossy format the
//! reference converter emits. Decoded images are normalized to RGBA8
//! (opaque alpha; JPEG has no alpha channel), and writing strips alpha
//! before encoding.
//!
//! # Quality
//!
//! Output quality defaults to 90, the converter's fixed encode setting.
//! Use [`JpegWriterOptions`] to override:
//!
//! ```rust,ignore
//! use grayify_io::jpeg::{JpegWriter, JpegWriterOptions};
//! use grayify_io::FormatWriter;
//!
//! let writer = JpegWriter::with_options(JpegWriterOptions { quality: 75 });
//! writer.write("preview.jpg", &image)?;
//! ```

use crate::{FormatReader, FormatWriter, IoError, IoResult};
use grayify_core::PixelBuffer;
use std::io::{BufReader, Cursor};
use std::path::Path;

/// Options for reading JPEG files.
///
/// Currently minimal - JPEG reading is automatic.
#[derive(Debug, Clone, Default)]
pub struct JpegReaderOptions {
    /// Reserved for future use.
    _reserved: (),
}

/// Options for writing JPEG files.
#[derive(Debug, Clone)]
pub struct JpegWriterOptions {
    /// Quality level 1-100. Higher = better quality, larger files.
    /// Default: 90 (the converter's fixed output setting).
    pub quality: u8,
}

impl Default for JpegWriterOptions {
    fn default() -> Self {
        Self { quality: 90 }
    }
}

/// JPEG file reader.
///
/// Implements [`FormatReader`] for reading JPEG files into RGBA8 buffers.
/// Grayscale and CMYK sources are converted to RGB during the read.
#[derive(Debug, Clone)]
pub struct JpegReader {
    #[allow(dead_code)]
    options: JpegReaderOptions,
}

impl JpegReader {
    /// Creates a new reader with default options.
    pub fn new() -> Self {
        Self::with_options(JpegReaderOptions::default())
    }

    /// Internal read implementation.
    fn read_impl<R: std::io::Read>(&self, reader: R) -> IoResult<PixelBuffer> {
        let buf_reader = BufReader::new(reader);
        let mut decoder = jpeg_decoder::Decoder::new(buf_reader);
        let pixels = decoder
            .decode()
            .map_err(|e| IoError::Decode(e.to_string()))?;

        let info = decoder
            .info()
            .ok_or_else(|| IoError::Decode("missing JPEG info".into()))?;

        let width = info.width as u32;
        let height = info.height as u32;

        // Normalize to RGBA with opaque alpha
        let rgba: Vec<u8> = match info.pixel_format {
            jpeg_decoder::PixelFormat::RGB24 => pixels
                .chunks(3)
                .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
                .collect(),
            jpeg_decoder::PixelFormat::L8 => {
                pixels.iter().flat_map(|&g| [g, g, g, 255]).collect()
            }
            jpeg_decoder::PixelFormat::L16 => {
                // 16-bit grayscale, big-endian; keep the high byte
                pixels
                    .chunks(2)
                    .flat_map(|l16| {
                        let g = l16[0];
                        [g, g, g, 255]
                    })
                    .collect()
            }
            jpeg_decoder::PixelFormat::CMYK32 => {
                // CMYK to RGB (approximate conversion)
                pixels
                    .chunks(4)
                    .flat_map(|cmyk| {
                        let c = cmyk[0] as f32 / 255.0;
                        let m = cmyk[1] as f32 / 255.0;
                        let y = cmyk[2] as f32 / 255.0;
                        let k = cmyk[3] as f32 / 255.0;

                        let r = ((1.0 - c) * (1.0 - k) * 255.0) as u8;
                        let g = ((1.0 - m) * (1.0 - k) * 255.0) as u8;
                        let b = ((1.0 - y) * (1.0 - k) * 255.0) as u8;

                        [r, g, b, 255]
                    })
                    .collect()
            }
        };

        Ok(PixelBuffer::from_rgba(width, height, rgba)?)
    }
}

impl Default for JpegReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatReader<JpegReaderOptions> for JpegReader {
    /// Returns "JPEG".
    fn format_name(&self) -> &'static str {
        "JPEG"
    }

    /// Returns `["jpg", "jpeg"]`.
    fn extensions(&self) -> &'static [&'static str] {
        &["jpg", "jpeg"]
    }

    /// Checks for JPEG magic bytes (0xFF, 0xD8, 0xFF).
    fn can_read(&self, header: &[u8]) -> bool {
        header.len() >= 3 && header[0] == 0xFF && header[1] == 0xD8 && header[2] == 0xFF
    }

    /// Reads a JPEG file from disk.
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<PixelBuffer> {
        let data = std::fs::read(path.as_ref())?;
        self.read_impl(Cursor::new(&data))
    }

    /// Reads a JPEG from a byte slice.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer> {
        self.read_impl(Cursor::new(data))
    }

    /// Creates reader with custom options.
    fn with_options(options: JpegReaderOptions) -> Self {
        Self { options }
    }
}

/// JPEG file writer.
///
/// Implements [`FormatWriter`] for writing RGBA8 buffers as JPEG. Alpha is
/// stripped before encoding.
#[derive(Debug, Clone)]
pub struct JpegWriter {
    options: JpegWriterOptions,
}

impl JpegWriter {
    /// Creates a new writer with default options (quality 90).
    pub fn new() -> Self {
        Self::with_options(JpegWriterOptions::default())
    }

    /// Internal write implementation.
    fn write_impl(&self, image: &PixelBuffer) -> IoResult<Vec<u8>> {
        use jpeg_encoder::{ColorType as JpegColorType, Encoder};

        // Strip alpha
        let rgb: Vec<u8> = image
            .data()
            .chunks(4)
            .flat_map(|rgba| [rgba[0], rgba[1], rgba[2]])
            .collect();

        let mut buffer = Vec::new();
        let encoder = Encoder::new(&mut buffer, self.options.quality);
        encoder
            .encode(
                &rgb,
                image.width() as u16,
                image.height() as u16,
                JpegColorType::Rgb,
            )
            .map_err(|e: jpeg_encoder::EncodingError| IoError::Encode(e.to_string()))?;

        Ok(buffer)
    }
}

impl Default for JpegWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatWriter<JpegWriterOptions> for JpegWriter {
    /// Returns "JPEG".
    fn format_name(&self) -> &'static str {
        "JPEG"
    }

    /// Returns `["jpg", "jpeg"]`.
    fn extensions(&self) -> &'static [&'static str] {
        &["jpg", "jpeg"]
    }

    /// Writes a JPEG file to disk.
    fn write<P: AsRef<Path>>(&self, path: P, image: &PixelBuffer) -> IoResult<()> {
        let data = self.write_to_memory(image)?;
        std::fs::write(path.as_ref(), data)?;
        Ok(())
    }

    /// Writes a JPEG to a byte vector.
    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>> {
        self.write_impl(image)
    }

    /// Creates writer with custom options.
    fn with_options(options: JpegWriterOptions) -> Self {
        Self { options }
    }
}

/// Reads a JPEG file with default options.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    JpegReader::new().read(path)
}

/// Writes a JPEG file with default options (quality 90).
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    JpegWriter::new().write(path, image)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests basic roundtrip.
    #[test]
    fn test_roundtrip() {
        let mut image = PixelBuffer::new(32, 32);
        for y in 0..32 {
            for x in 0..32 {
                image.set_pixel(x, y, [(x * 8) as u8, (y * 8) as u8, 128, 255]);
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.jpg");

        write(&path, &image).expect("Write failed");
        let loaded = read(&path).expect("Read failed");

        assert_eq!(loaded.dimensions(), (32, 32));
        // Lossy format: alpha is opaque, pixels approximate
        assert!(loaded.pixels().all(|px| px[3] == 255));
    }

    /// Tests that flat gray data survives the lossy encode closely.
    #[test]
    fn test_flat_gray_close() {
        let image = PixelBuffer::filled(16, 16, [128, 128, 128, 255]);

        let bytes = JpegWriter::new().write_to_memory(&image).expect("encode");
        let loaded = JpegReader::new().read_from_memory(&bytes).expect("decode");

        for px in loaded.pixels() {
            assert!((px[0] as i32 - 128).abs() <= 2, "got {}", px[0]);
        }
    }

    /// Tests quality options.
    #[test]
    fn test_quality_options() {
        let mut image = PixelBuffer::new(16, 16);
        for (i, px) in image.pixels_mut().enumerate() {
            px[0] = (i * 31) as u8;
            px[1] = (i * 17) as u8;
            px[2] = (i * 5) as u8;
            px[3] = 255;
        }

        let low = JpegWriter::with_options(JpegWriterOptions { quality: 50 })
            .write_to_memory(&image)
            .expect("encode");
        let high = JpegWriter::with_options(JpegWriterOptions { quality: 99 })
            .write_to_memory(&image)
            .expect("encode");

        assert!(high.len() >= low.len());
    }

    /// Tests magic byte detection.
    #[test]
    fn test_can_read() {
        let reader = JpegReader::new();

        assert!(reader.can_read(&[0xFF, 0xD8, 0xFF, 0xE0]));
        assert!(reader.can_read(&[0xFF, 0xD8, 0xFF, 0xE1]));
        assert!(!reader.can_read(&[0x89, 0x50, 0x4E, 0x47])); // PNG
    }

    /// Tests memory roundtrip.
    #[test]
    fn test_memory_roundtrip() {
        let image = PixelBuffer::filled(16, 16, [100, 100, 100, 255]);

        let bytes = JpegWriter::new().write_to_memory(&image).expect("encode");
        let loaded = JpegReader::new().read_from_memory(&bytes).expect("decode");

        assert_eq!(loaded.dimensions(), (16, 16));
    }
}

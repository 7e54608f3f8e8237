//! PNG format support.
//!
//! Provides reading and writing of PNG files. Decoded images are
//! normalized to interleaved RGBA8 regardless of the source color type, so
//! the rest of the pipeline sees exactly one buffer shape.
//!
//! # Features
//!
//! - 8-bit and 16-bit sources (16-bit reduced to 8)
//! - Grayscale, grayscale+alpha, RGB, RGBA color types
//! - Alpha preserved end to end; losslessly rewritten on output
//!
//! # Example
//!
//! ```rust,ignore
//! use grayify_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use crate::{FormatReader, FormatWriter, IoError, IoResult};
use grayify_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Options for reading PNG files.
///
/// Currently minimal - PNG reading is automatic.
#[derive(Debug, Clone, Default)]
pub struct PngReaderOptions {
    /// Reserved for future use.
    _reserved: (),
}

/// Options for writing PNG files.
#[derive(Debug, Clone, Default)]
pub struct PngWriterOptions {
    /// Reserved for future use.
    _reserved: (),
}

/// PNG file reader.
///
/// Implements [`FormatReader`] for reading PNG files into RGBA8 buffers.
#[derive(Debug, Clone)]
pub struct PngReader {
    #[allow(dead_code)]
    options: PngReaderOptions,
}

impl PngReader {
    /// Creates a new reader with default options.
    pub fn new() -> Self {
        Self::with_options(PngReaderOptions::default())
    }

    /// Internal read implementation.
    fn read_impl<R: std::io::Read + std::io::Seek>(&self, reader: R) -> IoResult<PixelBuffer> {
        let decoder = png::Decoder::new(BufReader::new(reader));
        let mut reader = decoder
            .read_info()
            .map_err(|e: png::DecodingError| IoError::Decode(e.to_string()))?;

        let buf_size = reader
            .output_buffer_size()
            .ok_or_else(|| IoError::Decode("cannot determine output buffer size".into()))?;
        let mut buf = vec![0u8; buf_size];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e: png::DecodingError| IoError::Decode(e.to_string()))?;

        let width = info.width;
        let height = info.height;
        let raw = &buf[..info.buffer_size()];

        let rgba: Vec<u8> = match (info.color_type, info.bit_depth) {
            (png::ColorType::Rgba, png::BitDepth::Eight) => raw.to_vec(),
            (png::ColorType::Rgb, png::BitDepth::Eight) => raw
                .chunks(3)
                .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
                .collect(),
            (png::ColorType::Grayscale, png::BitDepth::Eight) => {
                raw.iter().flat_map(|&g| [g, g, g, 255]).collect()
            }
            (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => raw
                .chunks(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect(),
            (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
                // Big-endian 16-bit; keep the high byte
                raw.chunks(8)
                    .flat_map(|px| [px[0], px[2], px[4], px[6]])
                    .collect()
            }
            (png::ColorType::Rgb, png::BitDepth::Sixteen) => raw
                .chunks(6)
                .flat_map(|px| [px[0], px[2], px[4], 255])
                .collect(),
            (color_type, bit_depth) => {
                return Err(IoError::UnsupportedBitDepth(format!(
                    "{:?} {:?}",
                    color_type, bit_depth
                )));
            }
        };

        Ok(PixelBuffer::from_rgba(width, height, rgba)?)
    }
}

impl Default for PngReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatReader<PngReaderOptions> for PngReader {
    /// Returns "PNG".
    fn format_name(&self) -> &'static str {
        "PNG"
    }

    /// Returns `["png"]`.
    fn extensions(&self) -> &'static [&'static str] {
        &["png"]
    }

    /// Checks for the PNG signature.
    fn can_read(&self, header: &[u8]) -> bool {
        header.len() >= 8 && header[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]
    }

    /// Reads a PNG file from disk.
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<PixelBuffer> {
        let file = File::open(path.as_ref())?;
        self.read_impl(file)
    }

    /// Reads a PNG from a byte slice.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer> {
        self.read_impl(Cursor::new(data))
    }

    /// Creates reader with custom options.
    fn with_options(options: PngReaderOptions) -> Self {
        Self { options }
    }
}

/// PNG file writer.
///
/// Implements [`FormatWriter`] for writing RGBA8 buffers as PNG.
#[derive(Debug, Clone)]
pub struct PngWriter {
    #[allow(dead_code)]
    options: PngWriterOptions,
}

impl PngWriter {
    /// Creates a new writer with default options.
    pub fn new() -> Self {
        Self::with_options(PngWriterOptions::default())
    }

    /// Internal write implementation.
    fn write_impl<W: std::io::Write>(&self, writer: W, image: &PixelBuffer) -> IoResult<()> {
        let mut encoder = png::Encoder::new(writer, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::default());

        // Add sRGB chunk
        encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

        let mut png_writer = encoder
            .write_header()
            .map_err(|e| IoError::Encode(e.to_string()))?;

        png_writer
            .write_image_data(image.data())
            .map_err(|e| IoError::Encode(e.to_string()))?;

        Ok(())
    }
}

impl Default for PngWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatWriter<PngWriterOptions> for PngWriter {
    /// Returns "PNG".
    fn format_name(&self) -> &'static str {
        "PNG"
    }

    /// Returns `["png"]`.
    fn extensions(&self) -> &'static [&'static str] {
        &["png"]
    }

    /// Writes a PNG file to disk.
    fn write<P: AsRef<Path>>(&self, path: P, image: &PixelBuffer) -> IoResult<()> {
        let file = File::create(path.as_ref())?;
        self.write_impl(BufWriter::new(file), image)
    }

    /// Writes a PNG to a byte vector.
    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_impl(&mut buffer, image)?;
        Ok(buffer)
    }

    /// Creates writer with custom options.
    fn with_options(options: PngWriterOptions) -> Self {
        Self { options }
    }
}

/// Reads a PNG file with default options.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    PngReader::new().read(path)
}

/// Writes a PNG file with default options.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    PngWriter::new().write(path, image)
}

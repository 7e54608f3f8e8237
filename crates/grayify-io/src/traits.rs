//! I/O traits for image readers and writers.
//!
//! These traits define the interface for format-specific implementations.
//! Each format module provides a reader/writer struct configured through an
//! options type; the options default to the behavior the converter wants
//! out of the box.

use crate::IoResult;
use grayify_core::PixelBuffer;
use std::path::Path;

/// Trait for image format readers.
///
/// Readers decode a file (or memory) into an RGBA8 [`PixelBuffer`],
/// normalizing whatever the container holds (grayscale, RGB, CMYK) to the
/// one buffer shape the transform accepts.
pub trait FormatReader<Options> {
    /// Human-readable format name.
    fn format_name(&self) -> &'static str;

    /// File extensions this reader handles.
    fn extensions(&self) -> &'static [&'static str];

    /// Returns `true` if `header` starts with this format's magic bytes.
    fn can_read(&self, header: &[u8]) -> bool;

    /// Reads an image from a file path.
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<PixelBuffer>;

    /// Reads an image from memory.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer>;

    /// Creates a reader with custom options.
    fn with_options(options: Options) -> Self;
}

/// Trait for image format writers.
///
/// Writers encode an RGBA8 [`PixelBuffer`] to a file or an in-memory byte
/// vector. The byte vector form backs the artifact flow: encoded bytes are
/// held as an owned value and dropped once written, so repeated conversions
/// cannot leak stale encodes.
pub trait FormatWriter<Options> {
    /// Human-readable format name.
    fn format_name(&self) -> &'static str;

    /// File extensions this writer handles.
    fn extensions(&self) -> &'static [&'static str];

    /// Writes an image to a file path.
    fn write<P: AsRef<Path>>(&self, path: P, image: &PixelBuffer) -> IoResult<()>;

    /// Writes an image to memory.
    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>>;

    /// Creates a writer with custom options.
    fn with_options(options: Options) -> Self;
}

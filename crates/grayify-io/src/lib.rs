//! # grayify-io
//!
//! Image I/O for the grayify converter.
//!
//! This crate provides the converter's out-of-scope collaborators as real
//! implementations: file acquisition with validation, decode to RGBA8
//! pixel buffers, and encode back to downloadable artifacts.
//!
//! - **PNG** - Lossless with alpha support
//! - **JPEG** - Lossy output at the converter's fixed quality (90)
//!
//! # Architecture
//!
//! The crate uses a trait-based design for extensibility:
//!
//! - [`FormatReader`] / [`FormatWriter`] - Traits for format readers/writers
//! - [`load`] / [`save`] - High-level functions with format auto-detection
//! - [`limits`] - The 10 MB pre-decode input gate
//! - [`artifact`] - Output artifact naming and the original/grayscale pair
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use grayify_io::{load, save};
//!
//! // Validate, detect, and decode in one call
//! let image = load("input.png")?;
//!
//! // Write to a different format
//! save("output.jpg", &image)?;
//! ```
//!
//! # Validation
//!
//! [`load`] checks eagerly, before any buffer work:
//!
//! 1. File size against [`limits::MAX_FILE_SIZE`] (metadata only, no read)
//! 2. Format recognition (magic bytes, then extension)
//!
//! Failures surface as [`IoError::FileTooLarge`] and
//! [`IoError::UnsupportedFileType`] respectively.
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod artifact;
mod detect;
mod error;
pub mod limits;
mod traits;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

pub use artifact::{ArtifactPair, GRAYSCALE_STEM, ORIGINAL_STEM};
pub use detect::Format;
pub use error::{IoError, IoResult};
pub use limits::MAX_FILE_SIZE;
pub use traits::{FormatReader, FormatWriter};

use grayify_core::PixelBuffer;
use std::path::Path;
use tracing::debug;

/// Loads an image from a file, validating and auto-detecting the format.
///
/// The file size is checked against [`limits::MAX_FILE_SIZE`] before any
/// bytes are read; the format is detected by magic bytes with an extension
/// fallback.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file exceeds the size limit ([`IoError::FileTooLarge`])
/// - The format is not a recognized image type
///   ([`IoError::UnsupportedFileType`])
/// - The file is corrupted ([`IoError::Decode`])
pub fn load<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();

    let size = limits::check_file_size(path)?;
    let format = Format::detect(path)?;
    debug!(path = %path.display(), size, ?format, "loading image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),

        _ => Err(IoError::UnsupportedFileType(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

/// Loads an image from an in-memory byte slice.
///
/// Applies the same size limit and format recognition as [`load`].
pub fn load_from_memory(data: &[u8]) -> IoResult<PixelBuffer> {
    limits::check_len(data.len() as u64)?;

    match Format::from_bytes(data) {
        #[cfg(feature = "png")]
        Format::Png => png::PngReader::new().read_from_memory(data),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::JpegReader::new().read_from_memory(data),

        _ => Err(IoError::UnsupportedFileType("unknown".to_string())),
    }
}

/// Saves an image to a file, detecting format from the extension.
///
/// Lossy formats use their default quality; for explicit quality control
/// use [`artifact::encode`] or the format writers directly.
///
/// # Errors
///
/// Returns an error if the extension is not a supported output format or
/// the file cannot be created.
pub fn save<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    debug!(path = %path.display(), ?format, "saving image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::write(path, image),

        _ => Err(IoError::UnsupportedFileType(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

//! Output artifact naming and writing.
//!
//! A successful conversion produces a pair of downloadable artifacts with a
//! fixed filename convention: `grayify_original.<ext>` and
//! `grayify_grayscale.<ext>`. The grayscale artifact is written only after
//! the transform finished, so a failed request never leaves a
//! half-converted image behind; artifacts from earlier successful requests
//! are simply overwritten on the next success and otherwise left alone.
//!
//! Encoded bytes live in an owned `Vec<u8>` between encode and write and
//! drop as soon as the file hits disk, so repeated conversions do not
//! accumulate stale encodes.

use crate::{Format, FormatWriter, IoError, IoResult};
use grayify_core::PixelBuffer;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filename stem for the untouched input copy.
pub const ORIGINAL_STEM: &str = "grayify_original";

/// Filename stem for the converted output.
pub const GRAYSCALE_STEM: &str = "grayify_grayscale";

/// A written artifact pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPair {
    /// Path of the original-image artifact.
    pub original: PathBuf,
    /// Path of the grayscale-image artifact.
    pub grayscale: PathBuf,
}

/// Returns the artifact filename for the original image.
pub fn original_filename(format: Format) -> String {
    format!("{}.{}", ORIGINAL_STEM, format.extension())
}

/// Returns the artifact filename for the grayscale image.
pub fn grayscale_filename(format: Format) -> String {
    format!("{}.{}", GRAYSCALE_STEM, format.extension())
}

/// Encodes an image in the given format.
///
/// `quality` applies to lossy formats only (JPEG); PNG ignores it.
pub fn encode(format: Format, image: &PixelBuffer, quality: u8) -> IoResult<Vec<u8>> {
    match format {
        #[cfg(feature = "png")]
        Format::Png => crate::png::PngWriter::new().write_to_memory(image),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => {
            crate::jpeg::JpegWriter::with_options(crate::jpeg::JpegWriterOptions { quality })
                .write_to_memory(image)
        }

        _ => Err(IoError::UnsupportedFileType(
            format.extension().to_string(),
        )),
    }
}

/// Encodes and writes the original/grayscale artifact pair into `dir`.
///
/// Both images are encoded before either file is written; any encode
/// failure therefore surfaces with nothing on disk for this request.
pub fn write_artifact_pair(
    dir: &Path,
    format: Format,
    original: &PixelBuffer,
    grayscale: &PixelBuffer,
    quality: u8,
) -> IoResult<ArtifactPair> {
    let original_bytes = encode(format, original, quality)?;
    let grayscale_bytes = encode(format, grayscale, quality)?;

    let pair = ArtifactPair {
        original: dir.join(original_filename(format)),
        grayscale: dir.join(grayscale_filename(format)),
    };

    debug!(
        original = %pair.original.display(),
        grayscale = %pair.grayscale.display(),
        "writing artifact pair"
    );

    std::fs::write(&pair.original, original_bytes)?;
    std::fs::write(&pair.grayscale, grayscale_bytes)?;

    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filenames() {
        assert_eq!(original_filename(Format::Jpeg), "grayify_original.jpg");
        assert_eq!(grayscale_filename(Format::Jpeg), "grayify_grayscale.jpg");
        assert_eq!(original_filename(Format::Png), "grayify_original.png");
        assert_eq!(grayscale_filename(Format::Png), "grayify_grayscale.png");
    }

    #[test]
    fn test_encode_unknown_rejected() {
        let img = PixelBuffer::filled(2, 2, [1, 2, 3, 4]);
        let err = encode(Format::Unknown, &img, 90).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFileType(_)));
    }

    #[cfg(all(feature = "png", feature = "jpeg"))]
    #[test]
    fn test_write_pair() {
        let dir = tempfile::tempdir().unwrap();
        let original = PixelBuffer::filled(8, 8, [200, 100, 50, 255]);
        let grayscale = PixelBuffer::filled(8, 8, [120, 120, 120, 255]);

        let pair =
            write_artifact_pair(dir.path(), Format::Png, &original, &grayscale, 90).unwrap();

        assert!(pair.original.exists());
        assert!(pair.grayscale.exists());
        assert_eq!(
            pair.original.file_name().unwrap(),
            "grayify_original.png"
        );

        let loaded = crate::png::read(&pair.grayscale).unwrap();
        assert_eq!(loaded.pixel(0, 0), [120, 120, 120, 255]);
    }

    #[cfg(feature = "jpeg")]
    #[test]
    fn test_encode_jpeg_uses_quality() {
        let mut img = PixelBuffer::new(16, 16);
        for (i, px) in img.pixels_mut().enumerate() {
            px[0] = (i * 23) as u8;
            px[1] = (i * 11) as u8;
            px[2] = (i * 3) as u8;
            px[3] = 255;
        }
        let low = encode(Format::Jpeg, &img, 40).unwrap();
        let high = encode(Format::Jpeg, &img, 95).unwrap();
        assert!(high.len() >= low.len());
    }
}

//! Error types for I/O operations.
//!
//! Provides unified error handling for file acquisition, decode, and encode.
//! Validation errors ([`IoError::UnsupportedFileType`],
//! [`IoError::FileTooLarge`]) are raised eagerly, before any buffer work
//! begins.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input is not recognized as a supported image type.
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Input exceeds the size limit; rejected before decode.
    #[error("file too large: {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge {
        /// Actual file size in bytes.
        size: u64,
        /// Enforced limit in bytes.
        limit: u64,
    },

    /// Unsupported bit depth or channel layout.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    Decode(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    Encode(String),

    /// Decoded data failed pixel buffer validation.
    #[error(transparent)]
    InvalidBuffer(#[from] grayify_core::Error),
}

impl IoError {
    /// Returns `true` if this error was raised by pre-decode validation.
    ///
    /// Validation errors stop the pipeline before any pixel work; anything
    /// else is a processing failure in the middle of a request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFileType(_) | Self::FileTooLarge { .. }
        )
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(IoError::UnsupportedFileType("txt".into()).is_validation());
        assert!(IoError::FileTooLarge {
            size: 11,
            limit: 10
        }
        .is_validation());
        assert!(!IoError::Decode("bad".into()).is_validation());
    }

    #[test]
    fn test_file_too_large_message() {
        let err = IoError::FileTooLarge {
            size: 20,
            limit: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("20"));
        assert!(msg.contains("10"));
    }
}

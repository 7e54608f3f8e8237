//! Error types for grayify-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of buffer construction and
//! access:
//!
//! - Malformed pixel data (length not a multiple of 4)
//! - Dimensions that do not match the supplied data
//! - Out-of-bounds pixel access
//!
//! All of these indicate a bug or a corrupted decode upstream and are
//! non-recoverable for the request that produced them.
//!
//! # Usage
//!
//! ```rust
//! use grayify_core::{Error, Result};
//!
//! fn check_bounds(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or accessing pixel buffers.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel data is not a valid interleaved RGBA byte sequence.
    ///
    /// Returned when a raw buffer's length is not a multiple of 4, meaning
    /// it cannot be a sequence of whole `R G B A` pixels. This indicates a
    /// decode failure upstream.
    #[error("invalid pixel data: length {len} is not a multiple of 4")]
    InvalidInput {
        /// Length of the offending buffer in bytes
        len: usize,
    },

    /// Buffer length does not match the stated dimensions.
    ///
    /// Returned when `data.len() != width * height * 4`.
    #[error("dimension mismatch: {width}x{height} requires {expected} bytes, got {got}")]
    DimensionMismatch {
        /// Stated width
        width: u32,
        /// Stated height
        height: u32,
        /// Bytes required by the dimensions
        expected: usize,
        /// Bytes actually supplied
        got: usize,
    },

    /// Pixel coordinates are outside the buffer bounds.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidInput`] error.
    #[inline]
    pub fn invalid_input(len: usize) -> Self {
        Self::InvalidInput { len }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(width: u32, height: u32, got: usize) -> Self {
        Self::DimensionMismatch {
            width,
            height,
            expected: width as usize * height as usize * 4,
            got,
        }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if this error indicates malformed input data.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if this is a bounds error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input() {
        let err = Error::invalid_input(7);
        assert!(err.to_string().contains("7"));
        assert!(err.is_invalid_input());
        assert!(!err.is_bounds_error());
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Error::dimension_mismatch(10, 10, 100);
        let msg = err.to_string();
        assert!(msg.contains("10x10"));
        assert!(msg.contains("400"));
        assert!(msg.contains("100"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(100, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
    }
}

//! # grayify-core
//!
//! Core types for the grayify grayscale converter.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace:
//!
//! - [`PixelBuffer`] - Owned, validated RGBA8 pixel buffer
//! - [`ProgressReporter`] - Monotonic percent-complete reporting
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. The other grayify crates depend on it:
//!
//! ```text
//! grayify-core (this crate)
//!    ^
//!    |
//!    +-- grayify-ops (grayscale transform)
//!    +-- grayify-io (decode/encode)
//!    +-- grayify-cli (command line tool)
//! ```
//!
//! ## Buffer Invariants
//!
//! A [`PixelBuffer`] always holds interleaved `R G B A` bytes with
//! `data.len() == width * height * 4`. The validating constructor is the
//! only way to build one from raw bytes, so downstream code can rely on the
//! invariant instead of re-checking it:
//!
//! ```
//! use grayify_core::PixelBuffer;
//!
//! let buf = PixelBuffer::from_rgba(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 255])?;
//! assert_eq!(buf.pixel_count(), 2);
//! # Ok::<(), grayify_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod progress;

// Re-exports for convenience
pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use progress::{ProgressReporter, PROGRESS_INTERVAL};

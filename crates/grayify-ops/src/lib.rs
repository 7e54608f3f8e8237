//! # grayify-ops
//!
//! The grayscale transform for the grayify converter.
//!
//! This crate holds the one algorithmic component of the system: a single
//! linear pass over an RGBA pixel buffer replacing each pixel's color
//! channels with its ITU-R BT.601 weighted luminance.
//!
//! # Example
//!
//! ```rust
//! use grayify_core::PixelBuffer;
//! use grayify_ops::grayscale::to_grayscale;
//!
//! let red = PixelBuffer::filled(4, 4, [255, 0, 0, 255]);
//! let gray = to_grayscale(&red, |_pct| {}).unwrap();
//! assert_eq!(gray.pixel(0, 0), [76, 76, 76, 255]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod grayscale;

pub use error::{OpsError, OpsResult};
pub use grayscale::{luma, to_grayscale, LUMA_B, LUMA_G, LUMA_R};

//! RGBA pixel buffer type.
//!
//! This module provides [`PixelBuffer`], the single image container used
//! throughout the workspace.
//!
//! # Memory Layout
//!
//! Pixels are stored interleaved in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! The buffer length is always `width * height * 4`; the validating
//! constructors enforce this so every downstream pass can chunk the data
//! into whole pixels without re-checking.
//!
//! # Usage
//!
//! ```rust
//! use grayify_core::PixelBuffer;
//!
//! // Solid red 4x4 image
//! let mut img = PixelBuffer::filled(4, 4, [255, 0, 0, 255]);
//!
//! img.set_pixel(1, 1, [0, 255, 0, 255]);
//! assert_eq!(img.pixel(1, 1), [0, 255, 0, 255]);
//! ```
//!
//! # Used By
//!
//! - `grayify-ops` - The grayscale transform
//! - `grayify-io` - Decoders produce buffers, encoders consume them

use crate::{Error, Result};

/// Number of channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Owned interleaved RGBA8 pixel buffer.
///
/// Each conversion owns its buffers exclusively for its duration; there is
/// no shared mutable state between concurrent conversions, so no interior
/// refcounting is needed.
///
/// # Example
///
/// ```rust
/// use grayify_core::PixelBuffer;
///
/// let img = PixelBuffer::new(1920, 1080);
/// assert_eq!(img.data().len(), 1920 * 1080 * 4);
/// assert_eq!(img.pixel(0, 0), [0, 0, 0, 0]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixel data, length == width * height * 4
    data: Vec<u8>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl PixelBuffer {
    /// Creates a new buffer filled with zeros (transparent black).
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            data: vec![0u8; len],
            width,
            height,
        }
    }

    /// Creates a buffer from existing interleaved RGBA bytes.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `data.len()` is not a multiple of 4
    /// - [`Error::DimensionMismatch`] if `data.len() != width * height * 4`
    ///
    /// # Example
    ///
    /// ```rust
    /// use grayify_core::PixelBuffer;
    ///
    /// let img = PixelBuffer::from_rgba(1, 1, vec![255, 0, 0, 255]).unwrap();
    /// assert_eq!(img.pixel(0, 0), [255, 0, 0, 255]);
    ///
    /// // Truncated data is rejected
    /// assert!(PixelBuffer::from_rgba(1, 1, vec![255, 0, 0]).is_err());
    /// ```
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if data.len() % CHANNELS != 0 {
            return Err(Error::invalid_input(data.len()));
        }
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::dimension_mismatch(width, height, data.len()));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a buffer filled with a specific pixel value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grayify_core::PixelBuffer;
    ///
    /// let white = PixelBuffer::filled(10, 10, [255, 255, 255, 255]);
    /// assert_eq!(white.pixel(9, 9), [255, 255, 255, 255]);
    /// ```
    pub fn filled(width: u32, height: u32, pixel: [u8; CHANNELS]) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixel_count * CHANNELS);
        for _ in 0..pixel_count {
            data.extend_from_slice(&pixel);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns a reference to the raw pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a mutable reference to the raw pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer, returning the raw pixel data.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the byte offset for the pixel at (x, y).
    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y) as `[R, G, B, A]`.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; CHANNELS] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let mut result = [0u8; CHANNELS];
        result.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        result
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; CHANNELS]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [u8; CHANNELS]) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        self.data[offset..offset + CHANNELS].copy_from_slice(&pixel);
    }

    /// Returns a row of pixels as a byte slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize * CHANNELS;
        let end = start + self.width as usize * CHANNELS;
        &self.data[start..end]
    }

    /// Iterates over whole pixels as `[R, G, B, A]` slices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grayify_core::PixelBuffer;
    ///
    /// let img = PixelBuffer::filled(2, 2, [10, 20, 30, 255]);
    /// for px in img.pixels() {
    ///     assert_eq!(px, &[10, 20, 30, 255]);
    /// }
    /// ```
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(CHANNELS)
    }

    /// Iterates mutably over whole pixels.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.data.chunks_exact_mut(CHANNELS)
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

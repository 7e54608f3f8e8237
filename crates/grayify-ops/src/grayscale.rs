//! Luminance-weighted grayscale conversion.
//!
//! Replaces each pixel's R, G, B channels with a single weighted luminance
//! value, leaving alpha unchanged. The weights are the ITU-R BT.601 luma
//! coefficients; they are fixed rather than configurable because the
//! output is defined bit-for-bit in terms of exactly these constants.
//!
//! The pass is a single synchronous O(n) loop over the buffer. Progress is
//! reported through the caller's sink once per
//! [`PROGRESS_INTERVAL`](grayify_core::PROGRESS_INTERVAL) pixels, plus a
//! final update to 100 after the pass completes.

use grayify_core::{PixelBuffer, ProgressReporter, PROGRESS_INTERVAL};
use tracing::trace;

use crate::OpsResult;

/// BT.601 red channel weight.
pub const LUMA_R: f32 = 0.2989;
/// BT.601 green channel weight.
pub const LUMA_G: f32 = 0.5870;
/// BT.601 blue channel weight.
pub const LUMA_B: f32 = 0.1140;

/// Computes the BT.601 weighted luminance of an RGB triple.
///
/// The coefficients sum to ~1.0, so the result falls in `[0, 255]` for
/// 8-bit inputs.
///
/// # Example
///
/// ```rust
/// use grayify_ops::luma;
///
/// assert_eq!(luma(255, 255, 255).round() as u8, 255);
/// assert_eq!(luma(255, 0, 0).round() as u8, 76);
/// ```
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32
}

/// Converts an RGBA buffer to grayscale.
///
/// Returns a new buffer of identical dimensions where every pixel's color
/// channels hold its luminance (round-to-nearest) and alpha is preserved.
/// The source buffer is not modified.
///
/// `progress` receives percent-complete values in `[0, 100]`,
/// monotonically non-decreasing, ending at 100. For an empty image the
/// sink receives only the final 100.
///
/// A buffer of pixels that are already gray (`R == G == B`) is a fixed
/// point of this transform up to 8-bit rounding, so applying it twice
/// yields the same bytes as applying it once.
///
/// # Example
///
/// ```rust
/// use grayify_core::PixelBuffer;
/// use grayify_ops::to_grayscale;
///
/// let src = PixelBuffer::filled(2, 2, [200, 100, 50, 128]);
/// let gray = to_grayscale(&src, |_| {}).unwrap();
///
/// let [r, g, b, a] = gray.pixel(0, 0);
/// assert_eq!(r, g);
/// assert_eq!(g, b);
/// assert_eq!(a, 128);
/// ```
pub fn to_grayscale(
    source: &PixelBuffer,
    progress: impl FnMut(f32),
) -> OpsResult<PixelBuffer> {
    let (width, height) = source.dimensions();
    trace!(width, height, "to_grayscale");

    let mut reporter = ProgressReporter::new(progress);
    let total = source.pixel_count();

    // Mutate a copy of the source bytes in place; the caller keeps the
    // original untouched.
    let mut out = source.clone();
    let mut processed = 0usize;

    for px in out.pixels_mut() {
        let gray = luma(px[0], px[1], px[2]);
        // Round-to-nearest; gray is non-negative so +0.5 truncation is exact.
        let gray = (gray + 0.5) as u8;
        px[0] = gray;
        px[1] = gray;
        px[2] = gray;
        // Alpha channel unchanged.

        processed += 1;
        if processed % PROGRESS_INTERVAL == 0 {
            reporter.report(processed as f32 / total as f32 * 100.0);
        }
    }

    reporter.finish();
    Ok(out)
}

/// Converts raw interleaved RGBA bytes to grayscale.
///
/// Convenience wrapper for callers holding a raw decode buffer rather than
/// a [`PixelBuffer`]. Validates the buffer shape first, so a length that is
/// not a multiple of 4 (or does not match the dimensions) fails before any
/// pixel work.
///
/// # Errors
///
/// Returns the buffer validation error for malformed input.
pub fn to_grayscale_raw(
    width: u32,
    height: u32,
    data: Vec<u8>,
    progress: impl FnMut(f32),
) -> OpsResult<Vec<u8>> {
    let source = PixelBuffer::from_rgba(width, height, data)?;
    Ok(to_grayscale(&source, progress)?.into_data())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn no_progress(_: f32) {}

    #[test]
    fn test_coefficients_sum_to_one() {
        assert_relative_eq!(LUMA_R + LUMA_G + LUMA_B, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_output_length_matches_input() {
        let src = PixelBuffer::filled(7, 3, [12, 34, 56, 78]);
        let gray = to_grayscale(&src, no_progress).unwrap();
        assert_eq!(gray.data().len(), src.data().len());
        assert_eq!(gray.dimensions(), src.dimensions());
    }

    #[test]
    fn test_full_desaturation_alpha_preserved() {
        let mut src = PixelBuffer::new(4, 4);
        src.set_pixel(0, 0, [200, 100, 50, 128]);
        src.set_pixel(3, 3, [1, 2, 3, 0]);
        let gray = to_grayscale(&src, no_progress).unwrap();
        for (s, g) in src.pixels().zip(gray.pixels()) {
            assert_eq!(g[0], g[1]);
            assert_eq!(g[1], g[2]);
            assert_eq!(g[3], s[3]);
        }
    }

    #[test]
    fn test_gray_pixel_is_fixed_point() {
        for v in [0u8, 1, 77, 128, 200, 254, 255] {
            let src = PixelBuffer::filled(1, 1, [v, v, v, 255]);
            let gray = to_grayscale(&src, no_progress).unwrap();
            let out = gray.pixel(0, 0)[0];
            assert!(
                (out as i32 - v as i32).abs() <= 1,
                "gray {v} mapped to {out}"
            );
        }
    }

    #[test]
    fn test_pure_red() {
        let src = PixelBuffer::filled(1, 1, [255, 0, 0, 255]);
        let gray = to_grayscale(&src, no_progress).unwrap();
        // round(0.2989 * 255) == 76
        assert_eq!(gray.pixel(0, 0), [76, 76, 76, 255]);
    }

    #[test]
    fn test_pure_white() {
        let src = PixelBuffer::filled(1, 1, [255, 255, 255, 255]);
        let gray = to_grayscale(&src, no_progress).unwrap();
        assert_eq!(gray.pixel(0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_pure_black_zero_alpha() {
        let src = PixelBuffer::filled(1, 1, [0, 0, 0, 0]);
        let gray = to_grayscale(&src, no_progress).unwrap();
        assert_eq!(gray.pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_idempotent() {
        let mut src = PixelBuffer::new(8, 8);
        for (i, px) in src.pixels_mut().enumerate() {
            px[0] = (i * 7) as u8;
            px[1] = (i * 13) as u8;
            px[2] = (i * 29) as u8;
            px[3] = 255;
        }
        let once = to_grayscale(&src, no_progress).unwrap();
        let twice = to_grayscale(&once, no_progress).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_buffer() {
        let src = PixelBuffer::from_rgba(0, 0, Vec::new()).unwrap();
        let mut seen = Vec::new();
        let gray = to_grayscale(&src, |p| seen.push(p)).unwrap();
        assert_eq!(gray.data().len(), 0);
        assert_eq!(seen, vec![100.0]);
    }

    #[test]
    fn test_raw_rejects_bad_length() {
        let err = to_grayscale_raw(1, 1, vec![1, 2, 3], no_progress).unwrap_err();
        assert!(matches!(err, crate::OpsError::InvalidInput(_)));
    }

    #[test]
    fn test_raw_matches_typed() {
        let data: Vec<u8> = (0..64u32).map(|i| (i * 3) as u8).collect();
        let src = PixelBuffer::from_rgba(4, 4, data.clone()).unwrap();
        let typed = to_grayscale(&src, no_progress).unwrap();
        let raw = to_grayscale_raw(4, 4, data, no_progress).unwrap();
        assert_eq!(typed.data(), raw.as_slice());
    }

    #[test]
    fn test_progress_non_decreasing_final_100() {
        // 50x50 = 2500 pixels -> updates at 1000 and 2000, then final 100
        let src = PixelBuffer::filled(50, 50, [10, 20, 30, 255]);
        let mut seen = Vec::new();
        to_grayscale(&src, |p| seen.push(p)).unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*seen.last().unwrap(), 100.0);
        assert_relative_eq!(seen[0], 40.0, epsilon = 0.01);
        assert_relative_eq!(seen[1], 80.0, epsilon = 0.01);
    }

    #[test]
    fn test_small_image_reports_only_completion() {
        // Fewer pixels than the reporting interval
        let src = PixelBuffer::filled(3, 3, [1, 2, 3, 4]);
        let mut seen = Vec::new();
        to_grayscale(&src, |p| seen.push(p)).unwrap();
        assert_eq!(seen, vec![100.0]);
    }

    #[test]
    fn test_luma_known_values() {
        assert_relative_eq!(luma(0, 255, 0), 0.5870 * 255.0, epsilon = 1e-3);
        assert_relative_eq!(luma(0, 0, 255), 0.1140 * 255.0, epsilon = 1e-3);
        assert_relative_eq!(luma(0, 0, 0), 0.0);
    }
}

//! Progress reporting for long pixel passes.
//!
//! The transform reports fractional progress through a caller-supplied
//! `FnMut(f32)` sink. Values are percentages in `[0, 100]`, non-decreasing
//! within a call, culminating at 100 once the pass completes. The sink is
//! for user feedback only and has no effect on correctness.

/// Pixels processed between progress updates.
///
/// One update is emitted per this many pixels, plus a final update to 100
/// after the pass completes.
pub const PROGRESS_INTERVAL: usize = 1000;

/// Wraps a progress sink and enforces the reporting contract.
///
/// Guarantees emitted values are monotonically non-decreasing and clamped
/// to `[0, 100]`, regardless of rounding in the caller's arithmetic.
///
/// # Example
///
/// ```rust
/// use grayify_core::ProgressReporter;
///
/// let mut seen = Vec::new();
/// let mut reporter = ProgressReporter::new(|pct| seen.push(pct));
/// reporter.report(25.0);
/// reporter.report(20.0); // ignored: would go backwards
/// reporter.finish();
/// drop(reporter);
/// assert_eq!(seen, vec![25.0, 100.0]);
/// ```
pub struct ProgressReporter<F: FnMut(f32)> {
    sink: F,
    last: f32,
}

impl<F: FnMut(f32)> ProgressReporter<F> {
    /// Creates a reporter around a sink callback.
    pub fn new(sink: F) -> Self {
        Self { sink, last: 0.0 }
    }

    /// Reports a percent-complete value.
    ///
    /// Values below the last reported value are dropped; values above 100
    /// are clamped.
    pub fn report(&mut self, pct: f32) {
        let pct = pct.clamp(0.0, 100.0);
        if pct < self.last {
            return;
        }
        self.last = pct;
        (self.sink)(pct);
    }

    /// Reports completion (100).
    pub fn finish(&mut self) {
        self.report(100.0);
    }

    /// Returns the last value reported so far.
    #[inline]
    pub fn last(&self) -> f32 {
        self.last
    }
}

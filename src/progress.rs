//! Progress reporting for the chunk loop.
//!
//! The pipeline calls [`ProgressSink::update`] once per chunk with the running
//! byte count and the expected plaintext size. Rendering is the caller's job.

/// Receives `(processed, total)` after every chunk.
pub trait ProgressSink {
    fn update(&mut self, processed: u64, total: u64);
}

/// Headless sink used by the stream-level API and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    #[inline(always)]
    fn update(&mut self, _processed: u64, _total: u64) {}
}

impl<P: ProgressSink + ?Sized> ProgressSink for &mut P {
    #[inline]
    fn update(&mut self, processed: u64, total: u64) {
        (**self).update(processed, total)
    }
}

/// Percentage complete, `processed / total * 100`.
///
/// An empty plaintext (`total == 0`) counts as fully done.
pub fn percent(processed: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    processed as f64 / total as f64 * 100.0
}

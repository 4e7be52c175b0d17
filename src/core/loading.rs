//! # Loading Indicator Seam
//!
//! The navigator calls `start()` right before a hook runs and `complete()`
//! right after it returns, whatever it returned. Implementations must keep
//! animating while the calling thread is blocked inside the hook, so they
//! cannot rely on the navigation thread to drive frames.

pub trait LoadingIndicator {
    fn start(&mut self);
    fn complete(&mut self);
}

/// Indicator that shows nothing. Used when no terminal is attached.
#[derive(Debug, Default)]
pub struct NoopLoading;

impl LoadingIndicator for NoopLoading {
    fn start(&mut self) {}
    fn complete(&mut self) {}
}

//! # Repaint Ticker
//!
//! A background task that, every `interval`, stores the elapsed session time
//! in a shared atomic clock and asks the event loop for a repaint.
//!
//! The ticker writes no navigation state. Its only outputs are the clock
//! (read by the marquee and the loading overlay) and a bounded repaint
//! channel. A full channel means a repaint is already pending, so the tick
//! is dropped instead of queued; the event loop only drains it when free.
//!
//! Runs on the tokio runtime. The runtime must be multi-threaded: the
//! navigation thread blocks inside hooks and the clock has to keep moving.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{SyncSender, TrySendError};
use std::time::{Duration, Instant};

use log::info;
use tokio::task::AbortHandle;

/// Milliseconds since the ticker started, shared across threads.
#[derive(Debug, Clone, Default)]
pub struct SharedClock {
    millis: Arc<AtomicU64>,
}

impl SharedClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.millis.load(Ordering::Relaxed)
    }

    pub fn store(&self, millis: u64) {
        self.millis.store(millis, Ordering::Relaxed);
    }
}

/// Repaint request sent by the ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repaint;

pub struct Ticker {
    interval: Duration,
    clock: SharedClock,
    handle: Option<AbortHandle>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            clock: SharedClock::new(),
            handle: None,
        }
    }

    pub fn clock(&self) -> SharedClock {
        self.clock.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Spawn the tick task. Must be called from within a tokio runtime.
    pub fn start(&mut self, repaint: SyncSender<Repaint>) {
        if self.handle.is_some() {
            return;
        }
        let clock = self.clock.clone();
        let interval = self.interval;
        let started = Instant::now();

        let task = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(interval);
            loop {
                ticks.tick().await;
                clock.store(started.elapsed().as_millis() as u64);
                match repaint.try_send(Repaint) {
                    Ok(()) | Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Disconnected(_)) => break,
                }
            }
        });
        info!("Ticker started ({}ms)", interval.as_millis());
        self.handle = Some(task.abort_handle());
    }

    /// Stop the tick task. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

//! Elapsed play time.
//!
//! [`ElapsedClock`] is a shared seconds counter. A [`Ticker`] owns one
//! background thread that adds a second to the clock once per second until
//! it is stopped or dropped. The ticker only ever touches the counter, so
//! turn processing needs no extra synchronization.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Shared seconds counter.
///
/// Clones share the same counter.
#[derive(Clone, Debug, Default)]
pub struct ElapsedClock {
    seconds: Arc<AtomicU64>,
}

impl ElapsedClock {
    /// Create a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current elapsed seconds.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.seconds.load(Ordering::Relaxed)
    }

    /// Overwrite the counter (used when restoring a snapshot).
    pub fn set(&self, seconds: u64) {
        self.seconds.store(seconds, Ordering::Relaxed);
    }

    /// Add one second.
    pub fn tick(&self) {
        self.seconds.fetch_add(1, Ordering::Relaxed);
    }
}

/// Background thread ticking an [`ElapsedClock`].
#[derive(Debug)]
pub struct Ticker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking `clock` once per second.
    #[must_use]
    pub fn start(clock: ElapsedClock) -> Self {
        Self::with_interval(clock, Duration::from_secs(1))
    }

    /// Start ticking at a custom interval.
    #[must_use]
    pub fn with_interval(clock: ElapsedClock, interval: Duration) -> Self {
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = std::thread::spawn(move || loop {
            match stopped.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => clock.tick(),
                // Explicit stop or the ticker was dropped.
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        tracing::trace!(?interval, "ticker started");
        Self {
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Stop ticking and wait for the thread to exit.
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            tracing::trace!("ticker stopped");
        }
    }

    /// True until [`stop`](Self::stop) is called.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

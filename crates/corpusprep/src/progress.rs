//! # Progress Reporting
//!
//! Progress is a side channel: reporters observe the stages, they never
//! change what the stages produce.

use std::sync::{
    Mutex,
    atomic::{AtomicU64, Ordering},
};

/// Observer for long-running stage loops.
///
/// Reporters are shared across worker threads, so every method takes `&self`.
pub trait ProgressReporter: Send + Sync {
    /// A new task, over `total` items, is starting.
    fn begin(
        &self,
        label: &str,
        total: u64,
    );

    /// `delta` more items are done.
    fn advance(
        &self,
        delta: u64,
    );

    /// The current task is done.
    fn finish(&self);
}

/// Reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn begin(
        &self,
        _label: &str,
        _total: u64,
    ) {
    }

    fn advance(
        &self,
        _delta: u64,
    ) {
    }

    fn finish(&self) {}
}

/// Reports progress through `log::info!` every `interval` items.
#[derive(Debug)]
pub struct LogProgress {
    interval: u64,
    label: Mutex<String>,
    total: AtomicU64,
    done: AtomicU64,
}

impl LogProgress {
    /// Create a reporter which logs every `interval` items.
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            label: Mutex::new(String::new()),
            total: AtomicU64::new(0),
            done: AtomicU64::new(0),
        }
    }

    fn log_line(
        &self,
        done: u64,
    ) {
        let total = self.total.load(Ordering::Relaxed);
        if let Ok(label) = self.label.lock() {
            log::info!("{label}: {done}/{total}");
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new(100_000)
    }
}

impl ProgressReporter for LogProgress {
    fn begin(
        &self,
        label: &str,
        total: u64,
    ) {
        if let Ok(mut current) = self.label.lock() {
            *current = label.to_string();
        }
        self.total.store(total, Ordering::Relaxed);
        self.done.store(0, Ordering::Relaxed);
    }

    fn advance(
        &self,
        delta: u64,
    ) {
        let before = self.done.fetch_add(delta, Ordering::Relaxed);
        let after = before + delta;
        if after / self.interval > before / self.interval {
            self.log_line(after);
        }
    }

    fn finish(&self) {
        self.log_line(self.done.load(Ordering::Relaxed));
    }
}

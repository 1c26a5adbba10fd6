//! Logger metrics for observability
//!
//! Counters describing what happened to emitted records: how many reached at
//! least one sink, how many were dropped by quiet-mode gating or pause, and
//! how many sink writes failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use framework_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_emitted();
/// metrics.record_dropped();
///
/// assert_eq!(metrics.total_emitted(), 1);
/// assert_eq!(metrics.dropped_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Records created by emit calls
    total_emitted: AtomicU64,

    /// Records written to at least one sink
    total_delivered: AtomicU64,

    /// Records routed to no sink at all; failed writes are not drops
    dropped_count: AtomicU64,

    /// Individual sink writes that failed
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_emitted: AtomicU64::new(0),
            total_delivered: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_emitted(&self) -> u64 {
        self.total_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn total_delivered(&self) -> u64 {
        self.total_delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.total_emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.total_delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failures(&self, count: u64) -> u64 {
        self.write_failures.fetch_add(count, Ordering::Relaxed)
    }

    /// Percentage of emitted records no sink received
    pub fn drop_rate(&self) -> f64 {
        let emitted = self.total_emitted();
        if emitted == 0 {
            return 0.0;
        }
        (self.dropped_count() as f64 / emitted as f64) * 100.0
    }

    pub fn reset(&self) {
        self.total_emitted.store(0, Ordering::Relaxed);
        self.total_delivered.store(0, Ordering::Relaxed);
        self.dropped_count.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

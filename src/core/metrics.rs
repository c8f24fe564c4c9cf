//! Logger metrics for observability
//!
//! Counters for the delivery pipeline: how many entries were queued,
//! evicted on overflow, written, or failed at the sink.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use linelog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dropped();
/// metrics.record_written();
///
/// assert_eq!(metrics.dropped_count(), 1);
/// assert_eq!(metrics.total_written(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries offered to a queue, including any it rejected (or written
    /// directly in sync mode)
    total_enqueued: AtomicU64,

    /// Entries lost to queue overflow
    dropped_count: AtomicU64,

    /// Entries handed to a sink successfully
    total_written: AtomicU64,

    /// Sink write or flush failures
    write_errors: AtomicU64,

    /// Number of pushes that found the queue at capacity
    queue_full_events: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_enqueued: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
            total_written: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
            queue_full_events: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_enqueued(&self) -> u64 {
        self.total_enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn total_written(&self) -> u64 {
        self.total_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn queue_full_events(&self) -> u64 {
        self.queue_full_events.load(Ordering::Relaxed)
    }

    /// Record an entry offered to a queue, returning the previous count
    #[inline]
    pub fn record_enqueued(&self) -> u64 {
        self.total_enqueued.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an entry lost to overflow, returning the previous count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.total_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_error(&self) -> u64 {
        self.write_errors.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_queue_full(&self) -> u64 {
        self.queue_full_events.fetch_add(1, Ordering::Relaxed)
    }

    /// Get drop rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been enqueued.
    pub fn drop_rate(&self) -> f64 {
        let enqueued = self.total_enqueued() as f64;
        if enqueued == 0.0 {
            0.0
        } else {
            (self.dropped_count() as f64 / enqueued) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.total_enqueued.store(0, Ordering::Relaxed);
        self.dropped_count.store(0, Ordering::Relaxed);
        self.total_written.store(0, Ordering::Relaxed);
        self.write_errors.store(0, Ordering::Relaxed);
        self.queue_full_events.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            total_enqueued: AtomicU64::new(self.total_enqueued()),
            dropped_count: AtomicU64::new(self.dropped_count()),
            total_written: AtomicU64::new(self.total_written()),
            write_errors: AtomicU64::new(self.write_errors()),
            queue_full_events: AtomicU64::new(self.queue_full_events()),
        }
    }
}

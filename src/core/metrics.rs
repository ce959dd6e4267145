//! Writer metrics for observability
//!
//! Counters for queue pressure and throughput. Destination write failures are
//! deliberately not counted: they are invisible outside the worker.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for an asynchronous writer
///
/// # Example
///
/// ```
/// use console_log_writer::WriterMetrics;
///
/// let metrics = WriterMetrics::new();
///
/// metrics.record_submitted();
/// metrics.record_processed();
///
/// assert_eq!(metrics.submitted(), 1);
/// assert_eq!(metrics.in_flight(), 0);
/// ```
#[derive(Debug, Default)]
pub struct WriterMetrics {
    /// Records accepted into the queue
    submitted: AtomicU64,

    /// Records rendered by the worker
    processed: AtomicU64,

    /// Submissions that found the queue full and had to wait
    block_events: AtomicU64,
}

impl WriterMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            submitted: AtomicU64::new(0),
            processed: AtomicU64::new(0),
            block_events: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn submitted(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn block_events(&self) -> u64 {
        self.block_events.load(Ordering::Relaxed)
    }

    /// Records accepted but not yet rendered
    pub fn in_flight(&self) -> u64 {
        self.submitted().saturating_sub(self.processed())
    }

    #[inline]
    pub fn record_submitted(&self) -> u64 {
        self.submitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_processed(&self) -> u64 {
        self.processed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_block(&self) -> u64 {
        self.block_events.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = WriterMetrics::new();
        assert_eq!(metrics.submitted(), 0);
        assert_eq!(metrics.processed(), 0);
        assert_eq!(metrics.block_events(), 0);
    }

    #[test]
    fn test_in_flight() {
        let metrics = WriterMetrics::new();
        for _ in 0..5 {
            metrics.record_submitted();
        }
        metrics.record_processed();
        metrics.record_processed();

        assert_eq!(metrics.in_flight(), 3);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = WriterMetrics::new();
        assert_eq!(metrics.record_block(), 0);
        assert_eq!(metrics.record_block(), 1);
        assert_eq!(metrics.block_events(), 2);
    }
}

//! Writer trait exposed to log dispatchers

use super::log_record::LogRecord;
use std::time::Duration;

/// Default shutdown timeout used when a writer is dropped without being closed (5 seconds)
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// A destination that accepts log records and can be shut down.
///
/// Dispatchers do any level filtering before calling [`LogWriter::log_write`];
/// a writer renders every record it is given.
///
/// # Example
///
/// ```
/// use console_log_writer::core::{LogRecord, LogWriter};
/// use parking_lot::Mutex;
///
/// struct CollectingWriter(Mutex<Vec<String>>);
///
/// impl LogWriter for CollectingWriter {
///     fn log_write(&self, record: LogRecord) {
///         self.0.lock().push(record.message);
///     }
///
///     fn close(&mut self) {}
/// }
/// ```
pub trait LogWriter: Send + Sync {
    /// Hand a record to the writer. May block while the writer is saturated.
    fn log_write(&self, record: LogRecord);

    /// Stop accepting records and finish writing the ones already accepted.
    fn close(&mut self);
}

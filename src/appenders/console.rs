//! Asynchronous console writer
//!
//! Records are queued in a bounded channel and rendered by a single worker
//! thread as `[MM/DD/YY HH:MM:SS] [LEVEL] message` lines. When an error stream
//! is configured, ERROR and CRITICAL records go there and everything else goes
//! to the normal stream.

use crate::core::{
    LogRecord, LogWriter, LoggerError, OutputStream, Result, TimestampCache, WriterMetrics,
    DEFAULT_SHUTDOWN_TIMEOUT,
};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default queue depth shared by writers of this logging system
pub const LOG_BUFFER_LENGTH: usize = 32;

const WORKER_THREAD_NAME: &str = "console-log-writer";

/// Console writer that renders records on a background thread.
///
/// [`log_write`](Self::log_write) returns as soon as the record is queued and
/// blocks only while the queue is full. Nothing queued is ever dropped, and
/// lines reach each stream in the order records were queued. Destination I/O
/// errors are swallowed by the worker.
///
/// # Example
///
/// ```
/// use console_log_writer::prelude::*;
///
/// let out = SharedBuffer::new();
/// let mut writer = AsyncConsoleWriter::new(LOG_BUFFER_LENGTH, Box::new(out.clone()));
///
/// writer.log_write(LogRecord::new(LogLevel::Critical, "disk on fire"));
/// writer.close();
///
/// assert!(out.contents().ends_with("] [CRITICAL] disk on fire\n"));
/// ```
pub struct AsyncConsoleWriter {
    sender: Option<Sender<LogRecord>>,
    worker: Option<thread::JoinHandle<()>>,
    metrics: Arc<WriterMetrics>,
    capacity: usize,
    splits_errors: bool,
}

impl AsyncConsoleWriter {
    /// Writer sending every record to `normal_out`, whatever its level.
    ///
    /// A `capacity` of zero is treated as one.
    ///
    /// # Panics
    ///
    /// Panics if the worker thread cannot be spawned. Use
    /// [`ConsoleWriterBuilder`] to get an error instead.
    #[must_use]
    pub fn new(capacity: usize, normal_out: OutputStream) -> Self {
        Self::start_or_panic(capacity.max(1), normal_out, None)
    }

    /// Writer sending ERROR and CRITICAL records to `err_out` and all others
    /// to `normal_out`.
    ///
    /// A `capacity` of zero is treated as one.
    ///
    /// # Panics
    ///
    /// Panics if the worker thread cannot be spawned.
    #[must_use]
    pub fn with_error_stream(
        capacity: usize,
        normal_out: OutputStream,
        err_out: OutputStream,
    ) -> Self {
        Self::start_or_panic(capacity.max(1), normal_out, Some(err_out))
    }

    /// Writer sending everything to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(LOG_BUFFER_LENGTH, Box::new(io::stdout()))
    }

    /// Writer sending ERROR and CRITICAL to standard error and the rest to
    /// standard output
    #[must_use]
    pub fn stdout_stderr() -> Self {
        Self::with_error_stream(LOG_BUFFER_LENGTH, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Create a builder for AsyncConsoleWriter
    #[must_use]
    pub fn builder() -> ConsoleWriterBuilder {
        ConsoleWriterBuilder::new()
    }

    fn start_or_panic(
        capacity: usize,
        normal_out: OutputStream,
        err_out: Option<OutputStream>,
    ) -> Self {
        match Self::start(capacity, normal_out, err_out) {
            Ok(writer) => writer,
            Err(e) => panic!("failed to spawn console writer worker: {}", e),
        }
    }

    fn start(
        capacity: usize,
        normal_out: OutputStream,
        err_out: Option<OutputStream>,
    ) -> io::Result<Self> {
        let (sender, receiver) = bounded(capacity);
        let metrics = Arc::new(WriterMetrics::new());
        let splits_errors = err_out.is_some();

        let worker = ConsoleWorker {
            receiver,
            normal_out,
            err_out,
            timestamps: TimestampCache::new(),
            line: String::with_capacity(128),
            metrics: Arc::clone(&metrics),
        };

        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || worker.run())?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(handle),
            metrics,
            capacity,
            splits_errors,
        })
    }

    /// Queue a record, blocking while the queue is full.
    ///
    /// Records submitted after [`close`](Self::close) are discarded.
    pub fn log_write(&self, record: LogRecord) {
        let Some(sender) = self.sender.as_ref() else {
            return;
        };

        match sender.try_send(record) {
            Ok(()) => {
                self.metrics.record_submitted();
            }
            Err(TrySendError::Full(record)) => {
                // Backpressure: wait for the worker to free a slot
                self.metrics.record_block();
                if sender.send(record).is_ok() {
                    self.metrics.record_submitted();
                }
            }
            Err(TrySendError::Disconnected(_)) => {
                // Worker is gone
            }
        }
    }

    /// Stop accepting records and wait until every queued record is written.
    ///
    /// Closing an already closed writer does nothing.
    pub fn close(&mut self) {
        drop(self.sender.take());

        if let Some(handle) = self.worker.take() {
            if let Err(e) = handle.join() {
                eprintln!("[WRITER ERROR] Console writer worker panicked during shutdown: {:?}", e);
            }
        }
    }

    /// Like [`close`](Self::close), but stop waiting for the worker after `timeout`.
    ///
    /// # Returns
    ///
    /// `true` if the worker drained the queue and exited within `timeout`
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        drop(self.sender.take());

        let Some(handle) = self.worker.take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[WRITER ERROR] Console writer worker panicked during shutdown: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[WRITER WARNING] Console writer worker did not finish within {:?}. \
                     {} queued records may not be written.",
                    timeout,
                    self.metrics.in_flight()
                );
                return false;
            }

            thread::sleep(Duration::from_millis(10));
        }
    }

    /// Render a record exactly as the worker would, without caching
    pub fn format_line(record: &LogRecord) -> String {
        let mut line = String::new();
        let timestamp = crate::core::format_timestamp(&record.created);
        render_line(&mut line, &timestamp, record);
        line
    }

    /// Number of records waiting in the queue
    pub fn pending(&self) -> usize {
        self.sender.as_ref().map_or(0, |sender| sender.len())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether ERROR and CRITICAL records go to a separate stream
    pub fn splits_errors(&self) -> bool {
        self.splits_errors
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_none()
    }

    pub fn metrics(&self) -> &WriterMetrics {
        &self.metrics
    }
}

impl LogWriter for AsyncConsoleWriter {
    fn log_write(&self, record: LogRecord) {
        AsyncConsoleWriter::log_write(self, record);
    }

    fn close(&mut self) {
        AsyncConsoleWriter::close(self);
    }
}

impl Drop for AsyncConsoleWriter {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
        }
    }
}

/// Worker state. Owns both streams for the lifetime of the writer.
struct ConsoleWorker {
    receiver: Receiver<LogRecord>,
    normal_out: OutputStream,
    err_out: Option<OutputStream>,
    timestamps: TimestampCache,
    line: String,
    metrics: Arc<WriterMetrics>,
}

impl ConsoleWorker {
    fn run(mut self) {
        // recv() keeps returning queued records after the sender is dropped
        // and only fails once the queue is empty.
        while let Ok(record) = self.receiver.recv() {
            self.write_record(&record);
            self.metrics.record_processed();

            if self.receiver.is_empty() {
                self.flush();
            }
        }

        self.flush();
    }

    fn write_record(&mut self, record: &LogRecord) {
        self.line.clear();
        let timestamp = self.timestamps.get(&record.created);
        render_line(&mut self.line, timestamp, record);

        let out = match self.err_out.as_mut() {
            Some(err_out) if record.level.is_error() => err_out,
            _ => &mut self.normal_out,
        };

        // A misbehaving stream must not take the worker down with it
        let line = self.line.as_bytes();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| out.write_all(line)));
    }

    fn flush(&mut self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = self.normal_out.flush();
            if let Some(err_out) = self.err_out.as_mut() {
                let _ = err_out.flush();
            }
        }));
    }
}

fn render_line(line: &mut String, timestamp: &str, record: &LogRecord) {
    line.push('[');
    line.push_str(timestamp);
    line.push_str("] [");
    line.push_str(record.level.to_str());
    line.push_str("] ");
    line.push_str(&record.message);
    line.push('\n');
}

/// Builder for constructing an [`AsyncConsoleWriter`] with a fluent API
///
/// # Example
///
/// ```
/// use console_log_writer::prelude::*;
///
/// let out = SharedBuffer::new();
/// let writer = AsyncConsoleWriter::builder()
///     .capacity(128)
///     .normal_stream(Box::new(out.clone()))
///     .stderr_for_errors()
///     .build()
///     .unwrap();
///
/// assert_eq!(writer.capacity(), 128);
/// assert!(writer.splits_errors());
/// ```
pub struct ConsoleWriterBuilder {
    capacity: usize,
    normal_out: Option<OutputStream>,
    err_out: Option<OutputStream>,
}

impl ConsoleWriterBuilder {
    /// Builder writing everything to standard output with the default capacity
    pub fn new() -> Self {
        Self {
            capacity: LOG_BUFFER_LENGTH,
            normal_out: None,
            err_out: None,
        }
    }

    /// Set the queue depth. Must be positive.
    #[must_use = "builder methods return a new value"]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Stream for non-error records (standard output if not set)
    #[must_use = "builder methods return a new value"]
    pub fn normal_stream(mut self, stream: OutputStream) -> Self {
        self.normal_out = Some(stream);
        self
    }

    /// Route ERROR and CRITICAL records to `stream`
    #[must_use = "builder methods return a new value"]
    pub fn error_stream(mut self, stream: OutputStream) -> Self {
        self.err_out = Some(stream);
        self
    }

    /// Route ERROR and CRITICAL records to standard error
    #[must_use = "builder methods return a new value"]
    pub fn stderr_for_errors(self) -> Self {
        self.error_stream(Box::new(io::stderr()))
    }

    /// Start the writer
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] for a zero capacity and
    /// [`LoggerError::WorkerSpawn`] if the worker thread cannot be started.
    pub fn build(self) -> Result<AsyncConsoleWriter> {
        if self.capacity == 0 {
            return Err(LoggerError::config(
                "ConsoleWriterBuilder",
                "capacity must be positive",
            ));
        }

        let normal_out = self.normal_out.unwrap_or_else(|| Box::new(io::stdout()));
        AsyncConsoleWriter::start(self.capacity, normal_out, self.err_out)
            .map_err(LoggerError::WorkerSpawn)
    }
}

impl Default for ConsoleWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! # Console Log Writer
//!
//! An asynchronous console log writer. Producers hand [`LogRecord`]s to an
//! [`AsyncConsoleWriter`], which buffers them in a bounded queue and renders
//! them on a dedicated worker thread.
//!
//! ## Features
//!
//! - **Non-blocking under normal load**: submission only waits when the queue is full
//! - **Severity routing**: ERROR and CRITICAL can go to a separate stream
//! - **Ordered output**: lines appear in submission order
//! - **Drain on close**: nothing already queued is lost at shutdown
//!
//! ## Example
//!
//! ```
//! use console_log_writer::prelude::*;
//!
//! let out = SharedBuffer::new();
//! let err = SharedBuffer::new();
//! let mut writer = AsyncConsoleWriter::with_error_stream(
//!     LOG_BUFFER_LENGTH,
//!     Box::new(out.clone()),
//!     Box::new(err.clone()),
//! );
//!
//! writer.log_write(LogRecord::new(LogLevel::Info, "hello"));
//! writer.log_write(LogRecord::new(LogLevel::Error, "fail"));
//! writer.close();
//!
//! assert!(out.contents().ends_with("[INFO] hello\n"));
//! assert!(err.contents().ends_with("[ERROR] fail\n"));
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{AsyncConsoleWriter, ConsoleWriterBuilder, LOG_BUFFER_LENGTH};
    pub use crate::core::{
        format_timestamp, LogLevel, LogRecord, LogWriter, LoggerError, OutputStream, Result,
        SharedBuffer, TimestampCache, WriterMetrics, CONSOLE_TIMESTAMP_FORMAT,
        DEFAULT_SHUTDOWN_TIMEOUT,
    };
}

pub use crate::appenders::{AsyncConsoleWriter, ConsoleWriterBuilder, LOG_BUFFER_LENGTH};
pub use crate::core::{
    format_timestamp, LogLevel, LogRecord, LogWriter, LoggerError, OutputStream, Result,
    SharedBuffer, TimestampCache, WriterMetrics, CONSOLE_TIMESTAMP_FORMAT,
    DEFAULT_SHUTDOWN_TIMEOUT,
};

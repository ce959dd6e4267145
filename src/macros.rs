//! Macros for building and submitting records with `format!`-style messages.
//!
//! Formatting happens at the call site, so writers only ever see finished
//! message text. Records built here carry the caller's `file:line` as their
//! source.
//!
//! # Examples
//!
//! ```
//! use console_log_writer::prelude::*;
//! use console_log_writer::log_write;
//!
//! let out = SharedBuffer::new();
//! let mut writer = AsyncConsoleWriter::new(LOG_BUFFER_LENGTH, Box::new(out.clone()));
//!
//! let port = 8080;
//! log_write!(writer, LogLevel::Info, "Server listening on port {}", port);
//! writer.close();
//!
//! assert!(out.contents().ends_with("[INFO] Server listening on port 8080\n"));
//! ```

/// Build a [`LogRecord`](crate::LogRecord) stamped with the current time and
/// the caller's location.
///
/// # Examples
///
/// ```
/// use console_log_writer::{record, LogLevel};
///
/// let rec = record!(LogLevel::Warning, "{} retries left", 2);
/// assert_eq!(rec.message, "2 retries left");
/// assert!(rec.source.is_some());
/// ```
#[macro_export]
macro_rules! record {
    ($level:expr, $($arg:tt)+) => {
        $crate::LogRecord::new($level, format!($($arg)+))
            .with_source(concat!(file!(), ":", line!()))
    };
}

/// Build a record and hand it to a writer.
#[macro_export]
macro_rules! log_write {
    ($writer:expr, $level:expr, $($arg:tt)+) => {
        $writer.log_write($crate::record!($level, $($arg)+))
    };
}

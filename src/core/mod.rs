//! Core writer types and traits

pub mod appender;
pub mod error;
pub mod log_level;
pub mod log_record;
pub mod metrics;
pub mod stream;
pub mod timestamp;

pub use appender::{LogWriter, DEFAULT_SHUTDOWN_TIMEOUT};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use metrics::WriterMetrics;
pub use stream::{OutputStream, SharedBuffer};
pub use timestamp::{format_timestamp, TimestampCache, CONSOLE_TIMESTAMP_FORMAT};

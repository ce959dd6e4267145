//! Writer implementations

pub mod console;

pub use console::{AsyncConsoleWriter, ConsoleWriterBuilder, LOG_BUFFER_LENGTH};

// Re-export the writer trait alongside its implementations
pub use crate::core::LogWriter;

//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One log entry as handed to a writer.
///
/// The message is already fully formatted; writers render it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub created: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            created: Local::now(),
            source: None,
            message: message.into(),
        }
    }

    /// Override the creation time
    #[must_use]
    pub fn at(mut self, created: DateTime<Local>) -> Self {
        self.created = created;
        self
    }

    /// Attach the caller location, e.g. `"main.rs:42"`
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

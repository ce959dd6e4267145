//! Error types for the writer

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors raised while configuring a writer.
///
/// The write path itself never produces errors: destination I/O failures are
/// absorbed by the worker and are not reported to producers.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Worker thread could not be started
    #[error("Failed to spawn writer worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    /// Unrecognized level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an invalid level error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }
}

//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Finest = 0,
    Fine = 1,
    Debug = 2,
    Trace = 3,
    #[default]
    Info = 4,
    Warning = 5,
    Error = 6,
    Critical = 7,
}

impl LogLevel {
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Finest,
        LogLevel::Fine,
        LogLevel::Debug,
        LogLevel::Trace,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// Name rendered between brackets in console output.
    ///
    /// Warning renders as `WARN`, not `WARNING`; existing log consumers match on it.
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Finest => "FINEST",
            LogLevel::Fine => "FINE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// True for the levels routed to the error stream
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Critical)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FINEST" => Ok(LogLevel::Finest),
            "FINE" => Ok(LogLevel::Fine),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Finest < LogLevel::Fine);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Critical);
    }

    #[test]
    fn test_is_error() {
        let errors: Vec<_> = LogLevel::ALL.iter().filter(|l| l.is_error()).collect();
        assert_eq!(errors, vec![&LogLevel::Error, &LogLevel::Critical]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("critical".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}

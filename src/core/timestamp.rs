//! Timestamp rendering for console output
//!
//! Console lines carry a second-resolution local timestamp such as
//! `01/15/24 12:00:00`. Bursts of records usually share a second, so the
//! worker keeps the last rendered string and only reformats when the second
//! changes.

use chrono::{DateTime, Local};

/// strftime layout of console timestamps: `MM/DD/YY HH:MM:SS`
pub const CONSOLE_TIMESTAMP_FORMAT: &str = "%m/%d/%y %H:%M:%S";

/// Format a timestamp in the console layout without caching
///
/// # Examples
///
/// ```
/// use console_log_writer::core::format_timestamp;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2024, 1, 15, 9, 5, 7).single().unwrap();
/// assert_eq!(format_timestamp(&at), "01/15/24 09:05:07");
/// ```
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Local>) -> String {
    datetime.format(CONSOLE_TIMESTAMP_FORMAT).to_string()
}

/// Last rendered timestamp, keyed by whole Unix second.
///
/// Starts empty, so no second (including the epoch) is ever served from a
/// stale entry.
#[derive(Debug, Default)]
pub struct TimestampCache {
    entry: Option<(i64, String)>,
}

impl TimestampCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered text for `datetime`, reformatting only on a new second
    pub fn get(&mut self, datetime: &DateTime<Local>) -> &str {
        let second = datetime.timestamp();
        if self.entry.as_ref().is_some_and(|(cached, _)| *cached != second) {
            self.entry = None;
        }
        let (_, text) = self
            .entry
            .get_or_insert_with(|| (second, format_timestamp(datetime)));
        text
    }

    /// Second of the cached entry, if any
    pub fn cached_second(&self) -> Option<i64> {
        self.entry.as_ref().map(|(second, _)| *second)
    }
}

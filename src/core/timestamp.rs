//! Timestamp formatting for line headers
//!
//! The header's date parameter is rendered from the local wall clock. The
//! standard format is `YYYY-MM-DD HH:MM:SS` at second precision; other formats
//! can be selected per logger.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// strftime pattern of [`TimestampFormat::Standard`].
pub const STANDARD_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format options for the header's date parameter
///
/// # Examples
///
/// ```
/// use leveled_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Standard.format(&at), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45`
    #[default]
    Standard,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+09:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45+09:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format
    ///
    /// A pattern chrono cannot render falls back to [`TimestampFormat::Standard`]
    /// instead of failing the log call.
    Custom(String),
}

impl TimestampFormat {
    /// Format a datetime according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Standard => datetime.format(STANDARD_TIMESTAMP).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => datetime.format(STANDARD_TIMESTAMP).to_string(),
                }
            }
        }
    }

}

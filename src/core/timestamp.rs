//! Timestamp formatting for rendered records
//!
//! Console and file sinks each carry their own [`TimestampFormat`], so the two
//! destinations can render the same record's time differently.

use chrono::{DateTime, Local};

/// Console default: `2025-01-08 10:30:45,123`
pub const CONSOLE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// File default: `08-Jan-2025 10:30:45`
pub const FILE_TIMESTAMP: &str = "%d-%b-%Y %H:%M:%S";

/// Timestamp format options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Local time with milliseconds: `2025-01-08 10:30:45,123`
    #[default]
    Console,

    /// Day, abbreviated month and year: `08-Jan-2025 10:30:45`
    File,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use framework_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Console => datetime.format(CONSOLE_TIMESTAMP).to_string(),
            TimestampFormat::File => datetime.format(FILE_TIMESTAMP).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

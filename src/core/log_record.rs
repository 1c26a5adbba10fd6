//! Log record structure

use super::location::SourceLocation;
use super::severity::Severity;
use chrono::{DateTime, Local};
use serde::Serialize;

/// One emitted log event.
///
/// Built once per emit call and handed by reference to every sink that
/// receives it.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub location: SourceLocation,
}

impl LogRecord {
    /// Escape line breaks and tabs so a record never spans more than one line
    /// and cannot forge entries in the log file.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(severity: Severity, message: &str, location: SourceLocation) -> Self {
        Self::with_timestamp(severity, message, location, Local::now())
    }

    pub fn with_timestamp(
        severity: Severity,
        message: &str,
        location: SourceLocation,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            severity,
            message: Self::sanitize_message(message),
            timestamp,
            location,
        }
    }
}

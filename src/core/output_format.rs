//! Output format configuration for log records
//!
//! - Text: `timestamp | SEVERITY | file:function | message` (default)
//! - Json: one JSON object per line

use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;

/// Output format for log records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Example: `08-Jan-2025 10:30:45 |      INFO | main.rs:main | Request processed`
    #[default]
    Text,

    /// Example: `{"timestamp":"08-Jan-2025 10:30:45","severity":"INFO",...}`
    Json,
}

impl OutputFormat {
    /// Render `record` without a trailing newline
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => format_text(record, &timestamp_format.format(&record.timestamp)),
            OutputFormat::Json => format_json(record, timestamp_format),
        }
    }
}

/// Shared text layout; the console sink reuses it with a colored severity.
pub(crate) fn format_text(record: &LogRecord, timestamp: &str) -> String {
    format!(
        "{} | {:>9} | {} | {}",
        timestamp, record.severity, record.location, record.message
    )
}

fn format_json(record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
    let mut json_obj = serde_json::Map::new();

    json_obj.insert(
        "timestamp".to_string(),
        serde_json::Value::String(timestamp_format.format(&record.timestamp)),
    );
    json_obj.insert(
        "severity".to_string(),
        serde_json::Value::String(record.severity.as_str().to_string()),
    );
    json_obj.insert(
        "file".to_string(),
        serde_json::Value::String(record.location.file_name().to_string()),
    );
    if let Some(function) = record.location.function {
        json_obj.insert(
            "function".to_string(),
            serde_json::Value::String(function.to_string()),
        );
    }
    json_obj.insert(
        "line".to_string(),
        serde_json::Value::Number(record.location.line.into()),
    );
    json_obj.insert(
        "message".to_string(),
        serde_json::Value::String(record.message.clone()),
    );

    serde_json::Value::Object(json_obj).to_string()
}

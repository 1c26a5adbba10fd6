//! File sink implementation

use crate::core::{LogRecord, LoggerError, OutputFormat, Result, Sink, TimestampFormat};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only sink bound to one file for its whole lifetime.
///
/// Every record is flushed as soon as it is written, so the file always holds
/// everything dispatched so far.
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}' for append", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            timestamp_format: TimestampFormat::File,
            output_format: OutputFormat::Text,
        })
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let mut output = self.output_format.format(record, &self.timestamp_format);
        output.push('\n');

        self.writer
            .write_all(output.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| LoggerError::file_sink(self.path.display().to_string(), e.to_string()))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

//! Console sink implementation

use crate::core::{LogRecord, OutputFormat, Result, Sink, TimestampFormat};
use std::io::Write;

/// Stream the console sink renders to. The stream is never closed by the
/// logger; detaching the sink only stops dispatch to it.
pub enum ConsoleTarget {
    Stdout,
    Writer(Box<dyn Write + Send>),
}

pub struct ConsoleSink {
    target: ConsoleTarget,
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleSink {
    /// Sink writing to stdout, colored when the `console` feature is on
    pub fn new() -> Self {
        Self::with_target(ConsoleTarget::Stdout, cfg!(feature = "console"))
    }

    /// Sink writing to an arbitrary stream, without colors
    ///
    /// # Example
    ///
    /// ```
    /// use framework_logger::ConsoleSink;
    ///
    /// let sink = ConsoleSink::with_writer(Vec::new());
    /// ```
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::with_target(ConsoleTarget::Writer(Box::new(writer)), false)
    }

    fn with_target(target: ConsoleTarget, use_colors: bool) -> Self {
        Self {
            target,
            use_colors,
            timestamp_format: TimestampFormat::Console,
            output_format: OutputFormat::Text,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn render(&self, record: &LogRecord) -> String {
        match self.output_format {
            OutputFormat::Text if self.use_colors => self.format_colored(record),
            _ => self.output_format.format(record, &self.timestamp_format),
        }
    }

    #[cfg(feature = "console")]
    fn format_colored(&self, record: &LogRecord) -> String {
        use colored::Colorize;

        let timestamp = self.timestamp_format.format(&record.timestamp);
        let severity = format!("{:>9}", record.severity)
            .color(record.severity.color())
            .to_string();
        format!(
            "{} | {} | {} | {}",
            timestamp, severity, record.location, record.message
        )
    }

    #[cfg(not(feature = "console"))]
    fn format_colored(&self, record: &LogRecord) -> String {
        crate::core::output_format::format_text(
            record,
            &self.timestamp_format.format(&record.timestamp),
        )
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let output = self.render(record);

        match &mut self.target {
            ConsoleTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", output)?;
            }
            ConsoleTarget::Writer(writer) => writeln!(writer, "{}", output)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match &mut self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Writer(writer) => writer.flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

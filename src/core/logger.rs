//! Main logger implementation

use super::{
    dispatcher::Dispatcher,
    error::Result,
    lifecycle::{self, LoggerState},
    location::SourceLocation,
    log_context::LogContext,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    output_format::OutputFormat,
    severity::Severity,
    sink::SinkKind,
    timestamp::TimestampFormat,
};
use crate::sinks::ConsoleSink;
use parking_lot::Mutex;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Named logger writing to the console and, optionally, to a log file.
///
/// - Standard severities (`debug` through `critical`) reach every active sink
///   in verbose mode. In quiet mode they go to the log file only, or nowhere
///   when the logger has no file.
/// - `framework` records reach every active sink regardless of verbosity.
/// - `pause`/`resume` take the file out of dispatch and put it back without
///   closing or reopening it.
///
/// Every method takes `&self`; a logger can be shared across threads behind
/// an `Arc`. One emit call holds the dispatcher lock from routing to the last
/// write, so records never interleave.
///
/// # Example
///
/// ```no_run
/// use framework_logger::Logger;
///
/// let logger = Logger::builder("ingest")
///     .log_dir("logs")
///     .verbose(false)
///     .build()?;
///
/// logger.info("only in the log file");
/// logger.framework("on the console and in the log file");
///
/// logger.pause();
/// logger.warning("console-less and file-less while paused");
/// logger.resume();
/// # Ok::<(), framework_logger::LoggerError>(())
/// ```
pub struct Logger {
    name: String,
    log_file: Option<PathBuf>,
    dispatcher: Mutex<Dispatcher>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Console-only, verbose logger
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut dispatcher = Dispatcher::new(true);
        dispatcher.attach(SinkKind::Console, Box::new(ConsoleSink::new()));

        Self {
            name: name.into(),
            log_file: None,
            dispatcher: Mutex::new(dispatcher),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Logger writing to a fresh log file under `log_dir` as well as the console
    pub fn with_log_dir(
        name: impl Into<String>,
        log_dir: impl Into<PathBuf>,
        verbose: bool,
    ) -> Result<Self> {
        Self::builder(name).log_dir(log_dir).verbose(verbose).build()
    }

    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the log file, if the logger has one
    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.dispatcher.lock().verbose()
    }

    pub fn set_verbose(&self, verbose: bool) {
        self.dispatcher.lock().set_verbose(verbose);
    }

    pub fn state(&self) -> LoggerState {
        let dispatcher = self.dispatcher.lock();
        if dispatcher.has_sink(SinkKind::File) && !dispatcher.is_active(SinkKind::File) {
            LoggerState::FilePaused
        } else {
            LoggerState::Active
        }
    }

    pub fn is_file_paused(&self) -> bool {
        self.state() == LoggerState::FilePaused
    }

    /// Stop writing to the log file. The file stays open.
    ///
    /// No-op when already paused or when the logger has no file.
    pub fn pause(&self) {
        let mut dispatcher = self.dispatcher.lock();
        if dispatcher.set_active(SinkKind::File, false) {
            if let Err(e) = dispatcher.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush logger '{}' on pause: {}", self.name, e);
            }
        }
    }

    /// Start writing to the log file again, appending after what was written
    /// before `pause`.
    ///
    /// No-op when not paused or when the logger has no file.
    pub fn resume(&self) {
        self.dispatcher.lock().set_active(SinkKind::File, true);
    }

    /// Emit `message` at `severity`, attributed to the caller.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl AsRef<str>) {
        self.log_at(SourceLocation::caller(), severity, message);
    }

    /// Emit `message` at `severity` with an explicit source location.
    pub fn log_at(&self, location: SourceLocation, severity: Severity, message: impl AsRef<str>) {
        self.emit(LogRecord::new(severity, message.as_ref(), location));
    }

    /// Emit `message` with structured fields appended as `key=value` pairs.
    #[track_caller]
    pub fn log_with_context(&self, severity: Severity, message: impl AsRef<str>, context: &LogContext) {
        self.log_at(
            SourceLocation::caller(),
            severity,
            context.merge_into(message.as_ref()),
        );
    }

    fn emit(&self, record: LogRecord) {
        self.metrics.record_emitted();

        let delivery = self.dispatcher.lock().dispatch(&record);

        if delivery.failed > 0 {
            self.metrics.record_write_failures(delivery.failed as u64);
        }
        if delivery.delivered > 0 {
            self.metrics.record_delivered();
        } else if delivery.is_dropped() {
            self.metrics.record_dropped();
        }
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Severity::Debug, message);
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Severity::Info, message);
    }

    #[track_caller]
    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(Severity::Warning, message);
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Severity::Error, message);
    }

    #[track_caller]
    #[inline]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(Severity::Critical, message);
    }

    /// Emit at FRAMEWORK severity: shown on every active sink whatever the
    /// verbosity setting.
    #[track_caller]
    #[inline]
    pub fn framework(&self, message: impl AsRef<str>) {
        self.log(Severity::Framework, message);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.dispatcher.lock().flush()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.dispatcher.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush logger '{}' during shutdown: {}", self.name, e);
        }
    }
}

/// Builder for constructing a [`Logger`]
///
/// # Example
/// ```
/// use framework_logger::prelude::*;
///
/// let logger = Logger::builder("worker")
///     .verbose(false)
///     .console_writer(std::io::sink())
///     .build()
///     .expect("console-only loggers always build");
///
/// assert!(logger.log_file_path().is_none());
/// ```
pub struct LoggerBuilder {
    name: String,
    log_dir: Option<PathBuf>,
    fallback_dir: Option<PathBuf>,
    verbose: bool,
    console: Option<ConsoleSink>,
    file_timestamp: TimestampFormat,
    file_format: OutputFormat,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            log_dir: None,
            fallback_dir: None,
            verbose: true,
            console: None,
            file_timestamp: TimestampFormat::File,
            file_format: OutputFormat::Text,
        }
    }

    /// Also log to a new file in `dir`
    #[must_use = "builder methods return a new value"]
    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Directory used when the log directory cannot be created.
    /// Defaults to the platform temp directory.
    #[must_use = "builder methods return a new value"]
    pub fn fallback_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fallback_dir = Some(dir.into());
        self
    }

    /// Default `true`
    #[must_use = "builder methods return a new value"]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Replace the default stdout console sink
    #[must_use = "builder methods return a new value"]
    pub fn console_sink(mut self, sink: ConsoleSink) -> Self {
        self.console = Some(sink);
        self
    }

    /// Send console output to `writer` instead of stdout
    #[must_use = "builder methods return a new value"]
    pub fn console_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.console_sink(ConsoleSink::with_writer(writer))
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_timestamp(mut self, format: TimestampFormat) -> Self {
        self.file_timestamp = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_format(mut self, format: OutputFormat) -> Self {
        self.file_format = format;
        self
    }

    /// Build the logger, creating the log file if a directory was given.
    ///
    /// Fails only if the name cannot be used as a file name, or if the file
    /// cannot be opened in either the log directory or the fallback directory.
    pub fn build(self) -> Result<Logger> {
        let mut dispatcher = Dispatcher::new(self.verbose);
        dispatcher.attach(
            SinkKind::Console,
            Box::new(self.console.unwrap_or_default()),
        );

        let mut log_file = None;
        if let Some(dir) = self.log_dir {
            let fallback = self
                .fallback_dir
                .unwrap_or_else(lifecycle::default_fallback_dir);
            let sink = lifecycle::open_log_file(&self.name, &dir, &fallback)?
                .with_timestamp_format(self.file_timestamp)
                .with_output_format(self.file_format);

            log_file = Some(sink.path().to_path_buf());
            dispatcher.attach(SinkKind::File, Box::new(sink));
        }

        Ok(Logger {
            name: self.name,
            log_file,
            dispatcher: Mutex::new(dispatcher),
            metrics: LoggerMetrics::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder("defaults")
            .console_writer(Capture::default())
            .build()
            .expect("build console logger");

        assert_eq!(logger.name(), "defaults");
        assert!(logger.verbose());
        assert!(logger.log_file_path().is_none());
        assert_eq!(logger.state(), LoggerState::Active);
    }

    #[test]
    fn test_builder_rejects_path_like_name() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = Logger::builder("../escape")
            .log_dir(temp_dir.path())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_caller_location_is_call_site() {
        let console = Capture::default();
        let logger = Logger::builder("location")
            .console_writer(console.clone())
            .build()
            .expect("build console logger");

        logger.info("where am I");
        let expected = format!("logger.rs:{} | where am I", line!() - 1);

        assert!(
            console.contents().contains(&expected),
            "console output was: {}",
            console.contents()
        );
    }

    #[test]
    fn test_log_with_context_merges_fields() {
        let console = Capture::default();
        let logger = Logger::builder("ctx")
            .console_writer(console.clone())
            .build()
            .expect("build console logger");

        let ctx = LogContext::new().with_field("attempt", 2).with_field("host", "db1");
        logger.log_with_context(Severity::Warning, "retrying", &ctx);

        assert!(console.contents().contains("| retrying attempt=2 host=db1"));
    }

    #[test]
    fn test_set_verbose_switches_gating() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let console = Capture::default();
        let logger = Logger::builder("toggle")
            .log_dir(temp_dir.path())
            .console_writer(console.clone())
            .build()
            .expect("build file logger");

        logger.info("loud");
        logger.set_verbose(false);
        logger.info("hushed");

        let console_out = console.contents();
        assert!(console_out.contains("loud"));
        assert!(!console_out.contains("hushed"));

        let path = logger.log_file_path().expect("file logger").to_path_buf();
        let content = fs::read_to_string(path).expect("Failed to read log file");
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_metrics_track_drops() {
        let logger = Logger::builder("quiet")
            .verbose(false)
            .console_writer(Capture::default())
            .build()
            .expect("build console logger");

        logger.debug("dropped");
        logger.framework("shown");

        let metrics = logger.metrics();
        assert_eq!(metrics.total_emitted(), 2);
        assert_eq!(metrics.dropped_count(), 1);
        assert_eq!(metrics.total_delivered(), 1);
        assert_eq!(metrics.write_failures(), 0);
    }

    #[test]
    fn test_pause_and_resume_state() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let logger = Logger::builder("states")
            .log_dir(temp_dir.path())
            .console_writer(Capture::default())
            .build()
            .expect("build file logger");

        assert_eq!(logger.state(), LoggerState::Active);
        logger.pause();
        assert!(logger.is_file_paused());
        logger.resume();
        assert_eq!(logger.state(), LoggerState::Active);
    }

    #[test]
    fn test_quiet_framework_reaches_console_and_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let console = Capture::default();
        let logger = Logger::builder("always")
            .log_dir(temp_dir.path())
            .verbose(false)
            .console_writer(console.clone())
            .build()
            .expect("build file logger");

        logger.framework("must always surface");

        let path = logger.log_file_path().expect("file logger").to_path_buf();
        let content = fs::read_to_string(path).expect("Failed to read log file");
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("FRAMEWORK"));
        assert_eq!(console.contents().lines().count(), 1);
        assert_eq!(logger.metrics().dropped_count(), 0);
        assert_eq!(logger.metrics().total_delivered(), 1);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "reader gone"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_is_not_counted_as_drop() {
        let logger = Logger::builder("broken")
            .console_writer(BrokenPipe)
            .build()
            .expect("build console logger");

        logger.error("lost to the pipe");

        let metrics = logger.metrics();
        assert_eq!(metrics.total_emitted(), 1);
        assert_eq!(metrics.write_failures(), 1);
        assert_eq!(metrics.total_delivered(), 0);
        assert_eq!(metrics.dropped_count(), 0);
    }

    struct UnflushableWriter;

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("terminal detached"))
        }
    }

    #[test]
    fn test_pause_survives_flush_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let logger = Logger::builder("unflushable")
            .log_dir(temp_dir.path())
            .console_writer(UnflushableWriter)
            .build()
            .expect("build file logger");

        logger.info("before");
        logger.pause();
        assert!(logger.is_file_paused());

        logger.resume();
        logger.info("after");

        let path = logger.log_file_path().expect("file logger").to_path_buf();
        let content = fs::read_to_string(path).expect("Failed to read log file");
        assert_eq!(content.lines().count(), 2);
    }
}

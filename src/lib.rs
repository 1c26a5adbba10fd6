//! # Framework Logger
//!
//! A named logger with two destinations, the console and an optional log
//! file, and one extra severity.
//!
//! ## Features
//!
//! - **FRAMEWORK severity**: always shown, whatever the verbosity setting
//! - **Quiet mode**: standard severities go to the log file only
//! - **Pause/resume**: suspend file output without closing the file
//! - **Thread safe**: one emit call is atomic with respect to the others

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        FieldValue, LogContext, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        LoggerRegistry, LoggerState, OutputFormat, Result, Severity, Sink, SinkKind,
        SourceLocation, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use crate::core::{
    Delivery, Dispatcher, FieldValue, LogContext, LogRecord, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, LoggerRegistry, LoggerState, OutputFormat, Result, Route, Severity, Sink,
    SinkKind, SourceLocation, TimestampFormat,
};
pub use crate::sinks::{ConsoleSink, ConsoleTarget, FileSink};

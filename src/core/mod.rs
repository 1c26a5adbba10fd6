//! Core logger types and traits

pub mod dispatcher;
pub mod error;
pub mod lifecycle;
pub mod location;
pub mod log_context;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use dispatcher::{Delivery, Dispatcher, Route};
pub use error::{LoggerError, Result};
pub use lifecycle::LoggerState;
pub use location::SourceLocation;
pub use log_context::{FieldValue, LogContext};
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use registry::LoggerRegistry;
pub use severity::Severity;
pub use sink::{Sink, SinkKind};
pub use timestamp::TimestampFormat;

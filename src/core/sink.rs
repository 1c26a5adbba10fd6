//! Sink trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// Which slot of the dispatcher a sink occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Console,
    File,
}

/// A destination for rendered records.
///
/// Sinks never filter: which records reach a sink is decided entirely by the
/// dispatcher's route and the sink's active flag.
pub trait Sink: Send {
    fn write(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

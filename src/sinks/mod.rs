//! Sink implementations

pub mod console;
pub mod file;

pub use console::{ConsoleSink, ConsoleTarget};
pub use file::FileSink;

pub use crate::core::Sink;

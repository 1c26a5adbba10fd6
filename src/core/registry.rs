//! Explicit registry of named loggers
//!
//! There is no process-wide logger table. Code that wants to share loggers by
//! name creates a `LoggerRegistry` and passes it where it is needed.

use super::{error::Result, logger::Logger};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.lock().get(name).cloned()
    }

    /// Return the logger registered under `name`, building it with `build`
    /// on first use. A failed build registers nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use framework_logger::{Logger, LoggerRegistry};
    ///
    /// let registry = LoggerRegistry::new();
    /// let first = registry
    ///     .get_or_try_insert_with("db", |name| Logger::builder(name).verbose(false).build())
    ///     .unwrap();
    /// let again = registry
    ///     .get_or_try_insert_with("db", |name| Logger::builder(name).build())
    ///     .unwrap();
    ///
    /// assert!(std::sync::Arc::ptr_eq(&first, &again));
    /// assert!(!again.verbose());
    /// ```
    pub fn get_or_try_insert_with<F>(&self, name: &str, build: F) -> Result<Arc<Logger>>
    where
        F: FnOnce(&str) -> Result<Logger>,
    {
        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(name) {
            return Ok(Arc::clone(logger));
        }

        let logger = Arc::new(build(name)?);
        loggers.insert(name.to_string(), Arc::clone(&logger));
        Ok(logger)
    }

    /// Return the logger registered under `name`, creating a console-only
    /// verbose logger on first use.
    pub fn get_or_console(&self, name: &str) -> Arc<Logger> {
        let mut loggers = self.loggers.lock();
        Arc::clone(
            loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Logger::new(name))),
        )
    }

    /// Register `logger` under its own name, returning the logger it replaced.
    pub fn insert(&self, logger: Logger) -> Option<Arc<Logger>> {
        self.loggers
            .lock()
            .insert(logger.name().to_string(), Arc::new(logger))
    }

    pub fn remove(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.lock().remove(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }
}

//! Logging macros with `format!`-style arguments.
//!
//! Unlike the plain [`Logger`](crate::Logger) methods, which only know the
//! caller's file and line, the macros also record the name of the enclosing
//! function, so rendered records read `file.rs:function`.
//!
//! # Examples
//!
//! ```
//! use framework_logger::prelude::*;
//! use framework_logger::{framework, info};
//!
//! let logger = Logger::new("server");
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! framework!(logger, "Framework ready after {} ms", 12);
//! ```

/// Name of the enclosing function, without its module path.
///
/// ```
/// fn handle_request() -> &'static str {
///     framework_logger::function_name!()
/// }
/// assert_eq!(handle_request(), "handle_request");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::location::enclosing_function(type_name_of(f))
    }};
}

/// [`SourceLocation`](crate::SourceLocation) of the macro call site.
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::SourceLocation::new(file!(), $crate::function_name!(), line!())
    };
}

/// Log a message at any severity.
///
/// # Examples
///
/// ```
/// # use framework_logger::prelude::*;
/// # let logger = Logger::new("example");
/// use framework_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log_at($crate::source_location!(), $severity, ::std::format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use framework_logger::prelude::*;
/// # let logger = Logger::new("example");
/// use framework_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use framework_logger::prelude::*;
/// # let logger = Logger::new("example");
/// use framework_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use framework_logger::prelude::*;
/// # let logger = Logger::new("example");
/// use framework_logger::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use framework_logger::prelude::*;
/// # let logger = Logger::new("example");
/// use framework_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// ```
/// # use framework_logger::prelude::*;
/// # let logger = Logger::new("example");
/// use framework_logger::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

/// Log a framework-level message; shown regardless of verbosity.
///
/// ```
/// # use framework_logger::prelude::*;
/// # let logger = Logger::builder("example").verbose(false).build().unwrap();
/// use framework_logger::framework;
/// framework!(logger, "Pipeline stage {} complete", 2);
/// ```
#[macro_export]
macro_rules! framework {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Framework, $($arg)+)
    };
}

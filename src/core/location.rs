//! Caller location captured at emit time

use serde::Serialize;
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Where a log call was made.
///
/// Built either from `#[track_caller]` (file and line only) or by the
/// logging macros, which also resolve the enclosing function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: &'static str,
    pub function: Option<&'static str>,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function: Some(function),
            line,
        }
    }

    /// Location of the caller of the outermost `#[track_caller]` frame.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            function: None,
            line: location.line(),
        }
    }

    /// File name without its directories.
    pub fn file_name(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

/// Renders `file:function`, or `file:line` when the function is unknown.
impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            Some(function) => write!(f, "{}:{}", self.file_name(), function),
            None => write!(f, "{}:{}", self.file_name(), self.line),
        }
    }
}

/// Strip a `type_name` path down to the enclosing function name.
///
/// Used by [`function_name!`](crate::function_name); `path` is the type name
/// of a helper fn item declared inside the caller, e.g.
/// `my_crate::worker::run::{{closure}}::f`.
#[doc(hidden)]
pub fn enclosing_function(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::f").unwrap_or(path);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}

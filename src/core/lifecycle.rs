//! File sink lifecycle: directory preparation, file naming and the
//! active/paused state of an attached file sink.

use super::error::{LoggerError, Result};
use crate::sinks::FileSink;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp embedded in log file names: `20250108_103045`
pub const FILE_NAME_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

/// Observable lifecycle state of a logger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerState {
    /// Every attached sink takes part in dispatch
    Active,
    /// The file sink is attached but detached from dispatch
    FilePaused,
}

/// Directory used when the requested log directory cannot be created
pub fn default_fallback_dir() -> PathBuf {
    std::env::temp_dir()
}

/// `{name with spaces replaced by underscores}_{YYYYMMDD_HHMMSS}.log`
pub fn log_file_name(name: &str, now: &DateTime<Local>) -> String {
    format!(
        "{}_{}.log",
        name.replace(' ', "_"),
        now.format(FILE_NAME_TIMESTAMP)
    )
}

/// Reject names that would place the log file outside its directory.
pub fn validate_name(name: &str) -> Result<()> {
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(LoggerError::config(
            "Logger",
            format!("name '{}' cannot be used as a file name", name),
        ));
    }
    Ok(())
}

/// Make sure `dir` exists, or fall back to `fallback`.
///
/// Failure is reported on stderr and never returned; the returned path is the
/// directory the log file should be created in.
pub fn ensure_log_dir(dir: &Path, fallback: &Path) -> PathBuf {
    match create_dir(dir) {
        Ok(()) => dir.to_path_buf(),
        Err(e) => {
            eprintln!(
                "[LOGGER WARNING] {}. Defaulting to {}.",
                e,
                fallback.display()
            );
            fallback.to_path_buf()
        }
    }
}

/// Create the log file for `name` under `dir` and open it for append.
///
/// The directory falls back to `fallback` when it cannot be created; if the
/// file itself cannot be opened there, the fallback directory is tried once
/// more before giving up.
pub fn open_log_file(name: &str, dir: &Path, fallback: &Path) -> Result<FileSink> {
    validate_name(name)?;
    let file_name = log_file_name(name, &Local::now());
    let dir = ensure_log_dir(dir, fallback);

    match FileSink::new(dir.join(&file_name)) {
        Ok(sink) => Ok(sink),
        Err(e) if dir != fallback => {
            eprintln!("[LOGGER WARNING] {}. Defaulting to {}.", e, fallback.display());
            FileSink::new(fallback.join(&file_name))
        }
        Err(e) => Err(e),
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| LoggerError::log_dir(dir.display().to_string(), e.to_string()))
}

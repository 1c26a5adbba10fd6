//! Shared helpers for integration tests

#![allow(dead_code)]

use framework_logger::Logger;
use parking_lot::Mutex;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// In-memory console stream
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Logger with a captured console and, when `log_dir` is given, a log file
pub fn logger(name: &str, log_dir: Option<&Path>, verbose: bool) -> (Logger, Capture) {
    let console = Capture::default();
    let mut builder = Logger::builder(name)
        .verbose(verbose)
        .console_writer(console.clone());
    if let Some(dir) = log_dir {
        builder = builder.log_dir(dir);
    }
    (builder.build().expect("Failed to build logger"), console)
}

pub fn file_lines(logger: &Logger) -> Vec<String> {
    let path = logger.log_file_path().expect("logger has no log file");
    std::fs::read_to_string(path)
        .expect("Failed to read log file")
        .lines()
        .map(str::to_string)
        .collect()
}

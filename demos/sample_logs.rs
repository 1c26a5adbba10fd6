//! Sample logging session
//!
//! Shows a console-only logger, a verbose file logger and a quiet file logger,
//! then pauses and resumes file output.
//!
//! Run with: cargo run --example sample_logs

use framework_logger::prelude::*;
use framework_logger::{framework, info};
use std::fs;
use std::path::Path;

const SAMPLE_LOG_PATH: &str = "logs";

fn log_every_severity(logger: &Logger) {
    logger.debug("Sample logging to DEBUG level");
    logger.info("Sample logging to INFO level");
    logger.warning("Sample logging to WARNING level");
    logger.error("Sample logging to ERROR level");
    logger.critical("Sample logging to CRITICAL level");
    logger.framework("Sample logging to FRAMEWORK level");
}

fn run_sample_logs_console() {
    println!("\nStarting Console Logging");
    println!("{}", "-".repeat(80));

    // Verbose, no log directory: console only
    let console_log = Logger::new("console_logger");
    log_every_severity(&console_log);
}

fn run_sample_logs_verbose() -> Result<()> {
    println!("\nStarting Verbose Logging");
    println!("{}", "-".repeat(80));

    let verbose_log = Logger::with_log_dir(
        "verbose logger",
        Path::new(SAMPLE_LOG_PATH).join("verbose_logs"),
        true,
    )?;
    log_every_severity(&verbose_log);

    if let Some(path) = verbose_log.log_file_path() {
        println!("Log file: {}", path.display());
    }
    Ok(())
}

fn run_sample_logs_quiet() -> Result<()> {
    println!("\nStarting Quiet Logging (only FRAMEWORK reaches the console)");
    println!("{}", "-".repeat(80));

    let quiet_log = Logger::with_log_dir(
        "quiet logger",
        Path::new(SAMPLE_LOG_PATH).join("quiet_logs"),
        false,
    )?;
    log_every_severity(&quiet_log);

    quiet_log.pause();
    info!(quiet_log, "Not written anywhere while paused");
    framework!(quiet_log, "Console only while paused");
    quiet_log.resume();
    info!(quiet_log, "Appended to the same file after resume");

    let metrics = quiet_log.metrics();
    println!(
        "Emitted {}, delivered {}, dropped {}",
        metrics.total_emitted(),
        metrics.total_delivered(),
        metrics.dropped_count()
    );
    Ok(())
}

fn clean_up_created_logs() {
    println!("\nCleaning Up...");
    if let Err(e) = fs::remove_dir_all(SAMPLE_LOG_PATH) {
        eprintln!("Failed to remove {}: {}", SAMPLE_LOG_PATH, e);
    }
}

fn main() -> Result<()> {
    run_sample_logs_console();
    run_sample_logs_verbose()?;
    run_sample_logs_quiet()?;

    // Comment this out to keep the generated log files
    clean_up_created_logs();

    Ok(())
}

//! Logging module for debug mode
//!
//! Provides logging module that writes to a temp file
//! with timestamps when --debug is specified

use crate::constants::LOG_FILE_NAME;
use log::info;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Once;

// env_logger may only be installed once per process
static INIT: Once = Once::new();

/// Path of the debug log inside the system temp directory
pub fn debug_log_path() -> PathBuf {
    let mut log_path = std::env::temp_dir();
    log_path.push(LOG_FILE_NAME);
    log_path
}

/// Initializes logging when debug mode is enabled
/// Creates a file in the temp directory and sets up logger with timestamps
pub fn init_debug_logging() -> crate::Result<PathBuf> {
    let log_path = debug_log_path();

    // Create or truncate the log file
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .map_err(|e| {
            crate::SearchError::file_access_error(
                &log_path.to_string_lossy(),
                &format!("Failed to create log file: {}", e),
            )
        })?;

    INIT.call_once(move || {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .filter_module("crossterm", log::LevelFilter::Warn)
            .filter_module("ratatui", log::LevelFilter::Warn)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}:{} - {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S.%3f UTC"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init();
    });

    info!("Debug logging initialized to: {}", log_path.display());

    Ok(log_path)
}

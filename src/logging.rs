use log::{LevelFilter, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::LoggingError;

pub const LOG_FILE: &str = "log.txt";

// Stdout belongs to the story, so every record goes to a file instead.
#[derive(Debug)]
struct FileLogger {
    log_file: PathBuf,
    level: LevelFilter,
}

static LOGGER: OnceCell<FileLogger> = OnceCell::new();

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let log_entry = format!("[{}] {} - {}\n", timestamp, record.level(), record.args());

            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.log_file)
            {
                let _ = file.write_all(log_entry.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ai_adventure")
}

/// Install the file logger, writing to `log.txt` inside `log_dir`.
///
/// Returns the path of the log file. Only the first call can succeed since
/// the `log` facade accepts a single global logger.
pub fn init(log_dir: &Path, level: LevelFilter) -> Result<PathBuf, LoggingError> {
    create_dir_all(log_dir)?;
    let log_file = log_dir.join(LOG_FILE);

    let logger = LOGGER.get_or_init(|| FileLogger {
        log_file: log_file.clone(),
        level,
    });

    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(log_file)
}

//! Logging utilities.
//!
//! Two layers: the [`Logger`] keeps an in-memory buffer the logs dialog can
//! display at runtime, and [`init_file_logging`] wires the `log` facade to a
//! file through fern when the configuration asks for it.

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared in-memory logger for the in-app log view.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry. Also forwarded to the `log` facade so file logging
    /// picks it up when enabled.
    pub fn log(&self, message: String) {
        log::debug!("{}", message);

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs, newest first.
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the log file: `~/.local/share/remindr/remindr.log` (or the
/// platform equivalent).
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("could not determine data directory")?;
    Ok(data_dir.join("remindr").join("remindr.log"))
}

/// Route `log` macros to a file. Called once at startup when
/// `logging.enabled` is set; a TUI cannot log to stdout.
pub fn init_file_logging(level: log::LevelFilter) -> Result<()> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("could not create log directory")?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::log_file(&path).context("could not open log file")?)
        .apply()
        .context("could not install file logger")?;

    Ok(())
}

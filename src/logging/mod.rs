//! Dual-sink append-only logger
//!
//! Every event becomes one line, `"<local timestamp> :: <message>"`,
//! printed to stdout and appended to the configured log file. The file
//! handle sits behind a mutex so concurrent callers never interleave
//! partial lines. The log is never rotated or truncated.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Append-only logger shared by the scheduler and the reconciler.
pub struct SyncLogger {
    file: Mutex<File>,
}

impl SyncLogger {
    /// Open (or create) the log file in append mode
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Write one timestamped line to the console and the log file
    pub fn log(&self, message: &str) {
        let line = format!("{} :: {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message);
        println!("{line}");

        match self.file.lock() {
            Ok(mut file) => {
                if let Err(e) = writeln!(file, "{line}") {
                    eprintln!("Warning: failed to append to log file: {e}");
                }
            }
            Err(_) => eprintln!("Warning: log file mutex poisoned, line not persisted"),
        }
    }
}

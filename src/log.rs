// src/log.rs
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

use chrono::Local;

static LOG_FILE: &str = "scrape.log";
static LOG_LOCK: Mutex<()> = Mutex::new(());

/// Append one stamped line to the run log. Best-effort: a failing log file
/// never fails the run.
pub fn write_log(level: &str, msg: &str) {
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let line = format!("[{stamp}][{level}] {msg}\n");

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE)
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}

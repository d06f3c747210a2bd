//! Console Logger
//!
//! `log` backend for the browser. Records go to the devtools console on
//! wasm32; host builds format and drop them.

use chrono::{SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install as the global logger. Fails if a logger is already set.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger: &'static ConsoleLogger = Box::leak(Box::new(Self::new(level)));
        log::set_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        _ => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _line: &str) {}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        emit(record.level(), &format_record(record));
    }

    fn flush(&self) {}
}

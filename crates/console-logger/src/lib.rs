//! Console Logger
//!
//! A `log` facade backend for browser apps. On wasm32 each record goes to
//! the matching `console.*` method so DevTools level filtering works; on
//! native targets (tests, tooling) records go to stderr.

use std::fmt;

use chrono::{Local, NaiveTime};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger state installed as the global `log` backend
pub struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(app_name: &'static str, level: LevelFilter) -> Self {
        Self { app_name, level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(self.app_name, Local::now().time(), record.level(), record.args());
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the console logger as the global logger.
///
/// Fails if another logger was already installed.
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(app_name, level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name ("debug", "warn", ...), falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Render one log line: `HH:MM:SS.mmm LEVEL [App] message`
pub fn format_line(app_name: &str, time: NaiveTime, level: Level, message: &fmt::Arguments) -> String {
    format!("{} {:<5} [{}] {}", time.format("%H:%M:%S%.3f"), level, app_name, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    let value = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let time = NaiveTime::from_hms_milli_opt(9, 5, 3, 42).unwrap();
        let line = format_line("OpsHub", time, Level::Warn, &format_args!("Loaded {} items", 3));
        assert_eq!(line, "09:05:03.042 WARN  [OpsHub] Loaded 3 items");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("verbose"), LevelFilter::Info);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new("OpsHub", LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }
}

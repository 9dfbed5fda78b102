//! Browser implementations of the domain logging abstractions.

use gloo::console;
use wasm_bindgen::JsValue;

use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};

/// Writes log entries to the browser console, filtered by a minimum level
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    fn format_entry(entry: &LogEntry) -> String {
        let timestamp = get_time_provider().format_timestamp(entry.timestamp);
        format!("[{timestamp}] {} {} | {}", entry.level, entry.component, entry.message)
    }
}

impl Logger for ConsoleLogger {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, entry: LogEntry) {
        let line = Self::format_entry(&entry);
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => console::debug!(line),
            LogLevel::Info => console::info!(line),
            LogLevel::Warn => console::warn!(line),
            LogLevel::Error => console::error!(line),
        }
    }
}

/// Wall clock backed by `Date.now()`
#[derive(Default)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    /// `HH:MM:SS.mmm` in UTC
    fn format_timestamp(&self, timestamp: u64) -> String {
        let iso = String::from(js_sys::Date::new(&JsValue::from_f64(timestamp as f64)).to_iso_string());
        iso.get(11..23).unwrap_or(&iso).to_string()
    }
}

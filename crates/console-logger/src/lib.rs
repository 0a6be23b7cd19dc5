//! Console Logger
//!
//! `log` backend for WASM frontends. Each record goes to the browser
//! console method matching its level, so DevTools filtering keeps working.
//! Off the browser (unit tests, native builds) records go to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger {
    level: LevelFilter,
}

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

/// Install the console logger as the global `log` backend.
///
/// Fails if a logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

/// `[LEVEL target] message`
pub fn format_record(record: &Record) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;

    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug => console::debug_1(&line),
        Level::Trace => console::log_1(&line),
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
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("signup")
                .args(format_args!("field {} rejected", "domain_name"))
                .build(),
        );
        assert_eq!(line, "[WARN signup] field domain_name rejected");
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger { level: LevelFilter::Info };
        let debug = Metadata::builder().level(Level::Debug).build();
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }
}

//! Process-global default logger
//!
//! A single shared [`Logger`] for callers that do not want to thread one
//! through. Lazily stream-backed unless [`init`] installs a configured
//! instance first. The module-level helpers and macros swallow write errors;
//! use an owned `Logger` when failures need to be observed.

use once_cell::sync::OnceCell;

use crate::logger::Logger;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// Install the global logger
///
/// Returns the rejected logger if one was already installed (including the
/// lazily created default, once any helper has run).
pub fn init(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}

/// The global logger, created stream-backed on first use
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Log an info message to the global logger
pub fn info(message: &str) {
    let _ = logger().info(message);
}

/// Log a warning message to the global logger
pub fn warning(message: &str) {
    let _ = logger().warning(message);
}

/// Log an error message to the global logger
pub fn error(message: &str) {
    let _ = logger().error(message);
}

/// Convenience macros for logging to the global logger
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        { let _ = $crate::global::logger().log($crate::Severity::Info, format_args!($($arg)*)); }
    };
}

#[macro_export]
macro_rules! warning_log {
    ($($arg:tt)*) => {
        { let _ = $crate::global::logger().log($crate::Severity::Warning, format_args!($($arg)*)); }
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        { let _ = $crate::global::logger().log($crate::Severity::Error, format_args!($($arg)*)); }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatOptions;
    use std::fs;
    use tempfile::tempdir;

    // Tests share one process-global logger, so everything lives in a
    // single test to keep ordering deterministic.
    #[test]
    fn test_global_logger() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("global.log");

        let installed = Logger::with_file(&path).unwrap();
        installed.set_output_format(FormatOptions::none().with_message(true));
        init(installed).expect("global logger installed twice");

        info("one");
        warning("two");
        error("three");
        info_log!("n={}", 4);

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "one\ntwo\nthree\nn=4\n"
        );

        // A second install is rejected once the global exists.
        assert!(init(Logger::new()).is_err());
    }
}

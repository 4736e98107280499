//! LineLog Core
//!
//! Minimal process-local logging: severity-tagged, timestamped lines written
//! to a file or to the standard streams. A [`Logger`] renders each message
//! through a fixed stage pipeline (timestamp, severity symbol, severity
//! text, message), each stage gated by a [`FormatOptions`] flag, into a
//! bounded line buffer, and writes the result to its destination file or to
//! a severity-selected stream handle.
//!
//! ```no_run
//! use linelog_core::{FormatOptions, Logger};
//!
//! let logger = Logger::new();
//! logger.set_output_format(FormatOptions::default().with_severity_text(true));
//! logger.warning("disk almost full")?;
//!
//! logger.set_destination_file(Some(std::path::Path::new("app.log")))?;
//! linelog_core::log_info!(logger, "switched after {} lines", 1)?;
//! # Ok::<(), linelog_core::LogError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod global;
pub mod logger;
pub mod severity;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use error::{LogError, LogResult};
pub use format::{FormatOptions, LINE_CAPACITY};
pub use logger::{Logger, StreamHandle};
pub use severity::Severity;

//! Line rendering: format options and the fixed-size line buffer
//!
//! A log line is built in four stages, each gated by its own flag and run in
//! a fixed order: timestamp, severity symbol, severity text, message. The
//! line is assembled in a bounded buffer; content past the capacity is
//! silently dropped rather than growing the buffer or failing the call.

use std::fmt::{self, Write as _};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// Usable line capacity in bytes, not counting the trailing newline.
pub const LINE_CAPACITY: usize = 1022;

fn default_on() -> bool {
    true
}

/// Flags selecting which rendering stages run
///
/// Replaced wholesale by [`Logger::set_output_format`](crate::Logger::set_output_format);
/// the flags are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Local-time timestamp, `YYYY-MM-DD HH:MM:SS.ffffff`
    #[serde(default = "default_on")]
    pub timestamp: bool,
    /// Fixed-width severity marker (5 characters)
    #[serde(default = "default_on")]
    pub severity_symbol: bool,
    /// `"Error - "` / `"Warning - "` text label
    #[serde(default)]
    pub severity_text: bool,
    /// The caller's formatted message
    #[serde(default = "default_on")]
    pub message: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            timestamp: true,
            severity_symbol: true,
            severity_text: false,
            message: true,
        }
    }
}

impl FormatOptions {
    /// All stages disabled (rendered lines are a bare newline)
    pub fn none() -> Self {
        Self {
            timestamp: false,
            severity_symbol: false,
            severity_text: false,
            message: false,
        }
    }

    pub fn with_timestamp(mut self, on: bool) -> Self {
        self.timestamp = on;
        self
    }

    pub fn with_severity_symbol(mut self, on: bool) -> Self {
        self.severity_symbol = on;
        self
    }

    pub fn with_severity_text(mut self, on: bool) -> Self {
        self.severity_text = on;
        self
    }

    pub fn with_message(mut self, on: bool) -> Self {
        self.message = on;
        self
    }
}

/// Bounded line buffer
///
/// Accepts at most [`LINE_CAPACITY`] bytes of content; anything beyond that
/// is dropped without error. `finish` appends the single trailing newline.
struct LineBuffer {
    buf: Vec<u8>,
}

impl LineBuffer {
    fn new() -> Self {
        Self {
            buf: Vec::with_capacity(LINE_CAPACITY + 1),
        }
    }

    fn finish(mut self) -> Vec<u8> {
        self.buf.push(b'\n');
        self.buf
    }
}

impl fmt::Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = LINE_CAPACITY - self.buf.len();
        let take = room.min(s.len());
        self.buf.extend_from_slice(&s.as_bytes()[..take]);
        // Truncation is policy, not an error.
        Ok(())
    }
}

/// Render one log line as bytes, trailing newline included
///
/// Stage order is fixed; each stage appends only if its flag is on. The
/// newline is appended regardless of flags, so a fully-disabled format
/// still produces one (empty) line per call.
pub(crate) fn render_line(
    options: FormatOptions,
    severity: Severity,
    args: fmt::Arguments<'_>,
) -> Vec<u8> {
    let mut line = LineBuffer::new();

    if options.timestamp {
        let now = Local::now();
        let _ = write!(line, "{}", now.format("%Y-%m-%d %H:%M:%S%.6f"));
    }

    if options.severity_symbol {
        let _ = line.write_str(severity.symbol());
    }

    if options.severity_text {
        let _ = line.write_str(severity.label());
    }

    if options.message {
        let _ = write!(line, "{}", args);
    }

    line.finish()
}

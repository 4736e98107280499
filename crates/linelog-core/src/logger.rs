//! The logger: destination selection and writes
//!
//! A [`Logger`] is either file-backed or stream-backed. With a destination
//! file open, every line goes to it in append mode. Without one, lines are
//! routed by severity to a pair of stream handles that default to the
//! process's stdout and stderr. The handles are borrowed in spirit: dropping
//! the logger closes an owned destination file but never the process streams.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use parking_lot::Mutex;

use crate::error::{LogError, LogResult};
use crate::format::{render_line, FormatOptions};
use crate::severity::Severity;

/// Boxed writer standing in for stdout or stderr
pub type StreamHandle = Box<dyn Write + Send>;

struct Inner {
    /// Owned destination file. `None` routes to the stream handles.
    file: Option<File>,
    options: FormatOptions,
    stdout: StreamHandle,
    stderr: StreamHandle,
}

/// Severity-tagged line logger
///
/// All state sits behind one mutex, so a shared `Logger` can be used from
/// multiple threads without interleaving partial lines. A `log` call blocks
/// for the duration of one write syscall; there are no async suspension
/// points and no buffering beyond what the underlying stream does.
///
/// # Example
///
/// ```no_run
/// use linelog_core::{Logger, Severity};
///
/// let logger = Logger::with_file("/var/log/myapp.log")?;
/// logger.info("starting up")?;
/// logger.log(Severity::Warning, format_args!("retry {} of {}", 2, 5))?;
/// # Ok::<(), linelog_core::LogError>(())
/// ```
pub struct Logger {
    inner: Mutex<Inner>,
}

fn open_append(path: &Path) -> LogResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::open_file(path, e))
}

impl Logger {
    /// Create a stream-backed logger with default format options
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                file: None,
                options: FormatOptions::default(),
                stdout: Box::new(io::stdout()),
                stderr: Box::new(io::stderr()),
            }),
        }
    }

    /// Create a logger writing to `path`, opened in append mode
    pub fn with_file(path: impl AsRef<Path>) -> LogResult<Self> {
        let logger = Self::new();
        logger.set_destination_file(Some(path.as_ref()))?;
        Ok(logger)
    }

    /// Switch the destination file
    ///
    /// Any currently open destination is closed first, unconditionally.
    /// `None` or an empty path clears the destination and reverts to stream
    /// routing; that is not an error. If the new path cannot be opened the
    /// error is returned and the logger stays stream-backed, never
    /// half-open.
    pub fn set_destination_file(&self, path: Option<&Path>) -> LogResult<()> {
        let mut inner = self.inner.lock();
        inner.file = None;
        if let Some(path) = path {
            if !path.as_os_str().is_empty() {
                inner.file = Some(open_append(path)?);
            }
        }
        Ok(())
    }

    /// Replace the format options wholesale (not merged)
    pub fn set_output_format(&self, options: FormatOptions) {
        self.inner.lock().options = options;
    }

    /// Override the writers used when no destination file is set
    pub fn set_stream_handles(&self, stdout: StreamHandle, stderr: StreamHandle) {
        let mut inner = self.inner.lock();
        inner.stdout = stdout;
        inner.stderr = stderr;
    }

    /// Render one line and write it to the active destination
    ///
    /// The rendered bytes are written in a single `write_all` with no extra
    /// flush. Write failures are reported to the caller; content overflow
    /// is truncated silently during rendering and is not an error.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) -> LogResult<()> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let line = render_line(inner.options, severity, args);
        match inner.file.as_mut() {
            Some(file) => file.write_all(&line)?,
            None if severity.is_stderr() => inner.stderr.write_all(&line)?,
            None => inner.stdout.write_all(&line)?,
        }
        Ok(())
    }

    /// Log an info message
    pub fn info(&self, message: &str) -> LogResult<()> {
        self.log(Severity::Info, format_args!("{}", message))
    }

    /// Log a warning message
    pub fn warning(&self, message: &str) -> LogResult<()> {
        self.log(Severity::Warning, format_args!("{}", message))
    }

    /// Log an error message
    pub fn error(&self, message: &str) -> LogResult<()> {
        self.log(Severity::Error, format_args!("{}", message))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Logger")
            .field("file_backed", &inner.file.is_some())
            .field("options", &inner.options)
            .finish()
    }
}

/// Convenience macros for logging with format arguments
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::Severity::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::Severity::Warning, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::Severity::Error, format_args!($($arg)*))
    };
}

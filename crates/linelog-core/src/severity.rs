//! Message severity levels

/// Severity of a single log message
///
/// Determines the rendered marker and, when no destination file is set,
/// which output stream the line goes to (`Error` to stderr, the rest to
/// stdout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Fixed-width marker token, always 5 characters so messages align
    /// in a monospaced column.
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Error => " !!! ",
            Severity::Warning => "  !  ",
            Severity::Info => "     ",
        }
    }

    /// Text label prepended to the message when the severity-text stage
    /// is enabled. Info carries no label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "Error - ",
            Severity::Warning => "Warning - ",
            Severity::Info => "",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Whether this severity routes to the stderr-class stream when the
    /// logger is stream-backed.
    pub fn is_stderr(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_five_chars() {
        assert_eq!(Severity::Info.symbol().len(), 5);
        assert_eq!(Severity::Warning.symbol().len(), 5);
        assert_eq!(Severity::Error.symbol().len(), 5);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Severity::Error.label(), "Error - ");
        assert_eq!(Severity::Warning.label(), "Warning - ");
        assert_eq!(Severity::Info.label(), "");
    }

    #[test]
    fn test_stream_routing() {
        assert!(Severity::Error.is_stderr());
        assert!(!Severity::Warning.is_stderr());
        assert!(!Severity::Info.is_stderr());
    }
}

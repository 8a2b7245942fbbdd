//! Error category classification.
//!
//! Categories decide how the binary reports a failure: content errors are
//! bugs in the shipped sheets, usage errors point at the command line, and
//! system errors come from the terminal or filesystem.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Embedded content failed to parse or validate.
    Content,

    /// Invalid command-line arguments or environment.
    Usage,

    /// Terminal or filesystem errors.
    System,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Content => "content",
            ErrorCategory::Usage => "usage",
            ErrorCategory::System => "system",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Content => "This is a bug in the bundled sheets. Please report it",
            ErrorCategory::Usage => "Run with --help to see the supported options",
            ErrorCategory::System => "Check terminal support and file permissions",
        }
    }

    /// Process exit code used by the binary for this category.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::Content => 70,
            ErrorCategory::Usage => 64,
            ErrorCategory::System => 74,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

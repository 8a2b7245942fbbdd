//! Unified error type for sdprep.

use thiserror::Error;

use super::category::ErrorCategory;
use super::cli::CliError;
use super::content::ContentError;

#[derive(Debug, Error)]
pub enum SdError {
    #[error(transparent)]
    Content(#[from] ContentError),

    /// The shared bundled store failed to load. Holds the rendered
    /// [`ContentError`], which is owned by the lazily parsed store.
    #[error("bundled content is invalid: {0}")]
    BundledContent(String),

    #[error(transparent)]
    Cli(#[from] CliError),

    #[error("I/O error during {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl SdError {
    /// Wrap an I/O error with the operation that produced it.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        SdError::Io {
            operation: operation.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SdError::Content(_) | SdError::BundledContent(_) => ErrorCategory::Content,
            SdError::Cli(_) => ErrorCategory::Usage,
            SdError::Io { .. } => ErrorCategory::System,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SdError::Content(err) => err.error_code(),
            SdError::BundledContent(_) => "CONTENT_BUNDLED",
            SdError::Cli(err) => err.error_code(),
            SdError::Io { .. } => "IO_ERROR",
        }
    }

    /// Message for stderr, followed by the category's recovery hint.
    pub fn user_message(&self) -> String {
        format!("{}\n{}", self, self.category().recovery_hint())
    }
}

impl From<std::io::Error> for SdError {
    fn from(err: std::io::Error) -> Self {
        SdError::io("terminal", err)
    }
}

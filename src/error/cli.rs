//! Command-line usage errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("option '{0}' requires a value")]
    MissingValue(String),

    #[error("unknown option '{0}'")]
    UnknownFlag(String),

    #[error("a section needs a sheet (use --sheet, SDPREP_SHEET or --print)")]
    SectionWithoutSheet,
}

impl CliError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CliError::MissingValue(_) => "CLI_MISSING_VALUE",
            CliError::UnknownFlag(_) => "CLI_UNKNOWN_FLAG",
            CliError::SectionWithoutSheet => "CLI_SECTION_WITHOUT_SHEET",
        }
    }
}

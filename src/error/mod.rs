//! Error handling for sdprep.
//!
//! Selecting a sheet or section that does not exist is never an error; the
//! view simply renders nothing. The types here cover process-level failures
//! only:
//!
//! | Category | Source | Exit code |
//! |----------|--------|-----------|
//! | Content | Malformed or inconsistent embedded sheets | 70 |
//! | Usage | Bad command-line arguments | 64 |
//! | System | Terminal or log-file I/O | 74 |

mod category;
mod cli;
mod content;
mod result;
mod sd_error;

pub use category::ErrorCategory;
pub use cli::CliError;
pub use content::ContentError;
pub use result::SdResult;
pub use sd_error::SdError;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_error_unification() {
        let content: SdError = ContentError::EmptySheet("caching".to_string()).into();
        let cli: SdError = CliError::UnknownFlag("--bogus".to_string()).into();
        let io: SdError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();

        assert_eq!(content.category(), ErrorCategory::Content);
        assert_eq!(cli.category(), ErrorCategory::Usage);
        assert_eq!(io.category(), ErrorCategory::System);

        for err in [&content, &cli, &io] {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_transparent_display() {
        let err: SdError = CliError::MissingValue("--sheet".to_string()).into();
        assert_eq!(err.to_string(), "option '--sheet' requires a value");
    }

    #[test]
    fn test_user_message_includes_hint() {
        let err: SdError = CliError::UnknownFlag("--x".to_string()).into();
        assert!(err.user_message().contains("--help"));
    }

    #[test]
    fn test_io_operation_in_message() {
        let err = SdError::io(
            "open log file",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("open log file"));
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}

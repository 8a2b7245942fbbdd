//! CLI module for sdprep.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//! - Plain-text listing and printing of sheets
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use sdprep::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command, &mut std::io::stdout()) {
//!     // CLI command was executed, exit with result
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod print;
pub mod version;

pub use args::{parse_args, CliCommand, TuiOverrides, USAGE};
pub use print::{write_list, write_sheet, PRINT_WIDTH};
pub use version::{version_line, VERSION};

use std::io::Write;

use crate::content;
use crate::error::{SdError, SdResult};

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(command: &CliCommand, out: &mut impl Write) -> Option<SdResult<()>> {
    let result = match command {
        CliCommand::RunTui(_) => return None,
        CliCommand::Version => writeln!(out, "{}", version_line()).map_err(stdout_error),
        CliCommand::Help => writeln!(out, "{}", USAGE).map_err(stdout_error),
        CliCommand::List => with_store(|store| write_list(out, store).map_err(stdout_error)),
        CliCommand::Print { sheet, section } => with_store(|store| {
            write_sheet(out, store, sheet, section.as_deref(), PRINT_WIDTH).map_err(stdout_error)
        }),
    };
    Some(result)
}

fn with_store(f: impl FnOnce(&content::ContentStore) -> SdResult<()>) -> SdResult<()> {
    let store = content::builtin().map_err(|e| SdError::BundledContent(e.to_string()))?;
    f(store)
}

fn stdout_error(source: std::io::Error) -> SdError {
    SdError::io("write to stdout", source)
}

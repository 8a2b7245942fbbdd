//! Command-line argument parsing for sdprep.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

use crate::error::CliError;
use crate::startup::StartupConfig;

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: sdprep [OPTIONS]

Browse system-design cheat sheets in the terminal.

Options:
  --sheet <id>        Open this sheet on launch
  --section <id>      Open this section of the sheet on launch
  --log-file <path>   Write logs to this file (filter with RUST_LOG)
  --no-mouse          Leave mouse capture off
  --list              Print the available sheets and exit
  --print <sheet>     Print a sheet fully expanded and exit
                      (combine with --section <id> for one section)
  -V, --version       Print version and exit
  -h, --help          Print this help and exit

Environment:
  SDPREP_SHEET, SDPREP_SECTION, SDPREP_LOG_FILE, SDPREP_NO_MOUSE
  Command-line options take precedence.";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// List sheet ids and labels
    List,
    /// Dump a sheet (or one section) as plain text
    Print {
        sheet: String,
        section: Option<String>,
    },
    /// Run the TUI application (default)
    RunTui(TuiOverrides),
}

/// Launch options given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TuiOverrides {
    pub sheet: Option<String>,
    pub section: Option<String>,
    pub log_file: Option<PathBuf>,
    pub no_mouse: bool,
}

impl TuiOverrides {
    /// Layer these options over `config` (usually built from the environment).
    ///
    /// A sheet given here drops any section that came from `config`, since
    /// that section belonged to another sheet.
    pub fn apply(self, mut config: StartupConfig) -> StartupConfig {
        if let Some(sheet) = self.sheet {
            config.sheet = Some(sheet);
            config.section = None;
        }
        if let Some(section) = self.section {
            config.section = Some(section);
        }
        if let Some(path) = self.log_file {
            config.log_file = Some(path);
        }
        if self.no_mouse {
            config.mouse = false;
        }
        config
    }

    /// [`apply`](Self::apply), then require a sheet for any section.
    ///
    /// The sheet may come from either layer, so `--section dns` is fine
    /// when `SDPREP_SHEET` names the sheet.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::SectionWithoutSheet`] when the merged config has
    /// a section but no sheet.
    pub fn resolve(self, config: StartupConfig) -> Result<StartupConfig, CliError> {
        let config = self.apply(config);
        if config.section.is_some() && config.sheet.is_none() {
            return Err(CliError::SectionWithoutSheet);
        }
        Ok(config)
    }
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win as soon as they are seen. `--print` beats
/// `--list`, which beats running the TUI.
///
/// # Examples
///
/// ```
/// use sdprep::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["sdprep".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, CliError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = TuiOverrides::default();
    let mut print: Option<String> = None;
    let mut list = false;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .filter(|v| !v.starts_with("--"))
                .ok_or_else(|| CliError::MissingValue(flag.to_string()))
        };
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--list" => list = true,
            "--print" => print = Some(value("--print")?),
            "--sheet" => overrides.sheet = Some(value("--sheet")?),
            "--section" => overrides.section = Some(value("--section")?),
            "--log-file" => overrides.log_file = Some(PathBuf::from(value("--log-file")?)),
            "--no-mouse" => overrides.no_mouse = true,
            other => return Err(CliError::UnknownFlag(other.to_string())),
        }
    }

    if let Some(sheet) = print {
        return Ok(CliCommand::Print {
            sheet,
            section: overrides.section,
        });
    }
    if list {
        return Ok(CliCommand::List);
    }
    Ok(CliCommand::RunTui(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, CliError> {
        let args: Vec<String> = std::iter::once("sdprep")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::RunTui(TuiOverrides::default())));
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["--sheet", "caching", "-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse(&["--list"]), Ok(CliCommand::List));
    }

    #[test]
    fn test_parse_print_with_section() {
        assert_eq!(
            parse(&["--print", "caching", "--section", "overview"]),
            Ok(CliCommand::Print {
                sheet: "caching".to_string(),
                section: Some("overview".to_string()),
            })
        );
        assert_eq!(
            parse(&["--list", "--print", "messaging"]),
            Ok(CliCommand::Print {
                sheet: "messaging".to_string(),
                section: None,
            })
        );
    }

    #[test]
    fn test_parse_tui_overrides() {
        let cmd = parse(&[
            "--sheet",
            "gcp-databases",
            "--section",
            "picker",
            "--log-file",
            "/tmp/sdprep.log",
            "--no-mouse",
        ]);
        assert_eq!(
            cmd,
            Ok(CliCommand::RunTui(TuiOverrides {
                sheet: Some("gcp-databases".to_string()),
                section: Some("picker".to_string()),
                log_file: Some(PathBuf::from("/tmp/sdprep.log")),
                no_mouse: true,
            }))
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&["--sheet"]),
            Err(CliError::MissingValue("--sheet".to_string()))
        );
        assert_eq!(
            parse(&["--print", "--list"]),
            Err(CliError::MissingValue("--print".to_string()))
        );
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(
            parse(&["--update"]),
            Err(CliError::UnknownFlag("--update".to_string()))
        );
        assert_eq!(
            parse(&["caching"]),
            Err(CliError::UnknownFlag("caching".to_string()))
        );
    }

    #[test]
    fn test_section_needs_sheet() {
        let Ok(CliCommand::RunTui(overrides)) = parse(&["--section", "x"]) else {
            panic!("expected TUI command");
        };
        assert_eq!(
            overrides.resolve(StartupConfig::new()),
            Err(CliError::SectionWithoutSheet)
        );
        let env_only = StartupConfig::new().with_section("dns");
        assert_eq!(
            TuiOverrides::default().resolve(env_only),
            Err(CliError::SectionWithoutSheet)
        );
    }

    #[test]
    fn test_section_flag_with_sheet_from_environment() {
        let Ok(CliCommand::RunTui(overrides)) = parse(&["--section", "dns"]) else {
            panic!("expected TUI command");
        };
        let config = overrides
            .resolve(StartupConfig::new().with_sheet("networking"))
            .unwrap();
        assert_eq!(config.sheet.as_deref(), Some("networking"));
        assert_eq!(config.section.as_deref(), Some("dns"));
    }

    #[test]
    fn test_overrides_beat_environment() {
        let env = StartupConfig::new()
            .with_sheet("messaging")
            .with_section("patterns")
            .with_log_file("/var/log/a.log");
        let overrides = TuiOverrides {
            sheet: Some("caching".to_string()),
            no_mouse: true,
            ..Default::default()
        };
        let config = overrides.apply(env);
        assert_eq!(config.sheet.as_deref(), Some("caching"));
        assert_eq!(config.section, None);
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/a.log")));
        assert!(!config.mouse);
    }
}

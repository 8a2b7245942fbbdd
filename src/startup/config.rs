//! Startup configuration types.

use std::path::PathBuf;

/// Environment variable naming the initial sheet.
pub const ENV_SHEET: &str = "SDPREP_SHEET";
/// Environment variable naming the initial section.
pub const ENV_SECTION: &str = "SDPREP_SECTION";
/// Environment variable naming the log file.
pub const ENV_LOG_FILE: &str = "SDPREP_LOG_FILE";
/// Set to anything to leave mouse capture off.
pub const ENV_NO_MOUSE: &str = "SDPREP_NO_MOUSE";

/// Configuration for launching the TUI.
///
/// Use the builder methods to customize; CLI flags are applied on top of
/// [`StartupConfig::from_env`].
///
/// # Example
///
/// ```ignore
/// use sdprep::startup::StartupConfig;
///
/// let config = StartupConfig::from_env()
///     .with_sheet("caching")
///     .with_mouse(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Sheet shown on launch (default: first sheet in the store)
    pub sheet: Option<String>,
    /// Section shown on launch (default: the sheet's root section)
    pub section: Option<String>,
    /// Where to write logs; no subscriber is installed when unset
    pub log_file: Option<PathBuf>,
    /// Enable mouse capture (default: true)
    pub mouse: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            sheet: None,
            section: None,
            log_file: None,
            mouse: true,
        }
    }
}

impl StartupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    /// Build from `SDPREP_*` environment variables. Empty values are ignored.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let mut config = Self::default();
        if let Some(sheet) = var(ENV_SHEET) {
            config = config.with_sheet(sheet);
        }
        if let Some(section) = var(ENV_SECTION) {
            config = config.with_section(section);
        }
        if let Some(path) = var(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }
        if std::env::var_os(ENV_NO_MOUSE).is_some() {
            config = config.with_mouse(false);
        }
        config
    }
}

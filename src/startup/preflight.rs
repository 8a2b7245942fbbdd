//! Preflight before the TUI starts: load content, resolve the initial
//! selection.

use super::config::StartupConfig;
use crate::content::{self, ContentStore};
use crate::error::{SdError, SdResult};

/// Everything the TUI needs to start.
#[derive(Debug, Clone)]
pub struct StartupResult {
    pub store: &'static ContentStore,
    pub config: StartupConfig,
}

/// Load the bundled store and check the configured selection against it.
///
/// An unknown sheet or section is not an error: the TUI opens on an empty
/// view, and a warning goes to the log.
pub fn run_preflight_checks(config: StartupConfig) -> SdResult<StartupResult> {
    let store = content::builtin().map_err(|err| SdError::BundledContent(err.to_string()))?;
    tracing::info!(sheets = store.len(), "content loaded");
    check_selection(store, &config);
    Ok(StartupResult { store, config })
}

fn check_selection(store: &ContentStore, config: &StartupConfig) {
    let Some(sheet_id) = config.sheet.as_deref() else {
        return;
    };
    match store.sheet(sheet_id) {
        None => tracing::warn!(sheet = sheet_id, "configured sheet not found"),
        Some(sheet) => {
            if let Some(section_id) = config.section.as_deref() {
                if sheet.section(section_id).is_none() {
                    tracing::warn!(
                        sheet = sheet_id,
                        section = section_id,
                        "configured section not found"
                    );
                }
            }
        }
    }
}

//! Click action handler.
//!
//! Processes actions dispatched from the hit area registry, translating
//! them into App state mutations.

use super::hit_area::ClickAction;
use crate::app::App;

/// Apply a click on a registered hit area.
pub fn handle_click_action(app: &mut App<'_>, action: ClickAction) {
    app.mark_dirty();
    tracing::debug!(?action, "click");

    match action {
        // =====================================================================
        // Navigation
        // =====================================================================
        ClickAction::SelectSheet(id) => app.select_sheet(&id),
        ClickAction::SelectSection(id) => app.select_section(&id),

        // =====================================================================
        // Content
        // =====================================================================
        ClickAction::ToggleCard { list, item } => {
            app.toggle_card(list, item);
        }
        ClickAction::ToggleBlock { list } => {
            app.toggle_block(list);
        }
        ClickAction::ExpandAll { list } => {
            app.expand_all(list);
        }
        ClickAction::CollapseAll { list } => {
            app.collapse_all(list);
        }

        ClickAction::CloseOverlay => app.close_overlay(),
    }
}

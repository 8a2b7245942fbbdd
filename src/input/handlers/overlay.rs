//! Overlay command handlers (help, sheet menu).

use crate::app::App;
use crate::input::Command;

/// Returns `true` if the command was handled.
pub fn handle_overlay_command(app: &mut App<'_>, cmd: &Command) -> bool {
    match cmd {
        Command::ToggleHelp => app.toggle_help(),
        Command::OpenSheetMenu => app.open_sheet_menu(),
        Command::CloseOverlay => app.close_overlay(),
        Command::MenuUp => app.menu_up(),
        Command::MenuDown => app.menu_down(),
        Command::MenuConfirm => app.menu_confirm(),
        _ => return false,
    }
    true
}

//! Card and cursor command handlers.

use crate::app::App;
use crate::input::Command;

/// Returns `true` if the command was handled.
pub fn handle_content_command(app: &mut App<'_>, cmd: &Command) -> bool {
    match cmd {
        Command::CursorUp => {
            app.cursor_up();
        }
        Command::CursorDown => {
            app.cursor_down();
        }
        Command::Activate => {
            app.activate();
        }
        Command::ExpandAll => {
            app.expand_all_current();
        }
        Command::CollapseAll => {
            app.collapse_all_current();
        }
        _ => return false,
    }
    true
}

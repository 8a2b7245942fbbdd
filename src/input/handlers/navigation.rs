//! Navigation command handlers.
//!
//! Handles sheet/section switching and scrolling of the content pane.

use crate::app::App;
use crate::input::Command;

/// Returns `true` if the command was handled.
pub fn handle_navigation_command(app: &mut App<'_>, cmd: &Command) -> bool {
    match *cmd {
        Command::NextSection => app.next_section(),
        Command::PrevSection => app.prev_section(),
        Command::NextSheet => app.next_sheet(),
        Command::PrevSheet => app.prev_sheet(),
        Command::SelectSheetAt(index) => app.select_sheet_at(index),

        Command::ScrollUp(lines) => {
            app.scroll_up(lines);
        }
        Command::ScrollDown(lines) => {
            app.scroll_down(lines);
        }
        Command::ScrollPageUp => {
            app.page_up();
        }
        Command::ScrollPageDown => {
            app.page_down();
        }
        Command::ScrollTop => {
            app.scroll_to_top();
        }
        Command::ScrollBottom => {
            app.scroll_to_bottom();
        }

        Command::Quit => app.quit(),
        // Layout is recomputed on every draw
        Command::Resize { .. } => {}

        _ => return false,
    }
    true
}

//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects: the
//! registry maps keys to commands, the handlers apply them to the app.

/// All commands that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,

    // =========================================================================
    // Sheet / Section Navigation
    // =========================================================================
    /// Next section tab (Tab, Right)
    NextSection,
    /// Previous section tab (Shift+Tab, Left)
    PrevSection,
    /// Next sheet (])
    NextSheet,
    /// Previous sheet ([)
    PrevSheet,
    /// Select a sheet by zero-based position (1-9)
    SelectSheetAt(usize),

    // =========================================================================
    // Cursor / Cards
    // =========================================================================
    /// Move the card cursor up (Up, k)
    CursorUp,
    /// Move the card cursor down (Down, j)
    CursorDown,
    /// Toggle whatever is under the cursor (Enter, Space)
    Activate,
    /// Expand every card in the list under the cursor (e)
    ExpandAll,
    /// Collapse every card in the list under the cursor (c)
    CollapseAll,

    // =========================================================================
    // Scroll Commands
    // =========================================================================
    /// Scroll up by lines (mouse wheel)
    ScrollUp(u16),
    /// Scroll down by lines (mouse wheel)
    ScrollDown(u16),
    ScrollPageUp,
    ScrollPageDown,
    /// Jump to top (g, Home)
    ScrollTop,
    /// Jump to bottom (G, End)
    ScrollBottom,

    // =========================================================================
    // Overlays
    // =========================================================================
    /// Show or hide the key help overlay (?)
    ToggleHelp,
    /// Open the sheet menu (m)
    OpenSheetMenu,
    /// Close the active overlay (Esc)
    CloseOverlay,
    MenuUp,
    MenuDown,
    /// Select the highlighted sheet in the menu (Enter)
    MenuConfirm,

    // =========================================================================
    // Terminal Events
    // =========================================================================
    Resize { width: u16, height: u16 },
    Noop,
}

impl Command {
    /// Whether running this command requires a redraw.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "Quit",
            Command::NextSection => "Next section",
            Command::PrevSection => "Previous section",
            Command::NextSheet => "Next sheet",
            Command::PrevSheet => "Previous sheet",
            Command::SelectSheetAt(_) => "Jump to sheet",
            Command::CursorUp => "Previous card",
            Command::CursorDown => "Next card",
            Command::Activate => "Expand / collapse",
            Command::ExpandAll => "Expand all cards in list",
            Command::CollapseAll => "Collapse all cards in list",
            Command::ScrollUp(_) => "Scroll up",
            Command::ScrollDown(_) => "Scroll down",
            Command::ScrollPageUp => "Page up",
            Command::ScrollPageDown => "Page down",
            Command::ScrollTop => "Jump to top",
            Command::ScrollBottom => "Jump to bottom",
            Command::ToggleHelp => "Toggle help",
            Command::OpenSheetMenu => "Sheet menu",
            Command::CloseOverlay => "Close overlay",
            Command::MenuUp => "Menu up",
            Command::MenuDown => "Menu down",
            Command::MenuConfirm => "Open selected sheet",
            Command::Resize { .. } => "Terminal resize",
            Command::Noop => "No operation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_marks_dirty() {
        assert!(Command::Quit.marks_dirty());
        assert!(Command::ScrollDown(3).marks_dirty());
        assert!(!Command::Noop.marks_dirty());
    }

    #[test]
    fn test_command_is_quit() {
        assert!(Command::Quit.is_quit());
        assert!(!Command::CloseOverlay.is_quit());
    }

    #[test]
    fn test_command_description() {
        assert_eq!(Command::Activate.description(), "Expand / collapse");
        assert_eq!(Command::SelectSheetAt(2).description(), "Jump to sheet");
    }
}

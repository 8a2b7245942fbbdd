//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding tables: one for normal browsing, one per overlay.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active when no overlay is open
    pub global: HashMap<KeyCombo, Command>,
    /// Per-overlay bindings; an open overlay swallows unbound keys
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_modal_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        let b = &mut self.global;

        b.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);

        // Sections
        b.insert(KeyCombo::plain(KeyCode::Tab), Command::NextSection);
        b.insert(KeyCombo::plain(KeyCode::Right), Command::NextSection);
        b.insert(KeyCombo::plain(KeyCode::Char('l')), Command::NextSection);
        b.insert(KeyCombo::plain(KeyCode::BackTab), Command::PrevSection);
        b.insert(KeyCombo::shift(KeyCode::BackTab), Command::PrevSection);
        b.insert(KeyCombo::plain(KeyCode::Left), Command::PrevSection);
        b.insert(KeyCombo::plain(KeyCode::Char('h')), Command::PrevSection);

        // Sheets
        b.insert(KeyCombo::plain(KeyCode::Char(']')), Command::NextSheet);
        b.insert(KeyCombo::plain(KeyCode::Char('[')), Command::PrevSheet);
        b.insert(KeyCombo::plain(KeyCode::Char('m')), Command::OpenSheetMenu);

        // Cards
        b.insert(KeyCombo::plain(KeyCode::Up), Command::CursorUp);
        b.insert(KeyCombo::plain(KeyCode::Char('k')), Command::CursorUp);
        b.insert(KeyCombo::plain(KeyCode::Down), Command::CursorDown);
        b.insert(KeyCombo::plain(KeyCode::Char('j')), Command::CursorDown);
        b.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        b.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::Activate);
        b.insert(KeyCombo::plain(KeyCode::Char('e')), Command::ExpandAll);
        b.insert(KeyCombo::plain(KeyCode::Char('c')), Command::CollapseAll);

        // Scroll
        b.insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollPageUp);
        b.insert(KeyCombo::plain(KeyCode::PageDown), Command::ScrollPageDown);
        b.insert(KeyCombo::plain(KeyCode::Home), Command::ScrollTop);
        b.insert(KeyCombo::plain(KeyCode::Char('g')), Command::ScrollTop);
        b.insert(KeyCombo::plain(KeyCode::End), Command::ScrollBottom);
        b.insert(KeyCombo::plain(KeyCode::Char('G')), Command::ScrollBottom);
        b.insert(KeyCombo::shift(KeyCode::Char('G')), Command::ScrollBottom);

        b.insert(KeyCombo::plain(KeyCode::Char('?')), Command::ToggleHelp);
        b.insert(KeyCombo::shift(KeyCode::Char('?')), Command::ToggleHelp);
    }

    fn setup_modal_bindings(&mut self) {
        let mut help = HashMap::new();
        help.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseOverlay);
        help.insert(KeyCombo::plain(KeyCode::Char('?')), Command::CloseOverlay);
        help.insert(KeyCombo::shift(KeyCode::Char('?')), Command::CloseOverlay);
        help.insert(KeyCombo::plain(KeyCode::Char('q')), Command::CloseOverlay);
        self.modal.insert(ModalType::Help, help);

        let mut menu = HashMap::new();
        menu.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseOverlay);
        menu.insert(KeyCombo::plain(KeyCode::Char('m')), Command::CloseOverlay);
        menu.insert(KeyCombo::plain(KeyCode::Char('q')), Command::CloseOverlay);
        menu.insert(KeyCombo::plain(KeyCode::Up), Command::MenuUp);
        menu.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MenuUp);
        menu.insert(KeyCombo::plain(KeyCode::Down), Command::MenuDown);
        menu.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MenuDown);
        menu.insert(KeyCombo::plain(KeyCode::Enter), Command::MenuConfirm);
        menu.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::MenuConfirm);
        self.modal.insert(ModalType::SheetMenu, menu);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<Command> {
        self.global.get(combo).copied()
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo)).copied()
    }

    /// (key, description) pairs for the help overlay, in display order.
    pub fn help_entries() -> &'static [(&'static str, &'static str)] {
        &[
            ("↑ ↓  j k", "Move between cards"),
            ("Enter  Space", "Expand / collapse card or block"),
            ("e  c", "Expand / collapse all (lists with buttons)"),
            ("← →  Tab", "Previous / next section"),
            ("[  ]", "Previous / next sheet"),
            ("1-9", "Jump to sheet"),
            ("m", "Sheet menu"),
            ("PgUp PgDn  g G", "Scroll"),
            ("?", "Toggle this help"),
            ("q  Ctrl+C", "Quit"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_combo_ctrl() {
        let combo = KeyCombo::ctrl(KeyCode::Char('c'));
        assert_eq!(combo.code, KeyCode::Char('c'));
        assert_eq!(combo.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_default_global_bindings() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_global(&KeyCombo::plain(KeyCode::Enter)),
            Some(Command::Activate)
        );
        assert_eq!(
            config.get_global(&KeyCombo::plain(KeyCode::Tab)),
            Some(Command::NextSection)
        );
        assert_eq!(
            config.get_global(&KeyCombo::plain(KeyCode::Char(']'))),
            Some(Command::NextSheet)
        );
        assert_eq!(config.get_global(&KeyCombo::plain(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_modal_bindings_are_separate() {
        let config = KeybindingConfig::new();
        let esc = KeyCombo::plain(KeyCode::Esc);
        assert_eq!(
            config.get_modal(ModalType::Help, &esc),
            Some(Command::CloseOverlay)
        );
        assert_eq!(
            config.get_modal(ModalType::SheetMenu, &KeyCombo::plain(KeyCode::Enter)),
            Some(Command::MenuConfirm)
        );
        assert_eq!(config.get_global(&esc), None);
    }
}

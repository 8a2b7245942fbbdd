//! Maps key events to commands based on the current context.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Dispatches key events to commands.
///
/// Priority:
/// 1. Ctrl+C (always quits)
/// 2. Overlay bindings (an open overlay swallows everything else)
/// 3. Global bindings
/// 4. Digit shortcuts for sheets
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::new(key.code, key.modifiers);

        if context.is_modal_active() {
            return self.config.get_modal(context.modal, &combo);
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd);
        }

        match key.code {
            KeyCode::Char(c @ '1'..='9') if key.modifiers.is_empty() => {
                let index = (c as usize) - ('1' as usize);
                (index < context.sheet_count).then_some(Command::SelectSheetAt(index))
            }
            _ => None,
        }
    }
}

//! Input handling: terminal events to app mutations.
//!
//! All keyboard input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Dispatched to the handlers in the [`handlers`] module
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```
//!
//! Mouse clicks bypass commands: they hit-test the registry built by the
//! last frame and go through [`crate::ui::handle_click_action`].
//!
//! # Modules
//!
//! - [`command`] - The [`Command`] enum
//! - [`context`] - [`InputContext`] for the active overlay
//! - [`registry`] - [`CommandRegistry`] for mapping keys to commands
//! - [`keybindings`] - Default key binding configuration
//! - [`handlers`] - Command execution handlers

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::view_state::WHEEL_STEP;

impl<'a> App<'a> {
    pub fn build_input_context(&self) -> InputContext {
        InputContext::from_app(self)
    }

    /// Apply a command. Returns true if a handler took it.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::debug!(?cmd, "execute_command");

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        if self.overlay.is_open() && handlers::handle_overlay_command(self, &cmd) {
            return true;
        }

        handlers::handle_navigation_command(self, &cmd)
            || handlers::handle_content_command(self, &cmd)
            || handlers::handle_overlay_command(self, &cmd)
    }

    /// Resolve a key press through the registry and apply it.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let context = self.build_input_context();
        match self.commands.dispatch(key, &context) {
            Some(cmd) => self.execute_command(cmd),
            None => false,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.mouse_enabled {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    crate::ui::handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_registry.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollDown if !self.overlay.is_open() => {
                self.execute_command(Command::ScrollDown(WHEEL_STEP));
            }
            MouseEventKind::ScrollUp if !self.overlay.is_open() => {
                self.execute_command(Command::ScrollUp(WHEEL_STEP));
            }
            _ => {}
        }
    }

    /// Entry point for every terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                self.handle_key(key);
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                self.execute_command(Command::Resize { width, height });
            }
            _ => {}
        }
    }
}

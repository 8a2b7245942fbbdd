//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Overlay`] - Which overlay, if any, is drawn over the sheet
//!
//! Behaviour lives in submodules that each add an `impl App` block:
//! - `navigation` - sheet and section selection
//! - `actions` - cursor, card toggles, scrolling and overlays

mod actions;
mod navigation;
mod types;

pub use types::Overlay;

use crate::content::ContentStore;
use crate::input::CommandRegistry;
use crate::models::{Section, Sheet};
use crate::startup::StartupConfig;
use crate::state::{SectionView, Selection, Target};
use crate::ui::interaction::HitAreaRegistry;
use crate::view_state::ScrollState;

/// Main application state.
///
/// Borrows the content store for its whole life; everything else is
/// per-session UI state.
pub struct App<'a> {
    pub store: &'a ContentStore,
    /// Active sheet and section ids, possibly unresolved
    pub selection: Selection,
    /// State of the mounted section; `None` when the selection resolves to nothing
    pub view: Option<SectionView>,
    /// Focused card or block header
    pub cursor: Option<Target>,
    pub scroll: ScrollState,
    /// Scroll the cursor into view on the next render
    pub follow_cursor: bool,
    pub overlay: Overlay,
    /// Clickable regions from the last frame
    pub hit_registry: HitAreaRegistry,
    pub commands: CommandRegistry,
    pub mouse_enabled: bool,
    /// Set when state changed since the last draw
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// App showing the store's first sheet.
    pub fn new(store: &'a ContentStore) -> Self {
        let mut app = Self {
            store,
            selection: Selection::default(),
            view: None,
            cursor: None,
            scroll: ScrollState::new(),
            follow_cursor: false,
            overlay: Overlay::None,
            hit_registry: HitAreaRegistry::new(),
            commands: CommandRegistry::new(),
            mouse_enabled: true,
            needs_redraw: true,
            should_quit: false,
        };
        if let Some(first) = store.sheet_at(0) {
            app.select_sheet(&first.id);
        }
        app
    }

    /// App with the initial selection and mouse setting from `config`.
    pub fn from_config(store: &'a ContentStore, config: &StartupConfig) -> Self {
        let mut app = Self::new(store);
        app.mouse_enabled = config.mouse;
        if let Some(sheet) = config.sheet.as_deref() {
            app.select_sheet(sheet);
        }
        if let Some(section) = config.section.as_deref() {
            app.select_section(section);
        }
        app
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn active_sheet(&self) -> Option<&'a Sheet> {
        let store = self.store;
        self.selection.sheet_id.as_deref().and_then(|id| store.sheet(id))
    }

    /// The mounted section, resolved through the active sheet.
    pub fn active_section(&self) -> Option<&'a Section> {
        let sheet = self.active_sheet()?;
        self.selection
            .section_id
            .as_deref()
            .and_then(|id| sheet.section(id))
    }
}

//! Input context for deciding which bindings apply.

use crate::app::{App, Overlay};

/// The overlay currently capturing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    Help,
    SheetMenu,
}

impl From<&Overlay> for ModalType {
    fn from(overlay: &Overlay) -> Self {
        match overlay {
            Overlay::None => ModalType::None,
            Overlay::Help => ModalType::Help,
            Overlay::SheetMenu { .. } => ModalType::SheetMenu,
        }
    }
}

/// Snapshot of app state relevant to key dispatch.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub modal: ModalType,
    /// Number of sheets, for bounds-checking digit shortcuts.
    pub sheet_count: usize,
}

impl InputContext {
    pub fn from_app(app: &App<'_>) -> Self {
        Self {
            modal: ModalType::from(&app.overlay),
            sheet_count: app.store.len(),
        }
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }
}

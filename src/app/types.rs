//! Type definitions for the application state.

/// Overlay drawn on top of the sheet view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Key reference
    Help,
    /// Sheet picker; `selected` is a position in the store
    SheetMenu { selected: usize },
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::None)
    }
}

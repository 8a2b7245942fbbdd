//! Clickable regions registered during render.
//!
//! Render code registers a rect per clickable element; the event loop
//! hit-tests mouse positions against the registry built by the last frame.

use ratatui::layout::Rect;

/// Action triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    // Navigation
    /// Select a sheet from the navigation bar or sheet menu
    SelectSheet(String),
    /// Select a section tab within the active sheet
    SelectSection(String),

    // Content
    /// Toggle one card's secondary content
    ToggleCard { list: usize, item: usize },
    /// Show/hide a collapsible subsection
    ToggleBlock { list: usize },
    /// Open every card in a list
    ExpandAll { list: usize },
    /// Close every card in a list
    CollapseAll { list: usize },

    // Overlays
    /// Dismiss the help or sheet menu overlay
    CloseOverlay,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry of hit areas for the current frame.
///
/// Areas are cleared at the start of each render. The last pointer
/// position survives the clear so render code can style hovered elements.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Registration order is z-order: later areas sit on top.
    areas: Vec<HitArea>,
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas. Call at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea::new(rect, action));
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// Record the pointer position.
    ///
    /// Returns true when the topmost area under the pointer changed
    /// (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.pointer.and_then(|(px, py)| self.topmost_index(px, py));
        self.pointer = Some((x, y));
        before != self.topmost_index(x, y)
    }

    /// Whether the pointer is over `rect`.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        match self.pointer {
            Some((x, y)) => HitArea::new(rect, ClickAction::CloseOverlay).contains(x, y),
            None => false,
        }
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    fn topmost_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas.iter().rposition(|area| area.contains(x, y))
    }
}

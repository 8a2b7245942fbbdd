//! Scroll position of the content pane.

/// Lines to move per mouse wheel notch.
pub const WHEEL_STEP: u16 = 3;

/// Scroll offset of the content pane, measured in lines from the top.
///
/// `max_offset` and `viewport` are refreshed during render; everything else
/// clamps against the last rendered values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the geometry of the last render and clamp the offset to it.
    pub fn update_bounds(&mut self, content_lines: usize, viewport: u16) {
        self.viewport = viewport;
        let content = u16::try_from(content_lines).unwrap_or(u16::MAX);
        self.max_offset = content.saturating_sub(viewport);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) -> bool {
        let next = self.offset.saturating_sub(lines);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    pub fn scroll_down(&mut self, lines: u16) -> bool {
        let next = self.offset.saturating_add(lines).min(self.max_offset);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll_up(self.viewport.saturating_sub(1).max(1))
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll_down(self.viewport.saturating_sub(1).max(1))
    }

    pub fn to_top(&mut self) -> bool {
        self.scroll_up(self.offset)
    }

    pub fn to_bottom(&mut self) -> bool {
        self.scroll_down(self.max_offset)
    }

    /// Move the viewport the least amount needed so the line range
    /// `first..=last` is visible, preferring `first` when it does not fit.
    pub fn ensure_visible(&mut self, first: usize, last: usize) {
        let first = u16::try_from(first).unwrap_or(u16::MAX);
        let last = u16::try_from(last).unwrap_or(u16::MAX).max(first);
        if self.viewport == 0 {
            return;
        }
        if first < self.offset {
            self.offset = first;
        } else if last >= self.offset.saturating_add(self.viewport) {
            let wanted = last.saturating_sub(self.viewport.saturating_sub(1));
            self.offset = wanted.min(first);
        }
        self.offset = self.offset.min(self.max_offset);
    }

    /// Reset to the top (used when the mounted section changes).
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

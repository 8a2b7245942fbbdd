//! Screen layout.
//!
//! Top to bottom: navigation bar, sheet heading, section tabs (tabbed
//! sheets only), scrollable content, key hints.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminal width breakpoints
pub mod breakpoints {
    /// Below this the footer shows the short hint set
    pub const NARROW_WIDTH: u16 = 80;
}

/// Rows of the sheet heading (title + subtitle)
const HEADING_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub nav: Rect,
    pub heading: Rect,
    /// Zero height when the sheet has a single section
    pub tabs: Rect,
    pub content: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, nav_rows: u16, tab_rows: u16) -> Self {
        let tabs_height = if tab_rows > 0 { tab_rows + 1 } else { 0 };
        let [nav, _, heading, tabs, content, footer] = Layout::vertical([
            Constraint::Length(nav_rows),
            Constraint::Length(1),
            Constraint::Length(HEADING_ROWS),
            Constraint::Length(tabs_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            nav,
            heading: inset(heading),
            tabs: Rect {
                height: tab_rows.min(tabs.height),
                ..tabs
            },
            content: inset(content),
            footer,
        }
    }
}

/// One column of margin on each side.
fn inset(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        width: rect.width.saturating_sub(2),
        ..rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_regions() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 40), 1, 2);
        assert_eq!(layout.nav, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.heading, Rect::new(1, 2, 98, 2));
        assert_eq!(layout.tabs, Rect::new(0, 4, 100, 2));
        assert_eq!(layout.content, Rect::new(1, 7, 98, 32));
        assert_eq!(layout.footer, Rect::new(0, 39, 100, 1));
    }

    #[test]
    fn test_untabbed_sheet_has_no_tab_row() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24), 2, 0);
        assert_eq!(layout.tabs.height, 0);
        assert_eq!(layout.content.y, 5);
        assert_eq!(layout.content.height, 18);
    }
}

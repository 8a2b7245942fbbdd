//! Sheet heading, scrollable content pane and footer.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::document::{build_document, truncate_to_width};
use super::layout::breakpoints;
use super::theme::{dim_style, heading_style, COLOR_BORDER, COLOR_MUTED, COLOR_SURFACE};
use crate::app::App;

const HINTS_WIDE: &str =
    " Tab section  [ ] sheet  ↑↓ move  Enter toggle  e/c all  m sheets  ? help  q quit";
const HINTS_NARROW: &str = " ? help  q quit";

pub fn render_heading(frame: &mut Frame, area: Rect, app: &App<'_>) {
    let Some(sheet) = app.active_sheet() else {
        return;
    };
    let width = usize::from(area.width);
    let mut lines = vec![Line::from(Span::styled(
        truncate_to_width(&sheet.title, width),
        heading_style(),
    ))];
    if !sheet.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&sheet.subtitle, width),
            dim_style(),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Lay out the mounted section, clamp the scroll position and register the
/// clickable regions that ended up on screen.
///
/// Renders nothing when the selection does not resolve.
pub fn render_content(frame: &mut Frame, area: Rect, app: &mut App<'_>) {
    let (Some(sheet), Some(section), Some(view)) =
        (app.active_sheet(), app.active_section(), app.view.as_ref())
    else {
        app.scroll.update_bounds(0, area.height);
        return;
    };

    // Rightmost column belongs to the scrollbar
    let text_area = Rect {
        width: area.width.saturating_sub(1),
        ..area
    };
    let doc = build_document(sheet, section, view, app.cursor, text_area.width);

    app.scroll.update_bounds(doc.len(), area.height);
    if app.follow_cursor {
        if let Some((first, last)) = app.cursor.and_then(|t| doc.target_span(t)) {
            app.scroll.ensure_visible(first, last);
        }
    }

    let offset = usize::from(app.scroll.offset);
    let height = usize::from(area.height);
    let visible: Vec<Line> = doc
        .lines
        .iter()
        .skip(offset)
        .take(height)
        .cloned()
        .collect();
    frame.render_widget(Paragraph::new(visible), text_area);

    let window_end = offset + height;
    for anchor in &doc.anchors {
        if anchor.last < offset || anchor.first >= window_end {
            continue;
        }
        let first = anchor.first.max(offset);
        let last = anchor.last.min(window_end.saturating_sub(1));
        let y = area.y + (first - offset) as u16;
        let rows = (last - first + 1) as u16;
        let (x, width) = match anchor.columns {
            Some((col, w)) => (text_area.x + col, w),
            None => (text_area.x, text_area.width),
        };
        let rect = Rect::new(x, y, width, rows).intersection(text_area);
        app.hit_registry.register(rect, anchor.action.clone());
    }

    if area.height > 0 && doc.len() > height {
        let mut state = ScrollbarState::new(usize::from(app.scroll.max_offset))
            .position(offset)
            .viewport_content_length(height);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_style(Style::default().fg(COLOR_BORDER))
            .thumb_style(Style::default().fg(COLOR_MUTED));
        frame.render_stateful_widget(scrollbar, area, &mut state);
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App<'_>) {
    frame
        .buffer_mut()
        .set_style(area, Style::default().bg(COLOR_SURFACE));

    let hints = if area.width < breakpoints::NARROW_WIDTH {
        HINTS_NARROW
    } else {
        HINTS_WIDE
    };
    let position = scroll_position(app);
    let gap = usize::from(area.width)
        .saturating_sub(hints.width() + position.width() + 1);

    let line = Line::from(vec![
        Span::styled(hints, dim_style()),
        Span::raw(" ".repeat(gap)),
        Span::styled(position, dim_style()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// "Top", "Bot", "All" or a percentage, like a pager.
fn scroll_position(app: &App<'_>) -> String {
    let scroll = &app.scroll;
    if scroll.max_offset == 0 {
        "All".to_string()
    } else if scroll.offset == 0 {
        "Top".to_string()
    } else if scroll.offset >= scroll.max_offset {
        "Bot".to_string()
    } else {
        format!("{}%", u32::from(scroll.offset) * 100 / u32::from(scroll.max_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_scroll_position_labels() {
        let mut app = App::new(content::builtin().unwrap());
        app.scroll.update_bounds(10, 20);
        assert_eq!(scroll_position(&app), "All");

        app.scroll.update_bounds(100, 20);
        assert_eq!(scroll_position(&app), "Top");
        app.scroll.scroll_down(40);
        assert_eq!(scroll_position(&app), "50%");
        app.scroll.to_bottom();
        assert_eq!(scroll_position(&app), "Bot");
    }
}

//! Help and sheet-menu overlays.
//!
//! Both are centered dialogs drawn over the sheet view. Clicking outside a
//! dialog closes it.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::interaction::ClickAction;
use super::theme::{dim_style, COLOR_ACCENT, COLOR_BG, COLOR_BORDER, COLOR_MUTED, COLOR_TEXT};
use crate::app::{App, Overlay};
use crate::input::KeybindingConfig;

pub fn render_overlay(frame: &mut Frame, app: &mut App<'_>) {
    match app.overlay {
        Overlay::None => {}
        Overlay::Help => render_help(frame, app),
        Overlay::SheetMenu { selected } => render_sheet_menu(frame, app, selected),
    }
}

/// Centered rect of at most `width` x `height`, leaving a 2-cell margin.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn dialog(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    }
}

/// Backdrop click target; registered first so the dialog's own areas win.
fn register_backdrop(app: &mut App<'_>, full: Rect) {
    app.hit_registry.register(full, ClickAction::CloseOverlay);
}

fn render_help(frame: &mut Frame, app: &mut App<'_>) {
    let full = frame.area();
    register_backdrop(app, full);

    let entries = KeybindingConfig::help_entries();
    let area = centered(full, 56, entries.len() as u16 + 4);
    let inner = dialog(frame, area, "Keys");

    let key_width = entries.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let mut lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", key, width = key_width),
                    Style::default().fg(COLOR_ACCENT),
                ),
                Span::styled(*desc, Style::default().fg(COLOR_TEXT)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Esc to close", dim_style())));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_sheet_menu(frame: &mut Frame, app: &mut App<'_>, selected: usize) {
    let full = frame.area();
    register_backdrop(app, full);

    let store = app.store;
    let area = centered(full, 48, store.len() as u16 + 4);
    let inner = dialog(frame, area, "Sheets");

    let mut lines = Vec::with_capacity(store.len() + 2);
    for (index, sheet) in store.sheets().iter().enumerate() {
        let is_selected = index == selected;
        let marker = if is_selected { "▶ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_MUTED)
        };
        let row = inner.y + index as u16;
        if row < inner.y + inner.height {
            app.hit_registry.register(
                Rect::new(inner.x, row, inner.width, 1),
                ClickAction::SelectSheet(sheet.id.clone()),
            );
        }
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("{}  ", index + 1), dim_style()),
            Span::styled(sheet.title.clone(), style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("↑↓ move  Enter open  Esc close", dim_style())));
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_respects_margins() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered(area, 56, 14);
        assert_eq!(rect, Rect::new(22, 13, 56, 14));

        let tiny = centered(Rect::new(0, 0, 20, 6), 56, 14);
        assert_eq!(tiny.width, 16);
        assert_eq!(tiny.height, 4);
    }
}

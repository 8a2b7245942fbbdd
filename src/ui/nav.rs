//! Sheet navigation bar and section tabs.
//!
//! Tabs flow left to right and wrap onto extra rows when the terminal is
//! too narrow, so every sheet stays clickable.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{active_tab_style, brand_style, inactive_tab_style, COLOR_SURFACE, COLOR_TEXT};
use crate::app::App;

/// Brand text at the start of the navigation bar
pub const BRAND: &str = "SD Prep";

/// Columns between tabs
const TAB_GAP: u16 = 1;

/// Position of one tab within a tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSlot {
    pub index: usize,
    pub row: u16,
    pub x: u16,
    pub width: u16,
}

/// Flow `labels` (padded by one column each side) into rows of `width`
/// columns, starting every row at `indent`.
pub fn layout_tabs(labels: &[String], width: u16, indent: u16) -> Vec<TabSlot> {
    let mut slots = Vec::with_capacity(labels.len());
    let mut row = 0;
    let mut x = indent;
    let available = width.saturating_sub(indent).max(1);

    for (index, label) in labels.iter().enumerate() {
        let tab_width = (label.width() as u16 + 2).min(available);
        if x > indent && x + tab_width > width {
            row += 1;
            x = indent;
        }
        slots.push(TabSlot {
            index,
            row,
            x,
            width: tab_width,
        });
        x += tab_width + TAB_GAP;
    }
    slots
}

/// Rows needed by a tab strip (at least one).
pub fn tab_rows(slots: &[TabSlot]) -> u16 {
    slots.last().map(|s| s.row + 1).unwrap_or(1)
}

pub fn sheet_labels(app: &App<'_>) -> Vec<String> {
    app.store.sheets().iter().map(|s| s.label.clone()).collect()
}

pub fn section_labels(app: &App<'_>) -> Vec<String> {
    app.active_sheet()
        .map(|sheet| sheet.sections.iter().map(|s| s.tab_label()).collect())
        .unwrap_or_default()
}

/// Indent of the sheet tabs, after the brand.
pub fn sheet_tab_indent() -> u16 {
    BRAND.width() as u16 + 3
}

fn render_strip(
    buf: &mut Buffer,
    area: Rect,
    labels: &[String],
    slots: &[TabSlot],
    is_active: impl Fn(usize) -> bool,
    hover: &HitAreaRegistry,
) {
    for slot in slots {
        if slot.row >= area.height {
            break;
        }
        let rect = Rect::new(area.x + slot.x, area.y + slot.row, slot.width, 1).intersection(area);
        let style = if is_active(slot.index) {
            active_tab_style()
        } else if hover.is_hovered(rect) {
            inactive_tab_style().fg(COLOR_TEXT)
        } else {
            inactive_tab_style()
        };
        let label = labels.get(slot.index).map(String::as_str).unwrap_or("");
        Paragraph::new(Line::from(Span::styled(format!(" {} ", label), style))).render(rect, buf);
    }
}

pub fn render_sheet_bar(buf: &mut Buffer, area: Rect, app: &mut App<'_>) {
    buf.set_style(area, Style::default().bg(COLOR_SURFACE));
    let brand = Rect::new(area.x + 1, area.y, BRAND.width() as u16, 1).intersection(area);
    Paragraph::new(Span::styled(BRAND, brand_style())).render(brand, buf);

    let labels = sheet_labels(app);
    let slots = layout_tabs(&labels, area.width, sheet_tab_indent());
    let active = app.active_sheet_index();
    render_strip(buf, area, &labels, &slots, |i| Some(i) == active, &app.hit_registry);

    let store = app.store;
    for slot in &slots {
        if let Some(sheet) = store.sheet_at(slot.index) {
            let rect = Rect::new(area.x + slot.x, area.y + slot.row, slot.width, 1).intersection(area);
            app.hit_registry
                .register(rect, ClickAction::SelectSheet(sheet.id.clone()));
        }
    }
}

pub fn render_section_tabs(buf: &mut Buffer, area: Rect, app: &mut App<'_>) {
    let Some(sheet) = app.active_sheet() else {
        return;
    };
    let labels = section_labels(app);
    let slots = layout_tabs(&labels, area.width, 1);
    let active = app
        .selection
        .section_id
        .as_deref()
        .and_then(|id| sheet.section_index(id));
    render_strip(buf, area, &labels, &slots, |i| Some(i) == active, &app.hit_registry);

    for slot in &slots {
        if let Some(section) = sheet.sections.get(slot.index) {
            let rect = Rect::new(area.x + slot.x, area.y + slot.row, slot.width, 1).intersection(area);
            app.hit_registry
                .register(rect, ClickAction::SelectSection(section.id.clone()));
        }
    }
}

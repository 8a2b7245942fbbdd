//! UI rendering for the sheet viewer.
//!
//! Every frame is rebuilt from [`App`] state. Rendering also repopulates the
//! hit area registry, so mouse hit-testing always matches what is on screen.

mod card;
mod document;
pub mod interaction;
mod layout;
mod nav;
mod overlay;
mod sheet_view;
mod table;
pub mod theme;
mod wrap;

use ratatui::{style::Style, Frame};

use crate::app::App;

pub use document::{build_document, Document};
pub use interaction::handle_click_action;
pub use layout::ScreenLayout;
pub use wrap::line_text;

use nav::{layout_tabs, render_section_tabs, render_sheet_bar, section_labels, sheet_labels, sheet_tab_indent, tab_rows};
use overlay::render_overlay;
use sheet_view::{render_content, render_footer, render_heading};
use theme::{COLOR_BG, COLOR_TEXT};

/// Main render function - draws the whole screen
pub fn render(frame: &mut Frame, app: &mut App<'_>) {
    app.hit_registry.clear();

    let area = frame.area();
    frame
        .buffer_mut()
        .set_style(area, Style::default().bg(COLOR_BG).fg(COLOR_TEXT));

    let nav_rows = tab_rows(&layout_tabs(&sheet_labels(app), area.width, sheet_tab_indent()));
    let section_rows = match app.active_sheet() {
        Some(sheet) if sheet.is_tabbed() => tab_rows(&layout_tabs(&section_labels(app), area.width, 1)),
        _ => 0,
    };
    let layout = ScreenLayout::compute(area, nav_rows, section_rows);

    render_sheet_bar(frame.buffer_mut(), layout.nav, app);
    render_heading(frame, layout.heading, app);
    if section_rows > 0 {
        render_section_tabs(frame.buffer_mut(), layout.tabs, app);
    }
    render_content(frame, layout.content, app);
    render_footer(frame, layout.footer, app);

    // Overlays last so their hit areas sit on top
    render_overlay(frame, app);
}

//! Shared helpers for integration tests.
//!
//! Drives an [`App`] over the bundled content the same way the event loop
//! does: key and mouse events in, frames rendered to a `TestBackend`.

#![allow(dead_code)]

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use sdprep::app::App;
use sdprep::content::{self, ContentStore};
use sdprep::ui;

pub fn store() -> &'static ContentStore {
    content::builtin().expect("bundled content loads")
}

pub fn app() -> App<'static> {
    App::new(store())
}

pub fn app_on(sheet: &str) -> App<'static> {
    let mut app = app();
    app.select_sheet(sheet);
    app
}

pub fn press(app: &mut App<'_>, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

pub fn type_keys(app: &mut App<'_>, keys: &str) {
    for c in keys.chars() {
        press(app, KeyCode::Char(c));
    }
}

pub fn mouse(app: &mut App<'_>, kind: MouseEventKind, column: u16, row: u16) {
    app.handle_event(Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

pub fn click(app: &mut App<'_>, column: u16, row: u16) {
    mouse(app, MouseEventKind::Down(MouseButton::Left), column, row);
}

/// Render one frame and return the buffer.
pub fn draw(app: &mut App<'_>, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|f| ui::render(f, app)).expect("draw");
    app.needs_redraw = false;
    terminal.backend().buffer().clone()
}

/// Rows of the buffer as strings.
pub fn rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (0..area.height)
        .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

pub fn screen_text(buffer: &Buffer) -> String {
    rows(buffer).join("\n")
}

/// Cell position of the first occurrence of `needle`.
pub fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let area = buffer.area;
    for y in 0..area.height {
        let cells: Vec<&str> = (0..area.width).map(|x| buffer[(x, y)].symbol()).collect();
        for start in 0..cells.len() {
            let mut text = String::new();
            for cell in &cells[start..] {
                text.push_str(cell);
                if text.len() >= needle.len() {
                    break;
                }
            }
            if text.starts_with(needle) {
                return Some((start as u16, y));
            }
        }
    }
    None
}

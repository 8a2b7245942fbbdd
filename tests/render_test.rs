//! Full-frame rendering and mouse interaction against `TestBackend`.

mod support;

use crossterm::event::{KeyCode, MouseEventKind};
use sdprep::app::Overlay;
use support::*;

#[test]
fn test_every_section_renders_at_common_sizes() {
    for sheet in store().sheets() {
        for section in &sheet.sections {
            let mut app = app_on(&sheet.id);
            app.select_section(&section.id);
            for (w, h) in [(120, 40), (80, 24), (40, 12)] {
                let buffer = draw(&mut app, w, h);
                assert_eq!(buffer.area.width, w);
            }
        }
    }
}

#[test]
fn test_sheet_tab_click_switches_sheet() {
    let mut app = app();
    let buffer = draw(&mut app, 160, 40);
    let (x, y) = find(&buffer, "Reliability").expect("reliability tab visible");

    click(&mut app, x + 1, y);

    assert_eq!(app.active_sheet().unwrap().id, "reliability");
    assert!(app.needs_redraw);
}

#[test]
fn test_section_tab_click_switches_section() {
    let mut app = app();
    let buffer = draw(&mut app, 160, 40);
    // Padded like a tab, so the subtitle mention does not match
    let (x, y) = find(&buffer, " Sharding ").expect("sharding tab visible");

    click(&mut app, x + 1, y);

    assert_eq!(app.active_section().unwrap().id, "sharding");
}

#[test]
fn test_card_header_click_toggles_card() {
    let mut app = app_on("caching");
    let buffer = draw(&mut app, 120, 160);
    let (x, y) = find(&buffer, "Write-Through").expect("strategy card visible");

    click(&mut app, x, y);
    assert!(app.view.as_ref().unwrap().is_open(1, 1));

    let buffer = draw(&mut app, 120, 160);
    let (x, y) = find(&buffer, "Write-Through").unwrap();
    click(&mut app, x, y);
    assert!(!app.view.as_ref().unwrap().is_open(1, 1));
}

#[test]
fn test_bulk_buttons_click() {
    let mut app = app_on("caching");
    let buffer = draw(&mut app, 120, 160);
    let (x, y) = find(&buffer, "[Expand all]").expect("expand button visible");

    click(&mut app, x + 1, y);
    let view = app.view.as_ref().unwrap();
    assert!((0..4).all(|i| view.is_open(1, i)));

    let buffer = draw(&mut app, 120, 160);
    let (x, y) = find(&buffer, "[Collapse all]").unwrap();
    click(&mut app, x + 1, y);
    let view = app.view.as_ref().unwrap();
    assert!((0..4).all(|i| !view.is_open(1, i)));
}

#[test]
fn test_click_on_empty_space_does_nothing() {
    let mut app = app_on("caching");
    draw(&mut app, 120, 40);
    app.needs_redraw = false;
    let before = app.cursor;

    // Footer row carries no hit areas
    click(&mut app, 2, 39);

    assert_eq!(app.cursor, before);
    assert!(!app.needs_redraw);
}

#[test]
fn test_wheel_scrolls_content() {
    let mut app = app_on("gcp-databases");
    app.expand_all(1);
    draw(&mut app, 100, 30);
    assert!(app.scroll.max_offset > 0);

    mouse(&mut app, MouseEventKind::ScrollDown, 10, 10);
    assert_eq!(app.scroll.offset, 3);
    mouse(&mut app, MouseEventKind::ScrollUp, 10, 10);
    assert_eq!(app.scroll.offset, 0);
}

#[test]
fn test_selected_sheet_opens_at_the_top() {
    let mut app = app_on("messaging");
    app.select_sheet("gcp-databases");
    let text = screen_text(&draw(&mut app, 100, 30));

    assert_eq!(app.scroll.offset, 0);
    assert!(text.contains("Quick Decision Tree"));

    // Moving the cursor re-attaches the viewport
    press(&mut app, KeyCode::Down);
    assert!(app.follow_cursor);
}

#[test]
fn test_cache_layer_details_are_always_visible() {
    let mut app = app_on("caching");
    let text = screen_text(&draw(&mut app, 200, 120));

    assert!(text.contains("Static assets"));
    assert!(text.contains("Don't cache:"));
    assert!(text.contains("Trade-off: Simple. Eventual"));
    assert!(!text.contains("GOTCHA / INTERVIEW TIP"));

    let view = app.view.as_ref().unwrap();
    assert!(!view.list(0).unwrap().is_expandable(0));
}

#[test]
fn test_cursor_scrolls_into_view() {
    let mut app = app_on("caching");
    draw(&mut app, 100, 20);
    press(&mut app, KeyCode::End);
    let targets = app.view.as_ref().unwrap().targets();
    app.cursor = targets.first().copied();
    app.follow_cursor = true;

    draw(&mut app, 100, 20);
    assert_eq!(app.scroll.offset, 0);
}

#[test]
fn test_help_overlay_lists_keys_and_closes_on_backdrop_click() {
    let mut app = app();
    type_keys(&mut app, "?");
    let text = screen_text(&draw(&mut app, 100, 40));
    assert!(text.contains("Keys"));
    assert!(text.contains("Sheet menu"));

    click(&mut app, 0, 39);
    assert_eq!(app.overlay, Overlay::None);
}

#[test]
fn test_sheet_menu_click_selects() {
    let mut app = app();
    type_keys(&mut app, "m");
    let buffer = draw(&mut app, 100, 40);
    // The menu lists full titles; the nav bar only has the short label
    let (x, y) = find(&buffer, "Coordination").expect("menu entry visible");

    click(&mut app, x, y);

    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.active_sheet().unwrap().id, "consistency");
}

#[test]
fn test_unknown_section_renders_empty_frame() {
    let mut app = app_on("networking");
    app.select_section("nope");
    let text = screen_text(&draw(&mut app, 100, 30));
    assert!(text.contains("Networking"));
    assert!(!text.contains("L4 vs L7"));
}

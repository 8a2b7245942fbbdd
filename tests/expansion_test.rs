//! Card and block expansion, driven through keys.

mod support;

use crossterm::event::KeyCode;
use sdprep::state::Target;
use support::*;

const LAYERS: usize = 0;
const STRATEGIES: usize = 1;
const FAILURES: usize = 3;

fn is_open(app: &sdprep::app::App<'_>, list: usize, item: usize) -> bool {
    app.view.as_ref().unwrap().is_open(list, item)
}

#[test]
fn test_default_open_cards_on_mount() {
    let app = app_on("caching");
    assert!(is_open(&app, STRATEGIES, 0));
    assert!(!is_open(&app, STRATEGIES, 1));
    assert!(is_open(&app, FAILURES, 0));
    // Layer details have no toggle of their own
    assert!(is_open(&app, LAYERS, 0));
}

#[test]
fn test_toggle_default_open_card_twice() {
    let mut app = app_on("caching");
    app.cursor = Some(Target::Card {
        list: STRATEGIES,
        item: 0,
    });

    press(&mut app, KeyCode::Enter);
    assert!(!is_open(&app, STRATEGIES, 0));

    press(&mut app, KeyCode::Char(' '));
    assert!(is_open(&app, STRATEGIES, 0));

    // Siblings untouched
    assert!(!is_open(&app, STRATEGIES, 1));
    assert!(is_open(&app, FAILURES, 0));
}

#[test]
fn test_bulk_keys_apply_to_list_under_cursor() {
    let mut app = app_on("caching");
    app.cursor = Some(Target::Card {
        list: STRATEGIES,
        item: 2,
    });

    type_keys(&mut app, "e");
    let items = app.active_section().unwrap().subsections[STRATEGIES].items.len();
    assert!((0..items).all(|i| is_open(&app, STRATEGIES, i)));

    type_keys(&mut app, "c");
    assert!((0..items).all(|i| !is_open(&app, STRATEGIES, i)));

    // Other lists keep their own state
    assert!(is_open(&app, FAILURES, 0));
}

#[test]
fn test_bulk_keys_skip_lists_without_buttons() {
    let mut app = app_on("caching");
    assert_eq!(app.cursor, Some(Target::Block { list: LAYERS }));
    type_keys(&mut app, "ec");
    assert!(is_open(&app, LAYERS, 0));
    assert!(is_open(&app, STRATEGIES, 0));
    assert!(!is_open(&app, STRATEGIES, 1));

    app.cursor = Some(Target::Card {
        list: FAILURES,
        item: 1,
    });
    type_keys(&mut app, "e");
    assert!(!is_open(&app, FAILURES, 1));
}

#[test]
fn test_bulk_keys_without_cursor_use_first_bulk_list() {
    let mut app = app_on("caching");
    app.cursor = None;
    type_keys(&mut app, "c");
    assert!(!is_open(&app, STRATEGIES, 0));
    assert!(is_open(&app, FAILURES, 0));
}

#[test]
fn test_block_toggle_hides_its_cards() {
    let mut app = app_on("caching");
    assert_eq!(app.cursor, Some(Target::Block { list: LAYERS }));

    press(&mut app, KeyCode::Enter);
    let view = app.view.as_ref().unwrap();
    assert!(view.is_hidden(LAYERS));
    assert!(!view
        .targets()
        .iter()
        .any(|t| matches!(t, Target::Card { list: LAYERS, .. })));

    press(&mut app, KeyCode::Enter);
    assert!(!app.view.as_ref().unwrap().is_hidden(LAYERS));
}

#[test]
fn test_cursor_walks_targets_in_order() {
    let mut app = app_on("caching");
    let targets = app.view.as_ref().unwrap().targets();

    for expected in targets.iter().skip(1) {
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, Some(*expected));
    }
    // Clamped at the end
    press(&mut app, KeyCode::Down);
    assert_eq!(app.cursor, targets.last().copied());

    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.cursor, targets.iter().rev().nth(1).copied());
}

#[test]
fn test_expansion_is_dropped_on_navigation() {
    let mut app = app_on("caching");
    app.toggle_card(STRATEGIES, 0);
    app.toggle_card(STRATEGIES, 3);

    type_keys(&mut app, "]");
    type_keys(&mut app, "[");

    assert_eq!(app.active_sheet().unwrap().id, "caching");
    assert!(is_open(&app, STRATEGIES, 0));
    assert!(!is_open(&app, STRATEGIES, 3));
}

#[test]
fn test_section_switch_resets_expansion() {
    let mut app = app_on("gcp-databases");
    let databases = 1;
    app.toggle_card(databases, 0);
    assert!(!is_open(&app, databases, 0));

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::BackTab);
    assert!(is_open(&app, databases, 0));
}

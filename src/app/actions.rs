//! Cursor, card toggles, scrolling and overlays.
//!
//! Methods return true when state changed.

use super::{App, Overlay};
use crate::state::Target;

impl<'a> App<'a> {
    // =========================================================================
    // Cursor
    // =========================================================================

    pub fn cursor_down(&mut self) -> bool {
        self.step_cursor(1)
    }

    pub fn cursor_up(&mut self) -> bool {
        self.step_cursor(-1)
    }

    fn step_cursor(&mut self, delta: isize) -> bool {
        let Some(view) = &self.view else {
            return false;
        };
        let targets = view.targets();
        let Some(last) = targets.len().checked_sub(1) else {
            return false;
        };
        let next = match self.cursor.and_then(|c| targets.iter().position(|t| *t == c)) {
            Some(i) if delta < 0 => i.saturating_sub(1),
            Some(i) => (i + 1).min(last),
            None => 0,
        };
        self.set_cursor(targets[next])
    }

    fn set_cursor(&mut self, target: Target) -> bool {
        self.follow_cursor = true;
        let changed = self.cursor != Some(target);
        self.cursor = Some(target);
        changed
    }

    /// Toggle the target under the cursor.
    pub fn activate(&mut self) -> bool {
        let (Some(view), Some(target)) = (self.view.as_mut(), self.cursor) else {
            return false;
        };
        let changed = view.activate(target);
        self.follow_cursor = true;
        changed
    }

    // =========================================================================
    // Cards and blocks
    // =========================================================================

    /// Toggle one card and move the cursor onto it.
    pub fn toggle_card(&mut self, list: usize, item: usize) -> bool {
        let Some(view) = self.view.as_mut() else {
            return false;
        };
        let changed = view.toggle_card(list, item);
        if changed {
            self.set_cursor(Target::Card { list, item });
        }
        changed
    }

    pub fn toggle_block(&mut self, list: usize) -> bool {
        let Some(view) = self.view.as_mut() else {
            return false;
        };
        let changed = view.toggle_block(list);
        if changed {
            self.set_cursor(Target::Block { list });
        }
        changed
    }

    pub fn expand_all(&mut self, list: usize) -> bool {
        self.view
            .as_mut()
            .map(|view| view.expand_all(list))
            .unwrap_or(false)
    }

    pub fn collapse_all(&mut self, list: usize) -> bool {
        self.view
            .as_mut()
            .map(|view| view.collapse_all(list))
            .unwrap_or(false)
    }

    /// The list bulk commands apply to: the cursor's list when it offers
    /// bulk buttons, the first such list when there is no cursor.
    pub fn bulk_list(&self) -> Option<usize> {
        let subsections = &self.active_section()?.subsections;
        match self.cursor {
            Some(target) => subsections
                .get(target.list())
                .filter(|sub| sub.bulk_toggle)
                .map(|_| target.list()),
            None => subsections.iter().position(|sub| sub.bulk_toggle),
        }
    }

    pub fn expand_all_current(&mut self) -> bool {
        match self.bulk_list() {
            Some(list) => self.expand_all(list),
            None => false,
        }
    }

    pub fn collapse_all_current(&mut self) -> bool {
        match self.bulk_list() {
            Some(list) => self.collapse_all(list),
            None => false,
        }
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    // Manual scrolling detaches the viewport from the cursor until it moves.

    pub fn scroll_up(&mut self, lines: u16) -> bool {
        self.follow_cursor = false;
        self.scroll.scroll_up(lines)
    }

    pub fn scroll_down(&mut self, lines: u16) -> bool {
        self.follow_cursor = false;
        self.scroll.scroll_down(lines)
    }

    pub fn page_up(&mut self) -> bool {
        self.follow_cursor = false;
        self.scroll.page_up()
    }

    pub fn page_down(&mut self) -> bool {
        self.follow_cursor = false;
        self.scroll.page_down()
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.follow_cursor = false;
        self.scroll.to_top()
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.follow_cursor = false;
        self.scroll.to_bottom()
    }

    // =========================================================================
    // Overlays
    // =========================================================================

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help => Overlay::None,
            _ => Overlay::Help,
        };
    }

    /// Open the sheet menu with the active sheet highlighted.
    pub fn open_sheet_menu(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.overlay = Overlay::SheetMenu {
            selected: self.active_sheet_index().unwrap_or(0),
        };
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    pub fn menu_up(&mut self) {
        if let Overlay::SheetMenu { selected } = &mut self.overlay {
            *selected = selected.saturating_sub(1);
        }
    }

    pub fn menu_down(&mut self) {
        let last = self.store.len().saturating_sub(1);
        if let Overlay::SheetMenu { selected } = &mut self.overlay {
            *selected = (*selected + 1).min(last);
        }
    }

    /// Select the highlighted sheet; this also closes the menu.
    pub fn menu_confirm(&mut self) {
        if let Overlay::SheetMenu { selected } = self.overlay {
            self.select_sheet_at(selected);
            self.close_overlay();
        }
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn caching() -> App<'static> {
        let mut app = App::new(content::builtin().unwrap());
        app.select_sheet("caching");
        app
    }

    const STRATEGIES: usize = 1;

    #[test]
    fn test_cursor_walks_targets_and_clamps() {
        let mut app = caching();
        let targets = app.view.as_ref().unwrap().targets();
        assert!(!app.cursor_up());
        assert_eq!(app.cursor, targets.first().copied());

        for _ in 0..targets.len() + 5 {
            app.cursor_down();
        }
        assert_eq!(app.cursor, targets.last().copied());
    }

    #[test]
    fn test_activate_toggles_card_under_cursor() {
        let mut app = caching();
        app.cursor = Some(Target::Card {
            list: STRATEGIES,
            item: 0,
        });
        assert!(app.view.as_ref().unwrap().is_open(STRATEGIES, 0));
        assert!(app.activate());
        assert!(!app.view.as_ref().unwrap().is_open(STRATEGIES, 0));
        assert!(app.activate());
        assert!(app.view.as_ref().unwrap().is_open(STRATEGIES, 0));
    }

    #[test]
    fn test_hidden_block_moves_cursor_past_its_cards() {
        let mut app = caching();
        assert_eq!(app.cursor, Some(Target::Block { list: 0 }));
        assert!(app.activate());
        assert!(app.view.as_ref().unwrap().is_hidden(0));
        app.cursor_down();
        assert_eq!(app.cursor.map(|t| t.list()), Some(STRATEGIES));
    }

    #[test]
    fn test_toggle_card_moves_cursor() {
        let mut app = caching();
        assert!(app.toggle_card(STRATEGIES, 2));
        assert_eq!(
            app.cursor,
            Some(Target::Card {
                list: STRATEGIES,
                item: 2
            })
        );
    }

    #[test]
    fn test_bulk_commands_follow_cursor_list() {
        let mut app = caching();
        app.cursor = Some(Target::Card {
            list: STRATEGIES,
            item: 0,
        });
        app.expand_all_current();
        let len = app.active_section().unwrap().subsections[STRATEGIES].items.len();
        let view = app.view.as_ref().unwrap();
        assert!((0..len).all(|i| view.is_open(STRATEGIES, i)));

        app.collapse_all_current();
        assert_eq!(app.view.as_ref().unwrap().lists()[STRATEGIES].expansion.open_count(), 0);
    }

    #[test]
    fn test_bulk_without_cursor_uses_first_bulk_list() {
        let mut app = caching();
        app.cursor = None;
        assert_eq!(app.bulk_list(), Some(STRATEGIES));
    }

    #[test]
    fn test_bulk_ignores_lists_without_buttons() {
        let mut app = caching();
        let faq = app.active_section().unwrap().subsections.len() - 1;
        app.cursor = Some(Target::Card { list: faq, item: 0 });
        assert_eq!(app.bulk_list(), None);
        assert!(!app.expand_all_current());
        assert!(!app.view.as_ref().unwrap().is_open(faq, 1));
    }

    #[test]
    fn test_scroll_detaches_cursor_follow() {
        let mut app = caching();
        app.scroll.update_bounds(200, 20);
        assert!(app.scroll_down(3));
        assert!(!app.follow_cursor);
        app.cursor_down();
        assert!(app.follow_cursor);
    }

    #[test]
    fn test_sheet_menu_flow() {
        let mut app = caching();
        app.open_sheet_menu();
        assert_eq!(app.overlay, Overlay::SheetMenu { selected: 2 });
        app.menu_down();
        app.menu_confirm();
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.selection.is_sheet("networking"));
    }

    #[test]
    fn test_menu_clamps() {
        let mut app = caching();
        app.open_sheet_menu();
        for _ in 0..20 {
            app.menu_down();
        }
        assert_eq!(app.overlay, Overlay::SheetMenu { selected: 6 });
        for _ in 0..20 {
            app.menu_up();
        }
        assert_eq!(app.overlay, Overlay::SheetMenu { selected: 0 });
    }

    #[test]
    fn test_help_toggles() {
        let mut app = caching();
        app.toggle_help();
        assert_eq!(app.overlay, Overlay::Help);
        app.toggle_help();
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = caching();
        app.quit();
        assert!(app.should_quit);
    }
}

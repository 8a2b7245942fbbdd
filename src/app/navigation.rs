//! Sheet and section selection for the App.

use super::{App, Overlay};
use crate::state::{SectionView, Selection};

impl<'a> App<'a> {
    /// Make `id` the active sheet and mount its root section.
    ///
    /// Re-selecting the active sheet keeps its state. An unknown id leaves
    /// nothing mounted, which renders as an empty view. Either way any open
    /// overlay is closed.
    pub fn select_sheet(&mut self, id: &str) {
        self.overlay = Overlay::None;
        if self.selection.is_sheet(id) && self.view.is_some() {
            return;
        }

        let store = self.store;
        let root = store.sheet(id).and_then(|sheet| sheet.root_section());
        self.selection = Selection::new(id, root.map(|section| section.id.clone()));
        self.view = root.map(|section| SectionView::mount(id, section));
        self.reset_view_position();

        match root {
            Some(section) => tracing::debug!(sheet = id, section = %section.id, "sheet selected"),
            None => tracing::debug!(sheet = id, "unknown sheet, nothing mounted"),
        }
    }

    /// Swap the visible section within the active sheet.
    ///
    /// Selecting the mounted section is a no-op; an unknown id unmounts the
    /// current section and renders nothing.
    pub fn select_section(&mut self, id: &str) {
        let Some(sheet_id) = self.selection.sheet_id.clone() else {
            return;
        };
        if self.selection.is_section(id) && self.view.is_some() {
            return;
        }

        let section = self.active_sheet().and_then(|sheet| sheet.section(id));
        self.selection.section_id = Some(id.to_string());
        self.view = section.map(|section| SectionView::mount(&sheet_id, section));
        self.reset_view_position();

        if section.is_some() {
            tracing::debug!(sheet = %sheet_id, section = id, "section selected");
        } else {
            tracing::debug!(sheet = %sheet_id, section = id, "unknown section, nothing mounted");
        }
    }

    /// Select the sheet at `index` in navigation order.
    pub fn select_sheet_at(&mut self, index: usize) {
        let store = self.store;
        if let Some(sheet) = store.sheet_at(index) {
            self.select_sheet(&sheet.id);
        }
    }

    pub fn next_sheet(&mut self) {
        self.step_sheet(1);
    }

    pub fn prev_sheet(&mut self) {
        self.step_sheet(-1);
    }

    pub fn next_section(&mut self) {
        self.step_section(1);
    }

    pub fn prev_section(&mut self) {
        self.step_section(-1);
    }

    /// Position of the active sheet in the store.
    pub fn active_sheet_index(&self) -> Option<usize> {
        self.selection
            .sheet_id
            .as_deref()
            .and_then(|id| self.store.sheet_index(id))
    }

    fn step_sheet(&mut self, delta: isize) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let next = match self.active_sheet_index() {
            Some(current) => wrap_index(current, delta, len),
            None => 0,
        };
        self.select_sheet_at(next);
    }

    fn step_section(&mut self, delta: isize) {
        let Some(sheet) = self.active_sheet() else {
            return;
        };
        let len = sheet.sections.len();
        if len == 0 {
            return;
        }
        let next = match self
            .selection
            .section_id
            .as_deref()
            .and_then(|id| sheet.section_index(id))
        {
            Some(current) => wrap_index(current, delta, len),
            None => 0,
        };
        if let Some(section) = sheet.sections.get(next) {
            self.select_section(&section.id);
        }
    }

    /// Cursor on the first focusable target, scrolled to the top.
    ///
    /// The viewport only starts following the cursor once it moves, so a
    /// section that opens with plain cards still shows them.
    fn reset_view_position(&mut self) {
        self.cursor = self
            .view
            .as_ref()
            .and_then(|view| view.targets().first().copied());
        self.scroll.reset();
        self.follow_cursor = false;
    }
}

fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    (current as isize + delta).rem_euclid(len as isize) as usize
}

//! UI state owned by one mounted section.
//!
//! A [`SectionView`] is created whenever a section becomes visible and is
//! dropped when another section or sheet is selected, so expansion state
//! never leaks between sections.

use crate::models::{Section, Subsection};

use super::expansion::ExpansionSet;

/// Something the cursor can land on and activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Show/hide a collapsible subsection.
    Block { list: usize },
    /// Expand/collapse one card.
    Card { list: usize, item: usize },
}

impl Target {
    pub fn list(&self) -> usize {
        match *self {
            Target::Block { list } | Target::Card { list, .. } => list,
        }
    }
}

/// State for one subsection's card list.
#[derive(Debug, Clone)]
pub struct ListView {
    pub expansion: ExpansionSet,
    /// Whole block hidden (only ever true for collapsible subsections).
    pub hidden: bool,
    pub collapsible: bool,
    pub always_open: bool,
    expandable: Vec<bool>,
}

impl ListView {
    fn mount(sub: &Subsection) -> Self {
        let mut expansion = ExpansionSet::with_open(sub.items.len(), sub.expanded.iter().copied());
        if sub.always_open {
            expansion.expand_all();
        }
        Self {
            expansion,
            hidden: false,
            collapsible: sub.collapsible,
            always_open: sub.always_open,
            expandable: sub
                .items
                .iter()
                .map(|i| !sub.always_open && i.is_expandable())
                .collect(),
        }
    }

    /// Whether the card reacts to toggling. Cards in an always-open list
    /// never do.
    pub fn is_expandable(&self, item: usize) -> bool {
        self.expandable.get(item).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone)]
pub struct SectionView {
    pub sheet_id: String,
    pub section_id: String,
    lists: Vec<ListView>,
}

impl SectionView {
    /// Fresh state for `section`, applying its default-open cards.
    pub fn mount(sheet_id: &str, section: &Section) -> Self {
        Self {
            sheet_id: sheet_id.to_string(),
            section_id: section.id.clone(),
            lists: section.subsections.iter().map(ListView::mount).collect(),
        }
    }

    pub fn lists(&self) -> &[ListView] {
        &self.lists
    }

    pub fn list(&self, list: usize) -> Option<&ListView> {
        self.lists.get(list)
    }

    pub fn is_open(&self, list: usize, item: usize) -> bool {
        self.lists
            .get(list)
            .map(|l| l.expansion.is_open(item))
            .unwrap_or(false)
    }

    pub fn is_hidden(&self, list: usize) -> bool {
        self.lists.get(list).map(|l| l.hidden).unwrap_or(false)
    }

    /// Flip one card. Cards without secondary content ignore this.
    /// Returns true when state changed.
    pub fn toggle_card(&mut self, list: usize, item: usize) -> bool {
        let Some(view) = self.lists.get_mut(list) else {
            return false;
        };
        if !view.is_expandable(item) {
            return false;
        }
        match view.expansion.toggle(item) {
            Some(open) => {
                tracing::debug!(list, item, open, "card toggled");
                true
            }
            None => false,
        }
    }

    pub fn expand_all(&mut self, list: usize) -> bool {
        match self.lists.get_mut(list) {
            Some(view) if !view.always_open => {
                view.expansion.expand_all();
                true
            }
            _ => false,
        }
    }

    pub fn collapse_all(&mut self, list: usize) -> bool {
        match self.lists.get_mut(list) {
            Some(view) if !view.always_open => {
                view.expansion.collapse_all();
                true
            }
            _ => false,
        }
    }

    /// Show/hide a collapsible block. Non-collapsible blocks ignore this.
    pub fn toggle_block(&mut self, list: usize) -> bool {
        match self.lists.get_mut(list) {
            Some(view) if view.collapsible => {
                view.hidden = !view.hidden;
                tracing::debug!(list, hidden = view.hidden, "block toggled");
                true
            }
            _ => false,
        }
    }

    /// Apply a target's default action.
    pub fn activate(&mut self, target: Target) -> bool {
        match target {
            Target::Block { list } => self.toggle_block(list),
            Target::Card { list, item } => self.toggle_card(list, item),
        }
    }

    /// Focusable targets in display order. Hidden blocks contribute only
    /// their header.
    pub fn targets(&self) -> Vec<Target> {
        let mut targets = Vec::new();
        for (list, view) in self.lists.iter().enumerate() {
            if view.collapsible {
                targets.push(Target::Block { list });
            }
            if view.hidden {
                continue;
            }
            targets.extend(
                (0..view.expansion.len())
                    .filter(|&item| view.is_expandable(item))
                    .map(|item| Target::Card { list, item }),
            );
        }
        targets
    }
}

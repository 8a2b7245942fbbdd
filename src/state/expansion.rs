//! Set of open card indices for one rendered list.

use std::collections::BTreeSet;

/// Which cards of a list of `len` cards are expanded.
///
/// Indices outside `0..len` are never stored, so the set stays valid for
/// the list it was created for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    len: usize,
    open: BTreeSet<usize>,
}

impl ExpansionSet {
    /// Empty set for a list of `len` cards.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: BTreeSet::new(),
        }
    }

    /// Set with the given indices open; out-of-range indices are dropped.
    pub fn with_open(len: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            len,
            open: indices.into_iter().filter(|&i| i < len).collect(),
        }
    }

    /// Flip membership of `index`. Returns the new state, or `None` when the
    /// index is out of range (nothing changes).
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        if self.open.remove(&index) {
            Some(false)
        } else {
            self.open.insert(index);
            Some(true)
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Open every index in the list.
    pub fn expand_all(&mut self) {
        self.open = (0..self.len).collect();
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }

    /// Number of cards in the list this set belongs to.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Open indices in ascending order.
    pub fn open_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.open.iter().copied()
    }

    pub fn all_open(&self) -> bool {
        self.open.len() == self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut set = ExpansionSet::new(3);
        assert_eq!(set.toggle(1), Some(true));
        assert!(set.is_open(1));
        assert_eq!(set.toggle(1), Some(false));
        assert_eq!(set, ExpansionSet::new(3));
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut set = ExpansionSet::new(2);
        assert_eq!(set.toggle(2), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_independent_cards() {
        let mut set = ExpansionSet::new(4);
        set.toggle(0);
        set.toggle(3);
        assert!(set.is_open(0));
        assert!(set.is_open(3));
        assert_eq!(set.open_indices().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn test_expand_all_and_collapse_all() {
        let mut set = ExpansionSet::new(5);
        set.expand_all();
        assert_eq!(set.open_count(), 5);
        assert!(set.all_open());
        set.collapse_all();
        assert!(set.is_empty());
    }

    #[test]
    fn test_with_open_drops_invalid_indices() {
        let set = ExpansionSet::with_open(2, [0, 1, 7]);
        assert_eq!(set.open_indices().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_expand_all_on_empty_list() {
        let mut set = ExpansionSet::new(0);
        set.expand_all();
        assert!(set.is_empty());
        assert!(set.all_open());
    }
}

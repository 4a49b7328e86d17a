//! Selected-customer state machine
//!
//! `none -> id`, `id -> id'` and `id -> none` (logout). Every transition bumps
//! the generation; requests are tagged with the generation they were issued
//! under and answers from an older generation are discarded.

use crate::api::CustomerId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<CustomerId>,
    generation: u64,
}

impl Selection {
    /// Select `id` (re-selecting the same id still counts as a change).
    /// Returns the new generation.
    pub fn select(&mut self, id: CustomerId) -> u64 {
        self.current = Some(id);
        self.generation += 1;
        self.generation
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.generation += 1;
    }

    pub fn current(&self) -> Option<CustomerId> {
        self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether an answer for `id` issued under `generation` still applies
    pub fn is_current(&self, id: CustomerId, generation: u64) -> bool {
        self.current == Some(id) && self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reselection_invalidates_earlier_generation() {
        let mut sel = Selection::default();
        let first = sel.select(1);
        let second = sel.select(2);
        assert!(!sel.is_current(1, first));
        assert!(sel.is_current(2, second));
    }

    #[test]
    fn same_id_reselected_gets_new_generation() {
        let mut sel = Selection::default();
        let first = sel.select(4);
        let second = sel.select(4);
        assert_ne!(first, second);
        assert!(!sel.is_current(4, first));
    }

    #[test]
    fn clear_leaves_nothing_current() {
        let mut sel = Selection::default();
        let generation = sel.select(3);
        sel.clear();
        assert_eq!(sel.current(), None);
        assert!(!sel.is_current(3, generation));
    }
}

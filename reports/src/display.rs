//! Per-section expand/collapse state.
//!
//! Every section starts expanded; a key only appears in the map once the user
//! toggles it. The map is ephemeral: a fresh report starts from an empty
//! state.

use std::collections::HashMap;

use crate::types::SectionKey;

/// Expand/collapse flags keyed by [`SectionKey`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    expanded: HashMap<SectionKey, bool>,
}

impl DisplayState {
    /// Empty state: everything expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absence of an entry means expanded.
    pub fn is_expanded(&self, key: &SectionKey) -> bool {
        self.expanded.get(key).copied().unwrap_or(true)
    }

    /// Flip one section and return its new state. Other keys are untouched.
    pub fn toggle(&mut self, key: &SectionKey) -> bool {
        let next = !self.is_expanded(key);
        self.expanded.insert(key.clone(), next);
        next
    }

    /// Force one section open or closed.
    pub fn set(&mut self, key: &SectionKey, expanded: bool) {
        self.expanded.insert(key.clone(), expanded);
    }

    /// Collapse every listed key.
    pub fn collapse_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a SectionKey>) {
        for key in keys {
            self.expanded.insert(key.clone(), false);
        }
    }

    /// Drop every entry (all sections back to expanded).
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    /// Number of keys currently collapsed.
    pub fn collapsed_count(&self) -> usize {
        self.expanded.values().filter(|open| !**open).count()
    }
}

//! Selection set
//!
//! Tracks which elements are currently selected (exempt from dimming in the
//! UI layer). Membership is what matters for queries; insertion order is kept
//! because display code lists selections in the order the user made them.

use indexmap::IndexSet;

use crate::focus::ElementId;

/// Insertion-ordered set of selected elements
#[derive(Clone, Debug, Default)]
pub struct SelectionSet {
    selected: IndexSet<ElementId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add if absent, remove if present. Returns true if the element is
    /// selected after the call.
    pub fn toggle(&mut self, id: ElementId) -> bool {
        if self.selected.shift_remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Returns true if the element was newly added
    pub fn add(&mut self, id: ElementId) -> bool {
        self.selected.insert(id)
    }

    /// Returns true if the element was present
    pub fn remove(&mut self, id: ElementId) -> bool {
        self.selected.shift_remove(&id)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.selected.contains(&id)
    }

    /// Copy of the current selection in insertion order, detached from any
    /// later mutation
    pub fn snapshot(&self) -> Vec<ElementId> {
        self.selected.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

//! Focus manager
//!
//! Collaborator that asks the scroll view to center registered elements.
//! Elements are registered explicitly with their screen rectangles - there is
//! no global scene lookup - and referenced by `ElementId` afterwards. The
//! manager also owns the selection set so callers can select-and-center in
//! one step.

use flick_core::geometry::Rect;
use slotmap::{new_key_type, SlotMap};

use crate::selection::SelectionSet;
use crate::view::ScrollView;

new_key_type! {
    /// Stable identifier for a focusable element
    pub struct ElementId;
}

/// Registry mapping element ids to their screen rectangles
#[derive(Debug, Default)]
pub struct FocusRegistry {
    elements: SlotMap<ElementId, Rect>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, rect: Rect) -> ElementId {
        self.elements.insert(rect)
    }

    /// Update an element's rectangle after a layout change. Returns false if
    /// the element is no longer registered.
    pub fn update(&mut self, id: ElementId, rect: Rect) -> bool {
        match self.elements.get_mut(id) {
            Some(slot) => {
                *slot = rect;
                true
            }
            None => false,
        }
    }

    pub fn unregister(&mut self, id: ElementId) -> Option<Rect> {
        self.elements.remove(id)
    }

    pub fn get(&self, id: ElementId) -> Option<Rect> {
        self.elements.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Coordinates element focus with the scroll view
#[derive(Debug, Default)]
pub struct FocusManager {
    registry: FocusRegistry,
    selection: SelectionSet,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &FocusRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FocusRegistry {
        &mut self.registry
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    /// Center the element in the scroll view. A stale or unknown id logs a
    /// warning and skips the move rather than aborting.
    pub fn focus(&self, id: ElementId, view: &mut ScrollView) {
        match self.registry.get(id) {
            Some(rect) => view.focus_on(rect),
            None => tracing::warn!("focus skipped: element {id:?} is not registered"),
        }
    }

    /// Toggle the element's selection and, when it became selected, center
    /// it. Returns true if the element is selected after the call.
    pub fn focus_and_select(&mut self, id: ElementId, view: &mut ScrollView) -> bool {
        if self.registry.get(id).is_none() {
            tracing::warn!("select skipped: element {id:?} is not registered");
            return self.selection.contains(id);
        }
        let selected = self.selection.toggle(id);
        if selected {
            self.focus(id, view);
        }
        selected
    }
}

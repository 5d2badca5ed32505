//! Scroll interaction phases
//!
//! One enum, one mutator at a time: `Dragging` while a pointer owns the
//! content, `Coasting` while inertia integrates, `Centering` while a
//! programmatic move holds the interaction lock, `Idle` otherwise.

use flick_core::events::{event_types, EventType, StateTransitions};

/// Current phase of the scroll state machine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    /// Nothing is moving the content
    #[default]
    Idle,
    /// A pointer drag is moving the content
    Dragging,
    /// Inertia is decaying a flick velocity
    Coasting,
    /// An eased centering move holds the interaction lock
    Centering,
}

impl ScrollPhase {
    /// Check if the content is in motion or owned by an interaction
    pub fn is_active(&self) -> bool {
        !matches!(self, ScrollPhase::Idle)
    }
}

impl StateTransitions for ScrollPhase {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use event_types::*;
        match (self, event) {
            // A new drag takes over from rest, coasting, or a centering move
            (ScrollPhase::Idle | ScrollPhase::Coasting, DRAG_START) => Some(ScrollPhase::Dragging),
            (ScrollPhase::Dragging, DRAG_END) => Some(ScrollPhase::Coasting),
            (ScrollPhase::Coasting, SETTLED) => Some(ScrollPhase::Idle),
            // Centering preempts everything, including an in-flight centering
            // move; the view cancels any drag session before sending CENTER
            (_, CENTER) => Some(ScrollPhase::Centering),
            (ScrollPhase::Centering, CENTER_DONE) => Some(ScrollPhase::Idle),
            // An external lock parks drag or coasting motion immediately
            (ScrollPhase::Dragging | ScrollPhase::Coasting, LOCK) => Some(ScrollPhase::Idle),
            _ => None,
        }
    }
}

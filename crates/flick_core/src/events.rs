//! Event identifiers and state transitions
//!
//! Interaction state machines are plain enums that react to event-type ids.
//! The ids are shared constants so collaborating components agree on what a
//! "drag ended" or "settled" tick means without depending on each other.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// Pointer went down and started a drag
    pub const DRAG_START: EventType = 1;
    /// Pointer released, drag finished
    pub const DRAG_END: EventType = 3;
    /// A kinetic or animated move came to rest
    pub const SETTLED: EventType = 10;
    /// A programmatic centering move started
    pub const CENTER: EventType = 20;
    /// A programmatic centering move finished or was cancelled
    pub const CENTER_DONE: EventType = 21;
    /// Interaction lock acquired
    pub const LOCK: EventType = 30;
}

/// Transition table for enum-based interaction state machines.
///
/// Implementors return `Some(next_state)` when the event is valid in the
/// current state and `None` when it should be ignored. Callers keep their
/// state unchanged on `None`.
pub trait StateTransitions: Sized {
    fn on_event(&self, event: EventType) -> Option<Self>;
}

//! Command definitions
//!
//! Commands represent intentions to change the stored events.

use crate::domain::{Event, EventId};

// =========================================================================
// CreateEventCommand
// =========================================================================

/// Command to store a new event
///
/// Any id carried by the event is ignored; the store assigns one.
#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub event: Event,
}

impl CreateEventCommand {
    pub fn new(event: Event) -> Self {
        Self { event }
    }
}

// =========================================================================
// UpdateEventCommand
// =========================================================================

/// Command to replace an existing event in full
#[derive(Debug, Clone)]
pub struct UpdateEventCommand {
    /// Id of the event being replaced (taken from the request path)
    pub id: EventId,
    /// Replacement record; its own id is overwritten with `id`
    pub event: Event,
}

impl UpdateEventCommand {
    pub fn new(id: EventId, event: Event) -> Self {
        Self { id, event }
    }
}

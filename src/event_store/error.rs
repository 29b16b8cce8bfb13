//! Event Store Errors
//!
//! Error types for event store operations.

use crate::domain::EventId;

/// Errors that can occur in the event store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventStoreError {
    /// No event stored under this id
    #[error("Event not found: {0}")]
    NotFound(EventId),

    /// A writer panicked while holding the store lock
    #[error("Event store lock poisoned")]
    LockPoisoned,
}

impl EventStoreError {
    /// Check if this error means the event does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, EventStoreError::NotFound(_))
    }
}

//! Event Repository
//!
//! Keyed storage of event records. Every value crossing the store boundary
//! is an owned copy, so callers can never alias what is stored.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::{Event, EventId};

use super::EventStoreError;

/// Storage contract for events
pub trait EventRepository: Send + Sync {
    /// Insert or replace an event.
    ///
    /// An event with id 0 is assigned the next free id. Returns the stored copy.
    fn save(&self, event: Event) -> Result<Event, EventStoreError>;

    /// Load a copy of the event with this id
    fn find_by_id(&self, id: EventId) -> Result<Event, EventStoreError>;

    /// Remove the event with this id
    fn delete(&self, id: EventId) -> Result<(), EventStoreError>;

    /// Copies of all stored events, ordered by id
    fn find_all(&self) -> Result<Vec<Event>, EventStoreError>;
}

/// Repository handle shared between request handlers
pub type SharedEventRepository = Arc<dyn EventRepository>;

#[derive(Debug)]
struct StoreState {
    events: BTreeMap<EventId, Event>,
    next_id: EventId,
}

/// In-memory event store guarded by a reader/writer lock
#[derive(Debug)]
pub struct InMemoryEventRepository {
    state: RwLock<StoreState>,
}

impl InMemoryEventRepository {
    /// Create an empty store; the first assigned id is 1
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                events: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create an empty store wrapped for sharing
    pub fn shared() -> SharedEventRepository {
        Arc::new(Self::new())
    }
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRepository for InMemoryEventRepository {
    fn save(&self, mut event: Event) -> Result<Event, EventStoreError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| EventStoreError::LockPoisoned)?;

        if event.id == 0 {
            event.id = state.next_id;
        }
        // Keep assigned ids clear of explicitly supplied ones
        if event.id >= state.next_id {
            state.next_id = event.id.saturating_add(1);
        }

        let id = event.id;
        state.events.insert(id, event.clone());

        tracing::debug!(event_id = id, "Event saved");

        Ok(event)
    }

    fn find_by_id(&self, id: EventId) -> Result<Event, EventStoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| EventStoreError::LockPoisoned)?;

        state
            .events
            .get(&id)
            .cloned()
            .ok_or(EventStoreError::NotFound(id))
    }

    fn delete(&self, id: EventId) -> Result<(), EventStoreError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| EventStoreError::LockPoisoned)?;

        if state.events.remove(&id).is_none() {
            return Err(EventStoreError::NotFound(id));
        }

        tracing::debug!(event_id = id, "Event deleted");
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<Event>, EventStoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| EventStoreError::LockPoisoned)?;

        Ok(state.events.values().cloned().collect())
    }
}

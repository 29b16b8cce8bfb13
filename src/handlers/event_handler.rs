//! Event Handler
//!
//! Validates, persists and loads events, and computes their summaries.

use crate::domain::{Event, EventId, Summary};
use crate::error::AppError;
use crate::event_store::SharedEventRepository;
use crate::settlement::compute_summary;

use super::{CreateEventCommand, UpdateEventCommand};

/// Handler for event operations
#[derive(Clone)]
pub struct EventHandler {
    repository: SharedEventRepository,
}

impl EventHandler {
    pub fn new(repository: SharedEventRepository) -> Self {
        Self { repository }
    }

    /// Validate and store a new event
    pub fn create(&self, command: CreateEventCommand) -> Result<Event, AppError> {
        let mut event = command.event;
        event.validate()?;
        event.id = 0;

        let saved = self.repository.save(event)?;

        tracing::info!(
            event_id = saved.id,
            participants = saved.participants.len(),
            expenses = saved.expenses.len(),
            "Event created"
        );

        Ok(saved)
    }

    /// Load one event
    pub fn get(&self, id: EventId) -> Result<Event, AppError> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// Load all events, ordered by id
    pub fn list(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.repository.find_all()?)
    }

    /// Replace an existing event
    pub fn update(&self, command: UpdateEventCommand) -> Result<Event, AppError> {
        // Must exist before it can be replaced
        self.repository.find_by_id(command.id)?;

        let mut event = command.event;
        event.validate()?;
        event.id = command.id;

        let saved = self.repository.save(event)?;

        tracing::info!(event_id = saved.id, "Event updated");

        Ok(saved)
    }

    /// Remove an event
    pub fn delete(&self, id: EventId) -> Result<(), AppError> {
        self.repository.delete(id)?;
        tracing::info!(event_id = id, "Event deleted");
        Ok(())
    }

    /// Compute balances and settlements for a stored event
    pub fn summary(&self, id: EventId) -> Result<Summary, AppError> {
        let event = self.repository.find_by_id(id)?;
        Ok(compute_summary(&event))
    }
}

//! Event Store module
//!
//! Storage contract for event records and its in-memory implementation.
//! Callers depend on `EventRepository`, never on the concrete store.

mod error;
mod repository;

pub use error::EventStoreError;
pub use repository::{EventRepository, InMemoryEventRepository, SharedEventRepository};

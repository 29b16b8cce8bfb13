//! Command Handlers module
//!
//! Handlers that sit between the HTTP layer and the event store.
//! They validate incoming records and run the settlement calculation.

mod commands;
mod event_handler;


pub use commands::*;
pub use event_handler::EventHandler;

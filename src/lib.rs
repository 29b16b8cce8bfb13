//! Splitty Library
//!
//! Shared group expense tracking with greedy debt settlement.
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod config;
pub mod domain;
pub mod event_store;
pub mod handlers;
pub mod settlement;

mod error;

pub use config::Config;
pub use error::{AppError, ErrorResponse};
pub use domain::{DomainError, Event, Money, ParticipantBalance, Settlement, Summary};
pub use settlement::{compute_summary, resolve_settlements};

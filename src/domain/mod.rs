//! Domain module
//!
//! Event records, derived settlement values and the money primitive.

pub mod error;
pub mod model;
pub mod money;

pub use error::DomainError;
pub use model::{
    Event, EventId, Expense, Participant, ParticipantBalance, ParticipantId, Payment, Settlement,
    Summary,
};
pub use money::Money;

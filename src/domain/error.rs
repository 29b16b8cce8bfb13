//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

use super::model::ParticipantId;

/// Validation errors for event records.
///
/// The settlement calculation never fails; these errors are raised by the
/// layer that accepts events for storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Event name is empty or whitespace
    #[error("Event name is required")]
    MissingEventName,

    /// Two participants share an id
    #[error("Duplicate participant id: {id}")]
    DuplicateParticipant { id: ParticipantId },

    /// A payment carries a negative amount
    #[error("Negative payment by participant {participant_id} in expense {expense_id}")]
    NegativePayment {
        expense_id: i64,
        participant_id: ParticipantId,
    },

    /// An expense declares a negative total
    #[error("Negative total amount in expense {expense_id}")]
    NegativeExpenseTotal { expense_id: i64 },

    /// A payment or declared total exceeds the accepted maximum
    #[error("Amount in expense {expense_id} exceeds the maximum of 1 trillion")]
    AmountTooLarge { expense_id: i64 },
}

impl DomainError {
    /// Short machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingEventName => "missing_event_name",
            Self::DuplicateParticipant { .. } => "duplicate_participant",
            Self::NegativePayment { .. } => "negative_payment",
            Self::NegativeExpenseTotal { .. } => "negative_expense_total",
            Self::AmountTooLarge { .. } => "amount_too_large",
        }
    }

    /// Check if the request itself is malformed (as opposed to breaking a business rule)
    pub fn is_malformed_request(&self) -> bool {
        matches!(self, Self::MissingEventName)
    }
}

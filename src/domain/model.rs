//! Event model
//!
//! Stored records (events with their participants and expenses) and the
//! values derived from them (balances, settlements, summaries).
//! Field names on the wire are camelCase.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{DomainError, Money};

/// Participant identifier, unique within one event
pub type ParticipantId = i64;

/// Event identifier; 0 means "not assigned yet"
pub type EventId = i64;

/// Person taking part in an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// One contribution toward an expense
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Payment {
    pub participant_id: ParticipantId,
    pub amount: Money,
}

impl Payment {
    pub fn new(participant_id: ParticipantId, amount: impl Into<Money>) -> Self {
        Self {
            participant_id,
            amount: amount.into(),
        }
    }
}

/// Group expense
///
/// A zero `total_amount` means the cost is the sum of its payments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub category: String,
    pub total_amount: Money,
    pub payments: Vec<Payment>,
    pub shared_with: Vec<ParticipantId>,
}

impl Expense {
    pub fn new(id: i64, category: impl Into<String>, total_amount: impl Into<Money>) -> Self {
        Self {
            id,
            category: category.into(),
            total_amount: total_amount.into(),
            payments: Vec::new(),
            shared_with: Vec::new(),
        }
    }

    pub fn with_payment(mut self, participant_id: ParticipantId, amount: impl Into<Money>) -> Self {
        self.payments.push(Payment::new(participant_id, amount));
        self
    }

    pub fn shared_with(mut self, participants: impl IntoIterator<Item = ParticipantId>) -> Self {
        self.shared_with.extend(participants);
        self
    }

    /// Whether the participant shares the cost of this expense
    pub fn is_shared_with(&self, participant_id: ParticipantId) -> bool {
        self.shared_with.contains(&participant_id)
    }
}

/// Event grouping participants and their shared expenses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub participants: Vec<Participant>,
    pub expenses: Vec<Expense>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    pub fn with_expense(mut self, expense: Expense) -> Self {
        self.expenses.push(expense);
        self
    }

    /// Check the record before it is accepted for storage.
    ///
    /// The settlement calculation itself accepts any event; these rules
    /// guard what gets stored through the API. Amounts are capped at
    /// `Money::MAX_AMOUNT`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingEventName);
        }

        let mut seen = HashSet::with_capacity(self.participants.len());
        for participant in &self.participants {
            if !seen.insert(participant.id) {
                return Err(DomainError::DuplicateParticipant { id: participant.id });
            }
        }

        for expense in &self.expenses {
            if expense.total_amount < Money::ZERO {
                return Err(DomainError::NegativeExpenseTotal {
                    expense_id: expense.id,
                });
            }
            if expense.total_amount > Money::MAX_AMOUNT {
                return Err(DomainError::AmountTooLarge {
                    expense_id: expense.id,
                });
            }
            for payment in &expense.payments {
                if payment.amount < Money::ZERO {
                    return Err(DomainError::NegativePayment {
                        expense_id: expense.id,
                        participant_id: payment.participant_id,
                    });
                }
                if payment.amount > Money::MAX_AMOUNT {
                    return Err(DomainError::AmountTooLarge {
                        expense_id: expense.id,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Paid / owed / net position of one participant
///
/// Positive `balance` is a creditor, negative a debtor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantBalance {
    pub id: ParticipantId,
    pub name: String,
    pub paid: Money,
    pub should_pay: Money,
    pub balance: Money,
}

/// Transfer of `amount` from one participant to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub from: ParticipantId,
    pub from_name: String,
    pub to: ParticipantId,
    pub to_name: String,
    pub amount: Money,
}

/// Totals, per-participant balances and the transfers that settle them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_amount: Money,
    pub per_person_amount: Money,
    #[serde(rename = "paidByPerson")]
    pub balances: Vec<ParticipantBalance>,
    pub settlements: Vec<Settlement>,
}

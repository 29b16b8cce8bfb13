//! Balance Calculator
//!
//! Turns an event into totals and one signed balance per participant.

use crate::domain::{Event, Expense, Money, Participant, ParticipantBalance, Summary};

use super::resolve_settlements;

/// Expense paired with the cost that is actually split
struct PricedExpense<'a> {
    expense: &'a Expense,
    effective_total: Money,
}

impl<'a> PricedExpense<'a> {
    /// A declared total of exactly zero means "use the sum of payments";
    /// any other declared total is the true cost, even if payments disagree.
    fn new(expense: &'a Expense) -> Self {
        let payments_sum: Money = expense.payments.iter().map(|p| p.amount).sum();
        let effective_total = if expense.total_amount.is_zero() {
            payments_sum
        } else {
            expense.total_amount
        };

        Self {
            expense,
            effective_total,
        }
    }

    /// Share owed by one member of the shared-with set
    ///
    /// An empty set divides by one; nobody is in it, so nobody owes.
    fn share(&self) -> Money {
        self.effective_total.split(self.expense.shared_with.len())
    }
}

/// Compute totals, balances and settlements for an event.
///
/// Every running sum is rounded to two decimals after each addition.
/// Payments and shared-with entries naming unknown participants have no effect.
pub fn compute_summary(event: &Event) -> Summary {
    let priced: Vec<PricedExpense<'_>> = event.expenses.iter().map(PricedExpense::new).collect();

    let total_amount: Money = priced.iter().map(|p| p.effective_total).sum();

    let per_person_amount = if event.participants.is_empty() {
        Money::ZERO
    } else {
        total_amount.split(event.participants.len())
    };

    let balances: Vec<ParticipantBalance> = event
        .participants
        .iter()
        .map(|participant| participant_balance(participant, &priced))
        .collect();

    let settlements = resolve_settlements(&balances);

    tracing::debug!(
        event_id = event.id,
        participants = event.participants.len(),
        expenses = event.expenses.len(),
        total = %total_amount,
        settlements = settlements.len(),
        "Computed event summary"
    );

    Summary {
        total_amount,
        per_person_amount,
        balances,
        settlements,
    }
}

fn participant_balance(participant: &Participant, priced: &[PricedExpense<'_>]) -> ParticipantBalance {
    let paid: Money = priced
        .iter()
        .flat_map(|p| p.expense.payments.iter())
        .filter(|payment| payment.participant_id == participant.id)
        .map(|payment| payment.amount)
        .sum();

    let should_pay: Money = priced
        .iter()
        .filter(|p| p.expense.is_shared_with(participant.id))
        .map(PricedExpense::share)
        .sum();

    ParticipantBalance {
        id: participant.id,
        name: participant.name.clone(),
        paid,
        should_pay,
        balance: paid - should_pay,
    }
}

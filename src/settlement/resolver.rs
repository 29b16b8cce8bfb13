//! Settlement Resolver
//!
//! Greedy debt netting: the largest debtor pays the largest creditor until
//! one of them is square, then the next in line takes over.

use crate::domain::{Money, ParticipantBalance, Settlement};

/// Participant taking part in netting, with what is still left to settle
struct Position<'a> {
    balance: &'a ParticipantBalance,
    remaining: Money,
}

impl<'a> Position<'a> {
    fn new(balance: &'a ParticipantBalance) -> Self {
        Self {
            balance,
            remaining: balance.balance,
        }
    }
}

/// Produce transfers (debtor -> creditor) that bring every balance to zero.
///
/// Balances within 0.02 of zero are treated as settled. Debtors are matched
/// most-negative first, creditors largest first; equal balances keep their
/// input order. Produces at most `debtors + creditors - 1` transfers.
/// A residue left over from unbalanced input is left unresolved.
pub fn resolve_settlements(balances: &[ParticipantBalance]) -> Vec<Settlement> {
    let (settlements, unresolved) = net_balances(balances);

    if unresolved > 0 {
        tracing::warn!(
            unresolved,
            "Balances do not net to zero, leaving residue unresolved"
        );
    }

    settlements
}

/// Greedy netting; also returns how many participants are left holding more
/// than the tolerance.
fn net_balances(balances: &[ParticipantBalance]) -> (Vec<Settlement>, usize) {
    let tolerance = Money::TOLERANCE;

    let (mut debtors, mut creditors): (Vec<Position<'_>>, Vec<Position<'_>>) = balances
        .iter()
        .filter(|b| !b.balance.is_negligible())
        .map(Position::new)
        .partition(|p| p.remaining < Money::ZERO);

    // `sort_by` is stable, ties keep input order
    debtors.sort_by(|a, b| a.remaining.cmp(&b.remaining));
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut settlements = Vec::new();
    let mut debt_index = 0;
    let mut credit_index = 0;

    while debt_index < debtors.len() && credit_index < creditors.len() {
        let debtor = &mut debtors[debt_index];
        let creditor = &mut creditors[credit_index];

        let amount = debtor.remaining.abs().min(creditor.remaining).round();

        if amount > tolerance {
            settlements.push(Settlement {
                from: debtor.balance.id,
                from_name: debtor.balance.name.clone(),
                to: creditor.balance.id,
                to_name: creditor.balance.name.clone(),
                amount,
            });
        }

        debtor.remaining += amount;
        creditor.remaining -= amount;

        if debtor.remaining.abs() < tolerance {
            debt_index += 1;
        }
        // Creditors only move toward zero from above, so no abs here
        if creditor.remaining < tolerance {
            credit_index += 1;
        }
    }

    // A pointer can stop on a remainder of exactly 0.02, which is settled
    let unresolved = debtors[debt_index..]
        .iter()
        .chain(&creditors[credit_index..])
        .filter(|p| !p.remaining.is_negligible())
        .count();

    (settlements, unresolved)
}

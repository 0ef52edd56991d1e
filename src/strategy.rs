//! Repayment strategies and the ordering they impose on active debts.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::Debt;

/// Which debt receives extra payments first.
///
/// A closed enum rather than a trait object: the two strategies are the whole
/// product surface, and a closed comparator keeps the ordering exhaustive and
/// testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Highest interest rate first; ties go to the smaller balance so one of
    /// two equally expensive debts closes sooner.
    Avalanche,
    /// Smallest balance first; ties go to the higher rate.
    Snowball,
}

impl Strategy {
    /// Total order over debts: the final tie-break on id means no two distinct
    /// debts ever compare equal, so repeated sorts agree.
    pub fn compare(&self, a: &Debt, b: &Debt) -> Ordering {
        let primary = match self {
            Strategy::Avalanche => b
                .interest_rate
                .cmp(&a.interest_rate)
                .then(a.current_balance.cmp(&b.current_balance)),
            Strategy::Snowball => a
                .current_balance
                .cmp(&b.current_balance)
                .then(b.interest_rate.cmp(&a.interest_rate)),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// Active debts sorted into the strategy's payoff priority order.
///
/// Inputs are cloned, never mutated; paid-off debts are dropped.
pub fn order_debts(debts: &[Debt], strategy: Strategy) -> Vec<Debt> {
    let mut ordered: Vec<Debt> = debts.iter().filter(|d| d.is_active()).cloned().collect();
    ordered.sort_by(|a, b| strategy.compare(a, b));
    ordered
}

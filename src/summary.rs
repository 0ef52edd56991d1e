//! Portfolio-level aggregation over a set of debts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::Debt;
use crate::money::{progress_percent, Money};
use crate::strategy::Strategy;

/// Derived view of a debt portfolio; computed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_balance: Money,
    pub total_original_balance: Money,
    pub total_minimum_payment: Money,
    /// Number of active debts included in the totals.
    pub debt_count: usize,
    /// Whole-number percentage of the original total already paid off;
    /// 0 for an empty portfolio.
    pub progress_percent: Decimal,
    /// The active debt with the highest rate, or `None` when there are no
    /// active debts. Ties resolve the same way Avalanche ordering does.
    pub highest_rate_debt: Option<Debt>,
}

impl PortfolioSummary {
    fn empty() -> Self {
        PortfolioSummary {
            total_balance: Decimal::ZERO,
            total_original_balance: Decimal::ZERO,
            total_minimum_payment: Decimal::ZERO,
            debt_count: 0,
            progress_percent: Decimal::ZERO,
            highest_rate_debt: None,
        }
    }
}

/// Summarizes the active debts of a portfolio.
///
/// Paid-off debts are ignored entirely; with no active debts every field is
/// zero and `highest_rate_debt` is `None`.
pub fn summarize(debts: &[Debt]) -> PortfolioSummary {
    let active: Vec<&Debt> = debts.iter().filter(|d| d.is_active()).collect();
    if active.is_empty() {
        return PortfolioSummary::empty();
    }

    let total_balance: Money = active.iter().map(|d| d.current_balance).sum();
    let total_original_balance: Money = active.iter().map(|d| d.original_balance).sum();
    let total_minimum_payment: Money = active.iter().map(|d| d.minimum_payment).sum();

    // First under Avalanche order = highest rate, ties to the smaller
    // balance, then id. Keeps the pick consistent with strategy ordering.
    let highest_rate_debt = active
        .iter()
        .min_by(|a, b| Strategy::Avalanche.compare(a, b))
        .map(|d| (*d).clone());

    PortfolioSummary {
        total_balance,
        total_original_balance,
        total_minimum_payment,
        debt_count: active.len(),
        progress_percent: progress_percent(total_original_balance, total_balance),
        highest_rate_debt,
    }
}

//! Domain model: debts and the payments applied against them.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::{Money, Rate};

/// Display grouping for a debt; never used in calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtCategory {
    CreditCard,
    AutoLoan,
    StudentLoan,
    PersonalLoan,
    Other,
}

/// Lifecycle of a debt. The only transition is `Active` -> `PaidOff`, taken
/// exactly when the balance reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtStatus {
    Active,
    PaidOff,
}

/// One liability: a balance, its pricing, and its contractual minimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Opaque unique identifier.
    pub id: String,
    /// Display label; not used in calculations.
    pub name: String,
    pub category: DebtCategory,
    /// Balance at creation; never mutated afterwards.
    pub original_balance: Money,
    /// Remaining balance; only ever reduced by payments.
    pub current_balance: Money,
    /// Annual nominal rate as a fraction (0.2499 for 24.99% APR).
    pub interest_rate: Rate,
    /// Contractual minimum due per month; reset to zero on payoff.
    pub minimum_payment: Money,
    /// Recurring day-of-month the payment is due, in [1, 31].
    pub due_day: u32,
    pub status: DebtStatus,
    /// Set exactly once, when the status transitions to `PaidOff`.
    pub paid_off_date: Option<DateTime<Utc>>,
}

impl Debt {
    pub fn is_active(&self) -> bool {
        self.status == DebtStatus::Active
    }

    /// First due date strictly after `after`, clamping the due day to the end
    /// of short months (a due day of 31 falls on Feb 28 or 29).
    pub fn next_due_date(&self, after: NaiveDate) -> NaiveDate {
        let candidate = clamped_date(after.year(), after.month(), self.due_day);
        if candidate > after {
            return candidate;
        }
        let next = after
            .checked_add_months(Months::new(1))
            .unwrap_or(after);
        clamped_date(next.year(), next.month(), self.due_day)
    }
}

/// Immutable record of one applied payment. `principal_paid + interest_paid`
/// always equals `amount` exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// The debt this payment was applied to.
    pub debt_id: String,
    /// Total amount consumed by the debt (overpayment change is excluded).
    pub amount: Money,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub payment_date: DateTime<Utc>,
}

/// Builds a date in the given month, pulling the day back until it exists.
/// `day` is clamped to [1, 31] first, so the loop always lands on a valid day.
fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let mut day = day.clamp(1, 31);
    loop {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return date;
        }
        day -= 1;
    }
}

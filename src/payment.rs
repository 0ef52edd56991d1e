//! Recording a real payment against a single debt.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::apply_period;
use crate::error::{EngineError, Result};
use crate::model::{Debt, DebtStatus, Payment};
use crate::money::Money;

/// The two values a recorded payment produces. The caller must persist both
/// as one atomic write; committing only one of them leaves the balance and
/// the payment history disagreeing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub updated_debt: Debt,
    pub payment: Payment,
}

/// Applies one payment to a debt and returns the updated debt plus an
/// immutable payment record.
///
/// The split between interest and principal follows the one-period
/// amortization model. When the balance lands on zero the returned debt is
/// `PaidOff` with `paid_off_date = now` and its minimum payment reset to
/// zero, since a closed account has no future minimum due. `now` is supplied
/// by the caller so tests can pin the clock.
///
/// The recorded `Payment.amount` is the portion the debt consumed; if
/// `amount` overshoots `balance + accrued interest` the excess is simply not
/// part of the record, keeping `principal_paid + interest_paid == amount`
/// exact.
///
/// # Errors
///
/// Rejects a non-positive `amount`, a debt that is not `Active`, and the
/// field-level validation failures of the amortization step.
pub fn record_payment(debt: &Debt, amount: Money, now: DateTime<Utc>) -> Result<PaymentReceipt> {
    if amount <= Decimal::ZERO {
        return Err(EngineError::NonPositiveAmount { amount });
    }
    if !debt.is_active() {
        return Err(EngineError::DebtNotActive {
            debt_id: debt.id.clone(),
        });
    }

    let split = apply_period(debt.current_balance, debt.interest_rate, amount)
        .map_err(|e| e.on_debt(&debt.id))?;

    let mut updated_debt = debt.clone();
    updated_debt.current_balance = split.new_balance;
    if split.new_balance == Decimal::ZERO {
        updated_debt.status = DebtStatus::PaidOff;
        updated_debt.paid_off_date = Some(now);
        updated_debt.minimum_payment = Decimal::ZERO;
    }

    let payment = Payment {
        debt_id: debt.id.clone(),
        amount: split.amount_applied(),
        principal_paid: split.principal_portion,
        interest_paid: split.interest_portion,
        payment_date: now,
    };

    Ok(PaymentReceipt {
        updated_debt,
        payment,
    })
}

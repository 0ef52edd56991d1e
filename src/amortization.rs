//! One-period amortization: splitting a payment into interest and principal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::money::{accrued_interest, Money, Rate};

/// Outcome of applying one payment to one balance for one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentSplit {
    /// Interest covered by the payment, never more than one month's accrual.
    pub interest_portion: Money,
    /// Balance reduction, never more than the balance itself.
    pub principal_portion: Money,
    /// Remaining balance after the payment; never negative.
    pub new_balance: Money,
}

impl PaymentSplit {
    /// The part of the payment the debt actually consumed. Less than the
    /// payment only when it overshot the remaining balance plus interest.
    pub fn amount_applied(&self) -> Money {
        self.interest_portion + self.principal_portion
    }
}

/// Splits `payment` into interest and principal for one month.
///
/// Interest accrues as `balance * annual_rate / 12`, rounded to the minor
/// unit, and is paid before any principal. A payment smaller than the accrual
/// pays interest only; the shortfall is not capitalized onto the balance. A
/// payment larger than `balance + accrual` zeroes the balance and leaves the
/// excess unconsumed.
///
/// Pure function: no I/O, deterministic for the same inputs.
///
/// # Errors
///
/// Returns a validation error when `balance`, `annual_rate`, or `payment` is
/// negative.
pub fn apply_period(balance: Money, annual_rate: Rate, payment: Money) -> Result<PaymentSplit> {
    if balance < Decimal::ZERO {
        return Err(EngineError::NegativeBalance { balance });
    }
    if annual_rate < Decimal::ZERO {
        return Err(EngineError::NegativeRate { rate: annual_rate });
    }
    if payment < Decimal::ZERO {
        return Err(EngineError::NegativePayment { payment });
    }

    let accrued = accrued_interest(balance, annual_rate);
    let interest_portion = accrued.min(payment);
    let principal_portion = (payment - interest_portion).min(balance);

    Ok(PaymentSplit {
        interest_portion,
        principal_portion,
        new_balance: balance - principal_portion,
    })
}

//! Money and rate helpers shared by every calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A monetary amount in major units with two decimal places (e.g. 1234.56).
pub type Money = Decimal;

/// An annual nominal interest rate as a fraction (e.g. 0.2499 for 24.99% APR).
pub type Rate = Decimal;

/// Rounds a monetary value to the currency's minor unit.
///
/// `round_dp` rounds half-to-even; this is the single rounding rule of the
/// whole crate, applied once per interest accrual so that a payment of exactly
/// `balance + accrued interest` lands on zero instead of drifting by a cent.
pub fn round_money(value: Decimal) -> Money {
    value.round_dp(2)
}

/// Converts an annual nominal rate to the simple monthly rate used by the
/// engine's one-period model (`annual / 12`, no compounding).
pub fn monthly_rate(annual_rate: Rate) -> Rate {
    annual_rate / dec!(12)
}

/// Interest owed on a balance for one month, rounded to the minor unit.
pub fn accrued_interest(balance: Money, annual_rate: Rate) -> Money {
    round_money(balance * monthly_rate(annual_rate))
}

/// Percentage of the original total already paid off, as a whole number.
///
/// Returns 0 when `total_original` is zero, which covers both the empty
/// portfolio and a portfolio of zero-balance debts without dividing by zero.
pub fn progress_percent(total_original: Money, total_current: Money) -> Decimal {
    if total_original <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (dec!(100) * (total_original - total_current) / total_original).round_dp(0)
}

/// Numeric percent view of a fractional rate (0.2499 -> 24.99).
///
/// Display formatting with a locale and `%` sign belongs to the presentation
/// layer; this only moves the decimal point.
pub fn rate_as_percent(rate: Rate) -> Decimal {
    (rate * dec!(100)).round_dp(2)
}

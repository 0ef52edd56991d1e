//! Month-by-month payoff projection under a repayment strategy.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::apply_period;
use crate::error::{EngineError, Result};
use crate::model::Debt;
use crate::money::Money;
use crate::strategy::Strategy;

/// Default simulation ceiling: 50 years of monthly periods. Guarantees
/// termination even for a debt whose minimum never covers its interest.
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// One simulated month of the payoff schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// 1-based month number within the simulation.
    pub month: u32,
    /// Calendar date of the period, `start_date` advanced by `month` months.
    pub date: NaiveDate,
    /// Total paid across all debts this month.
    pub amount_paid: Money,
    pub interest_paid: Money,
    pub principal_paid: Money,
    /// Portfolio balance remaining after this month.
    pub ending_balance: Money,
    /// Ids of debts that reached zero during this month.
    pub debts_paid_off: Vec<String>,
}

/// Result of a forward projection. `months_to_payoff` and `payoff_date` are
/// `None` when the plan did not converge within `max_months`; the schedule up
/// to the ceiling is still returned so the caller can show where it stalled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffProjection {
    pub schedule: Vec<PeriodResult>,
    pub total_interest_paid: Money,
    pub months_to_payoff: Option<u32>,
    pub payoff_date: Option<NaiveDate>,
}

/// Simulates paying down `debts` month by month until every balance is zero
/// or `max_months` is reached.
///
/// Each month the remaining debts are re-ordered by `strategy` (the priority
/// target shifts as balances change), then every debt pays its own minimum.
/// The top-priority debt additionally receives the whole `extra_monthly`
/// amount, and whatever a debt cannot consume in its final payoff month rolls
/// forward to the next debt in priority order within the same month.
///
/// The input slice is never mutated; paid-off debts are skipped from the
/// start, and zero active debts is an immediate payoff in zero months.
///
/// # Errors
///
/// Fails fast, before simulating anything, when `extra_monthly` is negative,
/// `max_months` is zero, or any active debt carries a negative balance, rate,
/// or minimum payment.
pub fn project(
    debts: &[Debt],
    strategy: Strategy,
    extra_monthly: Money,
    max_months: u32,
    start_date: NaiveDate,
) -> Result<PayoffProjection> {
    if extra_monthly < Decimal::ZERO {
        return Err(EngineError::NegativeExtraPayment {
            extra: extra_monthly,
        });
    }
    if max_months == 0 {
        return Err(EngineError::InvalidMaxMonths);
    }
    for debt in debts.iter().filter(|d| d.is_active()) {
        validate_debt(debt)?;
    }

    let mut working: Vec<Debt> = debts
        .iter()
        .filter(|d| d.is_active() && d.current_balance > Decimal::ZERO)
        .cloned()
        .collect();

    if working.is_empty() {
        return Ok(PayoffProjection {
            schedule: Vec::new(),
            total_interest_paid: Decimal::ZERO,
            months_to_payoff: Some(0),
            payoff_date: Some(start_date),
        });
    }

    let mut schedule = Vec::new();
    let mut total_interest_paid = Decimal::ZERO;
    let mut date = start_date;

    for month in 1..=max_months {
        // Saturates at chrono's date ceiling; unreachable for sane inputs.
        date = date.checked_add_months(Months::new(1)).unwrap_or(date);
        working.sort_by(|a, b| strategy.compare(a, b));

        let mut carry = extra_monthly;
        let mut interest_paid = Decimal::ZERO;
        let mut principal_paid = Decimal::ZERO;
        let mut debts_paid_off = Vec::new();

        for debt in working.iter_mut() {
            let budget = debt.minimum_payment + carry;
            let split = apply_period(debt.current_balance, debt.interest_rate, budget)?;
            carry = budget - split.amount_applied();
            debt.current_balance = split.new_balance;
            interest_paid += split.interest_portion;
            principal_paid += split.principal_portion;
            if split.new_balance == Decimal::ZERO {
                debts_paid_off.push(debt.id.clone());
            }
        }

        working.retain(|d| d.current_balance > Decimal::ZERO);
        total_interest_paid += interest_paid;

        let ending_balance = working.iter().map(|d| d.current_balance).sum();
        schedule.push(PeriodResult {
            month,
            date,
            amount_paid: interest_paid + principal_paid,
            interest_paid,
            principal_paid,
            ending_balance,
            debts_paid_off,
        });

        if working.is_empty() {
            return Ok(PayoffProjection {
                schedule,
                total_interest_paid,
                months_to_payoff: Some(month),
                payoff_date: Some(date),
            });
        }
    }

    // Ceiling reached with balances left: a non-convergent plan, reported as
    // such rather than truncated into a false payoff.
    Ok(PayoffProjection {
        schedule,
        total_interest_paid,
        months_to_payoff: None,
        payoff_date: None,
    })
}

fn validate_debt(debt: &Debt) -> Result<()> {
    if debt.current_balance < Decimal::ZERO {
        return Err(EngineError::NegativeBalance {
            balance: debt.current_balance,
        }
        .on_debt(&debt.id));
    }
    if debt.interest_rate < Decimal::ZERO {
        return Err(EngineError::NegativeRate {
            rate: debt.interest_rate,
        }
        .on_debt(&debt.id));
    }
    if debt.minimum_payment < Decimal::ZERO {
        return Err(EngineError::NegativePayment {
            payment: debt.minimum_payment,
        }
        .on_debt(&debt.id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DebtCategory, DebtStatus};
    use rust_decimal_macros::dec;

    fn debt(id: &str, balance: Decimal, rate: Decimal, minimum: Decimal) -> Debt {
        Debt {
            id: id.to_string(),
            name: id.to_string(),
            category: DebtCategory::CreditCard,
            original_balance: balance,
            current_balance: balance,
            interest_rate: rate,
            minimum_payment: minimum,
            due_day: 1,
            status: DebtStatus::Active,
            paid_off_date: None,
        }
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn zero_debts_is_immediate_payoff() {
        let projection = project(&[], Strategy::Avalanche, dec!(100), 600, start()).unwrap();
        assert_eq!(projection.months_to_payoff, Some(0));
        assert_eq!(projection.payoff_date, Some(start()));
        assert_eq!(projection.total_interest_paid, dec!(0));
        assert!(projection.schedule.is_empty());
    }

    #[test]
    fn avalanche_prioritizes_highest_rate_then_rolls_budget_forward() {
        let debts = [
            debt("A", dec!(500), dec!(0.25), dec!(50)),
            debt("B", dec!(2000), dec!(0.10), dec!(80)),
        ];
        let projection =
            project(&debts, Strategy::Avalanche, dec!(100), 600, start()).unwrap();

        // A (25% APR) absorbs the extra 100/month and closes in month 4; its
        // final month needs only 73.98 of the 150 budget, so 76.02 rolls onto
        // B in that same month. B then continues on 80 + 100 per month.
        assert_eq!(projection.schedule[3].debts_paid_off, vec!["A".to_string()]);
        assert_eq!(projection.months_to_payoff, Some(14));
        assert_eq!(projection.schedule.len(), 14);
        assert_eq!(
            projection.schedule[13].debts_paid_off,
            vec!["B".to_string()]
        );
        assert_eq!(projection.total_interest_paid, dec!(162.74));
        assert_eq!(
            projection.payoff_date,
            Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
        );

        // Month 1: A pays 150 (10.42 interest), B pays its minimum 80
        // (16.67 interest).
        let first = &projection.schedule[0];
        assert_eq!(first.amount_paid, dec!(230));
        assert_eq!(first.interest_paid, dec!(27.09));
        assert_eq!(first.ending_balance, dec!(2297.09));

        // Inputs were not mutated.
        assert_eq!(debts[0].current_balance, dec!(500));
    }

    #[test]
    fn projection_is_idempotent_for_identical_inputs() {
        let debts = [
            debt("A", dec!(750), dec!(0.18), dec!(35)),
            debt("B", dec!(1200), dec!(0.07), dec!(60)),
        ];
        let first = project(&debts, Strategy::Snowball, dec!(40), 600, start()).unwrap();
        let second = project(&debts, Strategy::Snowball, dec!(40), 600, start()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn minimum_below_interest_never_converges() {
        // 10000 * 0.30 / 12 = 250 of monthly interest against a 50 minimum.
        let debts = [debt("stuck", dec!(10000), dec!(0.30), dec!(50))];
        let projection = project(&debts, Strategy::Avalanche, dec!(0), 120, start()).unwrap();
        assert_eq!(projection.months_to_payoff, None);
        assert_eq!(projection.payoff_date, None);
        assert_eq!(projection.schedule.len(), 120);
        assert_eq!(projection.total_interest_paid, dec!(6000));
        // Balance never moved.
        assert_eq!(projection.schedule[119].ending_balance, dec!(10000));
        assert_eq!(projection.schedule[119].principal_paid, dec!(0));
    }

    #[test]
    fn exact_final_minimum_closes_without_an_extra_month() {
        // Rate 0: four payments of 25 clear 100 on the dot.
        let debts = [debt("flat", dec!(100), dec!(0), dec!(25))];
        let projection = project(&debts, Strategy::Snowball, dec!(0), 600, start()).unwrap();
        assert_eq!(projection.months_to_payoff, Some(4));
        assert_eq!(projection.total_interest_paid, dec!(0));
        assert_eq!(projection.schedule[3].ending_balance, dec!(0));
    }

    #[test]
    fn extra_alone_can_carry_a_zero_minimum_debt() {
        let debts = [debt("nomin", dec!(100), dec!(0), dec!(0))];
        let projection = project(&debts, Strategy::Avalanche, dec!(50), 600, start()).unwrap();
        assert_eq!(projection.months_to_payoff, Some(2));
    }

    #[test]
    fn priority_target_shifts_as_balances_change() {
        // Snowball: "small" closes first even though "big" is pricier; the
        // extra then moves to "big".
        let debts = [
            debt("small", dec!(120), dec!(0), dec!(20)),
            debt("big", dec!(1000), dec!(0), dec!(20)),
        ];
        let projection = project(&debts, Strategy::Snowball, dec!(40), 600, start()).unwrap();
        assert_eq!(
            projection.schedule[1].debts_paid_off,
            vec!["small".to_string()]
        );
        // Month 2 budget: small consumes 60 of its 60, big gets 20 + nothing;
        // from month 3 big gets 20 + 40.
        assert_eq!(projection.months_to_payoff, Some(18));
    }

    #[test]
    fn rejects_invalid_inputs_before_simulating() {
        let good = debt("ok", dec!(100), dec!(0.10), dec!(10));
        assert_eq!(
            project(&[good.clone()], Strategy::Avalanche, dec!(-1), 600, start()),
            Err(EngineError::NegativeExtraPayment { extra: dec!(-1) })
        );
        assert_eq!(
            project(&[good.clone()], Strategy::Avalanche, dec!(0), 0, start()),
            Err(EngineError::InvalidMaxMonths)
        );

        let mut bad_rate = debt("bad", dec!(100), dec!(0.10), dec!(10));
        bad_rate.interest_rate = dec!(-0.05);
        let err = project(&[bad_rate], Strategy::Avalanche, dec!(0), 600, start()).unwrap_err();
        assert_eq!(
            err,
            EngineError::NegativeRate { rate: dec!(-0.05) }.on_debt("bad")
        );
    }
}

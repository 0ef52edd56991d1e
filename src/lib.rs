//! `debt_payoff` is a Rust library for planning the payoff of a set of debts.
//!
//! It turns a portfolio of balances, interest rates, and minimum payments into:
//! - **Portfolio summaries**: total balance, overall progress, and the most
//!   expensive debt to target next.
//! - **Payoff projections**: a month-by-month schedule, total interest paid,
//!   and a debt-free date under one of two repayment strategies:
//!   - **Avalanche**: extra payments go to the highest interest rate first.
//!   - **Snowball**: extra payments go to the smallest balance first.
//! - **Payment records**: a single real payment split into interest and
//!   principal, with the debt's new balance and paid-off transition.
//!
//! ## Usage
//!
//! Add `debt_payoff` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! debt_payoff = "0.2.0"
//! chrono = "0.4"
//! rust_decimal_macros = "1.39.0"
//! ```
//!
//! Then project a payoff plan with the `project` function:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use debt_payoff::{
//!     project, Debt, DebtCategory, DebtStatus, Strategy, DEFAULT_MAX_MONTHS,
//! };
//! use rust_decimal_macros::dec;
//!
//! fn main() {
//!     let card = Debt {
//!         id: "card".to_string(),
//!         name: "Credit card".to_string(),
//!         category: DebtCategory::CreditCard,
//!         original_balance: dec!(500),
//!         current_balance: dec!(500),
//!         interest_rate: dec!(0.25),
//!         minimum_payment: dec!(50),
//!         due_day: 15,
//!         status: DebtStatus::Active,
//!         paid_off_date: None,
//!     };
//!     let car = Debt {
//!         id: "car".to_string(),
//!         name: "Car loan".to_string(),
//!         category: DebtCategory::AutoLoan,
//!         original_balance: dec!(2000),
//!         current_balance: dec!(2000),
//!         interest_rate: dec!(0.10),
//!         minimum_payment: dec!(80),
//!         due_day: 1,
//!         status: DebtStatus::Active,
//!         paid_off_date: None,
//!     };
//!
//!     let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//!     match project(&[card, car], Strategy::Avalanche, dec!(100), DEFAULT_MAX_MONTHS, start) {
//!         Ok(plan) => {
//!             println!("Months to payoff: {:?}", plan.months_to_payoff);
//!             println!("Total interest:   {:.2}", plan.total_interest_paid);
//!             println!("Debt-free date:   {:?}", plan.payoff_date);
//!         }
//!         Err(e) => {
//!             eprintln!("Error projecting payoff: {}", e);
//!         }
//!     }
//! }
//! ```
//!
//! All calculations are pure functions over `rust_decimal::Decimal` values:
//! inputs are never mutated, clocks are injected, and calling the same
//! function twice with the same arguments returns the same result.

pub mod amortization;
pub mod error;
pub mod model;
pub mod money;
pub mod payment;
pub mod projection;
pub mod strategy;
pub mod summary;

pub use amortization::{apply_period, PaymentSplit};
pub use error::{EngineError, Result};
pub use model::{Debt, DebtCategory, DebtStatus, Payment};
pub use money::{Money, Rate};
pub use payment::{record_payment, PaymentReceipt};
pub use projection::{project, PayoffProjection, PeriodResult, DEFAULT_MAX_MONTHS};
pub use strategy::{order_debts, Strategy};
pub use summary::{summarize, PortfolioSummary};

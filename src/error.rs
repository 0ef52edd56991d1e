//! Typed errors for the public API.
//!
//! Every variant carries the offending value (and the debt id where one is
//! known) so a caller can render a message naming the rejected field instead
//! of a generic failure.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("payment amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Decimal },

    #[error("balance cannot be negative, got {balance}")]
    NegativeBalance { balance: Decimal },

    #[error("interest rate cannot be negative, got {rate}")]
    NegativeRate { rate: Decimal },

    #[error("payment cannot be negative, got {payment}")]
    NegativePayment { payment: Decimal },

    #[error("extra monthly payment cannot be negative, got {extra}")]
    NegativeExtraPayment { extra: Decimal },

    #[error("max months must be positive")]
    InvalidMaxMonths,

    #[error("debt {debt_id} is not active")]
    DebtNotActive { debt_id: String },

    #[error("debt {debt_id}: {source}")]
    InvalidDebt {
        debt_id: String,
        source: Box<EngineError>,
    },
}

impl EngineError {
    /// Wraps a field-level error with the id of the debt it was found on.
    pub(crate) fn on_debt(self, debt_id: &str) -> EngineError {
        EngineError::InvalidDebt {
            debt_id: debt_id.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

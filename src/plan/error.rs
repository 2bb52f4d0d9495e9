//! Errors raised while preparing or running a payoff simulation.

use thiserror::Error;

use super::datatype::DebtId;

pub type Result<T> = std::result::Result<T, PlanError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("enter at least one debt with an outstanding balance")]
    NoDebts,

    #[error("{field} for '{debt}' cannot be negative")]
    NegativeAmount { field: &'static str, debt: String },

    #[error("{field} for '{debt}' is too large")]
    AmountTooLarge { field: &'static str, debt: String },

    #[error("debt {0} appears more than once")]
    DuplicateDebt(DebtId),

    #[error("more than one debt is named '{0}'")]
    DuplicateLabel(String),

    #[error("debt {0} needs a name")]
    EmptyLabel(DebtId),

    #[error("balance of '{debt}' overflowed in month {month}")]
    Overflow { debt: String, month: u32 },
}

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type DebtId = i64;

/// Hard stop for a run: 50 years of monthly steps.
pub const MAX_MONTHS: u32 = 600;
/// Months of history kept on a summary for display.
pub const HISTORY_MONTHS: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtSnapshot {
    pub id: DebtId,
    pub label: String,
    pub balance: Decimal,
    pub annual_rate_percent: Decimal,
    pub minimum_payment: Decimal,
}
impl DebtSnapshot {
    pub fn new(
        id: DebtId,
        label: impl Into<String>,
        balance: Decimal,
        annual_rate_percent: Decimal,
        minimum_payment: Decimal,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            balance,
            annual_rate_percent,
            minimum_payment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Extra payment goes to the highest interest rate.
    Avalanche,
    /// Extra payment goes to the smallest remaining balance.
    Snowball,
}
impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Avalanche => "avalanche",
            Strategy::Snowball => "snowball",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PaidOff,
    /// The month bound was reached with balance still outstanding.
    NotConverged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRecord {
    pub month: u32,
    pub interest: Decimal,
    pub paid: Decimal,
    /// Remaining balance by label, outstanding debts only.
    pub balances: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtPayoff {
    pub id: DebtId,
    pub label: String,
    pub month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub strategy: Strategy,
    pub outcome: Outcome,
    pub months: u32,
    pub total_interest: Decimal,
    pub total_paid: Decimal,
    pub outstanding: Decimal,
    /// In the order the debts reached zero.
    pub payoffs: Vec<DebtPayoff>,
    pub history: Vec<MonthRecord>,
}
impl SimulationSummary {
    pub fn converged(&self) -> bool {
        self.outcome == Outcome::PaidOff
    }
    pub fn payoff_month(&self, id: DebtId) -> Option<u32> {
        self.payoffs.iter().find(|p| p.id == id).map(|p| p.month)
    }
    /// Calendar date of the last payment when counting from `start`.
    pub fn debt_free_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        if !self.converged() {
            return None;
        }
        start.checked_add_months(Months::new(self.months))
    }
}

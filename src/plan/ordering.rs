//! Selectors that pick which outstanding debt receives the extra payment.
//!
//! Each selector looks only at the working balances it is handed and is
//! called again every simulated month, so a debt's rank follows its current
//! balance. Ties always go to the debt that came first in the input.

use rust_decimal::Decimal;

use super::datatype::Strategy;
use super::engine::WorkingDebt;

impl Strategy {
    /// Position of the debt that should receive this month's extra payment.
    pub fn select(&self, debts: &[WorkingDebt]) -> Option<usize> {
        match self {
            Strategy::Avalanche => select_avalanche(debts),
            Strategy::Snowball => select_snowball(debts),
        }
    }
}

fn outstanding(debts: &[WorkingDebt]) -> impl Iterator<Item = (usize, &WorkingDebt)> {
    debts
        .iter()
        .enumerate()
        .filter(|(_, d)| d.balance > Decimal::ZERO)
}

/// Highest annual rate wins.
pub fn select_avalanche(debts: &[WorkingDebt]) -> Option<usize> {
    // min_by keeps the first of equal elements, max_by would keep the last
    outstanding(debts)
        .min_by(|(_, a), (_, b)| b.annual_rate_percent.cmp(&a.annual_rate_percent))
        .map(|(i, _)| i)
}

/// Smallest current balance wins.
pub fn select_snowball(debts: &[WorkingDebt]) -> Option<usize> {
    outstanding(debts)
        .min_by_key(|(_, d)| d.balance)
        .map(|(i, _)| i)
}

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use super::datatype::{DebtSnapshot, SimulationSummary, Strategy};
use super::engine::simulate;
use super::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyComparison {
    pub avalanche: SimulationSummary,
    pub snowball: SimulationSummary,
    /// Snowball interest minus avalanche interest. Signed.
    pub interest_saved: Decimal,
    /// Snowball months minus avalanche months. Signed.
    pub months_difference: i64,
}
impl StrategyComparison {
    pub fn from_summaries(avalanche: SimulationSummary, snowball: SimulationSummary) -> Self {
        let interest_saved = snowball.total_interest - avalanche.total_interest;
        let months_difference = i64::from(snowball.months) - i64::from(avalanche.months);
        Self {
            avalanche,
            snowball,
            interest_saved,
            months_difference,
        }
    }
}

/// Run both strategies over the same debts and extra payment.
pub fn compare_strategies(
    debts: &[DebtSnapshot],
    extra_payment: Decimal,
) -> Result<StrategyComparison> {
    let avalanche = simulate(debts, extra_payment, Strategy::Avalanche)?;
    let snowball = simulate(debts, extra_payment, Strategy::Snowball)?;
    let cmp = StrategyComparison::from_summaries(avalanche, snowball);
    info!(
        debts = debts.len(),
        %extra_payment,
        interest_saved = %cmp.interest_saved,
        months_difference = cmp.months_difference,
        "compared payoff strategies"
    );
    Ok(cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::sample_data::sample_debts;
    use rust_decimal_macros::dec;

    #[test]
    fn both_strategies_see_the_same_input() {
        let debts = sample_debts();
        let cmp = compare_strategies(&debts, dec!(0)).unwrap();

        // without extra payment the selector never matters
        assert_eq!(cmp.avalanche.months, cmp.snowball.months);
        assert_eq!(cmp.avalanche.total_interest, cmp.snowball.total_interest);
        assert_eq!(cmp.interest_saved, Decimal::ZERO);
        assert_eq!(cmp.months_difference, 0);
        assert_eq!(cmp.avalanche.strategy, Strategy::Avalanche);
        assert_eq!(cmp.snowball.strategy, Strategy::Snowball);
    }

    #[test]
    fn differences_are_signed() {
        let debts = sample_debts();
        let avalanche = simulate(&debts, dec!(150), Strategy::Avalanche).unwrap();
        let snowball = simulate(&debts, dec!(150), Strategy::Snowball).unwrap();

        let flipped = StrategyComparison::from_summaries(snowball.clone(), avalanche.clone());
        let cmp = StrategyComparison::from_summaries(avalanche, snowball);
        assert_eq!(cmp.interest_saved, -flipped.interest_saved);
        assert_eq!(cmp.months_difference, -flipped.months_difference);
    }

    #[test]
    fn empty_input_fails_before_simulating() {
        assert!(compare_strategies(&[], dec!(100)).is_err());
    }
}

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::datatype::*;
use super::error::{PlanError, Result};

/// Working copy of one debt while a simulation runs. Rate and minimum
/// payment are fixed at the snapshot values; only `balance` moves.
#[derive(Debug, Clone)]
pub struct WorkingDebt {
    pub id: DebtId,
    pub label: String,
    pub balance: Decimal,
    pub annual_rate_percent: Decimal,
    pub minimum_payment: Decimal,
    pub paid_off_in: Option<u32>,
}
impl From<&DebtSnapshot> for WorkingDebt {
    fn from(d: &DebtSnapshot) -> Self {
        Self {
            id: d.id,
            label: d.label.clone(),
            balance: d.balance,
            annual_rate_percent: d.annual_rate_percent,
            minimum_payment: d.minimum_payment,
            paid_off_in: None,
        }
    }
}

/// Interest for one month on `balance` at a nominal annual percentage.
/// `None` means the product overflowed.
pub fn monthly_interest(balance: Decimal, annual_rate_percent: Decimal) -> Option<Decimal> {
    if annual_rate_percent <= Decimal::ZERO {
        return Some(Decimal::ZERO);
    }
    let monthly_rate = annual_rate_percent
        .checked_div(Decimal::from(12))?
        .checked_div(Decimal::ONE_HUNDRED)?;
    balance.checked_mul(monthly_rate)
}

fn overflow(debt: &str, month: u32) -> PlanError {
    PlanError::Overflow {
        debt: debt.to_string(),
        month,
    }
}

/// Advance every debt by one month and return that month's record.
///
/// Interest is compounded onto each outstanding balance first, then every
/// minimum payment is taken (capped at the balance), then the strategy's
/// selector picks one debt for the extra payment. Extra that exceeds the
/// selected balance is left unspent.
pub fn step_month(
    debts: &mut [WorkingDebt],
    extra_payment: Decimal,
    strategy: Strategy,
    month: u32,
) -> Result<MonthRecord> {
    let mut interest = Decimal::ZERO;
    let mut paid = Decimal::ZERO;

    for d in debts.iter_mut().filter(|d| d.balance > Decimal::ZERO) {
        let accrued = monthly_interest(d.balance, d.annual_rate_percent)
            .ok_or_else(|| overflow(&d.label, month))?;
        d.balance = d
            .balance
            .checked_add(accrued)
            .ok_or_else(|| overflow(&d.label, month))?;
        interest = interest
            .checked_add(accrued)
            .ok_or_else(|| overflow(&d.label, month))?;
    }

    for d in debts.iter_mut().filter(|d| d.balance > Decimal::ZERO) {
        let payment = d.minimum_payment.min(d.balance);
        d.balance -= payment;
        paid += payment;
    }

    if extra_payment > Decimal::ZERO {
        if let Some(i) = strategy.select(debts) {
            let target = &mut debts[i];
            let applied = extra_payment.min(target.balance);
            target.balance -= applied;
            paid += applied;
        }
    }

    let mut balances = BTreeMap::new();
    for d in debts.iter_mut() {
        if d.balance > Decimal::ZERO {
            balances.insert(d.label.clone(), d.balance);
        } else if d.paid_off_in.is_none() {
            d.paid_off_in = Some(month);
        }
    }

    Ok(MonthRecord {
        month,
        interest,
        paid,
        balances,
    })
}

/// Run one strategy over `debts` until every balance is zero or
/// [`MAX_MONTHS`] have passed.
///
/// Debts with a zero balance are ignored. An input with nothing owed is
/// rejected with [`PlanError::NoDebts`].
pub fn simulate(
    debts: &[DebtSnapshot],
    extra_payment: Decimal,
    strategy: Strategy,
) -> Result<SimulationSummary> {
    let mut state: Vec<WorkingDebt> = debts
        .iter()
        .filter(|d| d.balance > Decimal::ZERO)
        .map(WorkingDebt::from)
        .collect();
    if state.is_empty() {
        return Err(PlanError::NoDebts);
    }

    let mut months = 0;
    let mut total_interest = Decimal::ZERO;
    let mut total_paid = Decimal::ZERO;
    let mut payoffs = Vec::new();
    let mut history = Vec::new();

    while state.iter().any(|d| d.balance > Decimal::ZERO) {
        if months == MAX_MONTHS {
            break;
        }
        months += 1;
        let record = step_month(&mut state, extra_payment, strategy, months)?;

        total_interest = total_interest
            .checked_add(record.interest)
            .ok_or_else(|| overflow("all debts", months))?;
        total_paid += record.paid;
        for d in state.iter().filter(|d| d.paid_off_in == Some(months)) {
            payoffs.push(DebtPayoff {
                id: d.id,
                label: d.label.clone(),
                month: months,
            });
        }
        if history.len() < HISTORY_MONTHS {
            history.push(record);
        }
    }

    let outstanding: Decimal = state.iter().map(|d| d.balance).sum();
    let outcome = if outstanding > Decimal::ZERO {
        warn!(
            strategy = strategy.name(),
            %outstanding,
            max_months = MAX_MONTHS,
            "debts not paid off within month bound"
        );
        Outcome::NotConverged
    } else {
        Outcome::PaidOff
    };
    debug!(
        strategy = strategy.name(),
        months,
        %total_interest,
        "simulation finished"
    );

    Ok(SimulationSummary {
        strategy,
        outcome,
        months,
        total_interest,
        total_paid,
        outstanding,
        payoffs,
        history,
    })
}

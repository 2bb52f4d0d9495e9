//! Turns user-entered debt rows into snapshots the simulator can trust.
//!
//! The ledger only stores a flat monthly amount per fixed debt, so the
//! balance and rate arrive with each request and the minimum payment falls
//! back to the stored monthly amount when it is not entered.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::collections::HashSet;

use super::datatype::{DebtId, DebtSnapshot};
use super::error::{PlanError, Result};

pub const MAX_AMOUNT: Decimal = dec!(999999999.99);

#[derive(Debug, Clone, Deserialize)]
pub struct DebtInput {
    pub id: DebtId,
    pub title: String,
    pub balance: Option<Decimal>,
    pub annual_rate_percent: Option<Decimal>,
    pub minimum_payment: Option<Decimal>,
    /// Monthly amount stored on the ledger record.
    #[serde(default)]
    pub recurring_amount: Decimal,
}

pub fn validate_amount(field: &'static str, debt: &str, value: Decimal) -> Result<Decimal> {
    if value < Decimal::ZERO {
        return Err(PlanError::NegativeAmount {
            field,
            debt: debt.to_string(),
        });
    }
    if value > MAX_AMOUNT {
        return Err(PlanError::AmountTooLarge {
            field,
            debt: debt.to_string(),
        });
    }
    Ok(value)
}

pub fn validate_rate(debt: &str, value: Decimal) -> Result<Decimal> {
    if value < Decimal::ZERO {
        return Err(PlanError::NegativeAmount {
            field: "interest rate",
            debt: debt.to_string(),
        });
    }
    Ok(value)
}

/// Missing means no extra payment.
pub fn validate_extra_payment(value: Option<Decimal>) -> Result<Decimal> {
    validate_amount("extra payment", "all debts", value.unwrap_or(Decimal::ZERO))
}

impl DebtInput {
    /// `Ok(None)` when the debt has nothing outstanding.
    pub fn into_snapshot(self) -> Result<Option<DebtSnapshot>> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(PlanError::EmptyLabel(self.id));
        }
        let balance = validate_amount("balance", &title, self.balance.unwrap_or_default())?;
        let rate = validate_rate(&title, self.annual_rate_percent.unwrap_or_default())?;
        let minimum = validate_amount(
            "minimum payment",
            &title,
            self.minimum_payment.unwrap_or(self.recurring_amount),
        )?;
        if balance.is_zero() {
            return Ok(None);
        }
        Ok(Some(DebtSnapshot::new(self.id, title, balance, rate, minimum)))
    }
}

/// Validate every row, drop paid-off debts and reject duplicates.
pub fn build_snapshots(inputs: Vec<DebtInput>) -> Result<Vec<DebtSnapshot>> {
    let mut ids = HashSet::new();
    let mut labels = HashSet::new();
    let mut snapshots = Vec::with_capacity(inputs.len());
    for input in inputs {
        let Some(snapshot) = input.into_snapshot()? else {
            continue;
        };
        if !ids.insert(snapshot.id) {
            return Err(PlanError::DuplicateDebt(snapshot.id));
        }
        if !labels.insert(snapshot.label.clone()) {
            return Err(PlanError::DuplicateLabel(snapshot.label));
        }
        snapshots.push(snapshot);
    }
    if snapshots.is_empty() {
        return Err(PlanError::NoDebts);
    }
    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: DebtId, title: &str, balance: Option<Decimal>) -> DebtInput {
        DebtInput {
            id,
            title: title.to_string(),
            balance,
            annual_rate_percent: Some(dec!(12)),
            minimum_payment: Some(dec!(40)),
            recurring_amount: dec!(55),
        }
    }

    #[test]
    fn builds_snapshot_in_input_order() {
        let snaps = build_snapshots(vec![
            input(7, "Visa", Some(dec!(1200))),
            input(3, "Loan", Some(dec!(300.50))),
        ])
        .unwrap();

        assert_eq!(snaps.len(), 2);
        assert_eq!(snaps[0].id, 7);
        assert_eq!(snaps[1].label, "Loan");
        assert_eq!(snaps[1].balance, dec!(300.50));
        assert_eq!(snaps[1].annual_rate_percent, dec!(12));
    }

    #[test]
    fn minimum_payment_falls_back_to_recurring_amount() {
        let mut row = input(1, "Phone plan", Some(dec!(480)));
        row.minimum_payment = None;
        row.annual_rate_percent = None;

        let snap = row.into_snapshot().unwrap().unwrap();
        assert_eq!(snap.minimum_payment, dec!(55));
        assert_eq!(snap.annual_rate_percent, Decimal::ZERO);
    }

    #[test]
    fn zero_or_missing_balance_is_skipped() {
        let snaps = build_snapshots(vec![
            input(1, "Closed", Some(dec!(0))),
            input(2, "Blank", None),
            input(3, "Open", Some(dec!(10))),
        ])
        .unwrap();
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].label, "Open");
    }

    #[test]
    fn nothing_outstanding_is_an_error() {
        let err = build_snapshots(vec![input(1, "Closed", Some(dec!(0)))]).unwrap_err();
        assert_eq!(err, PlanError::NoDebts);
        assert_eq!(
            err.to_string(),
            "enter at least one debt with an outstanding balance"
        );
        assert_eq!(build_snapshots(Vec::new()), Err(PlanError::NoDebts));
    }

    #[test]
    fn negative_values_are_rejected() {
        let err = build_snapshots(vec![input(1, "Visa", Some(dec!(-1)))]).unwrap_err();
        assert_eq!(err.to_string(), "balance for 'Visa' cannot be negative");

        let mut row = input(2, "Loan", Some(dec!(100)));
        row.annual_rate_percent = Some(dec!(-3));
        assert!(matches!(
            row.into_snapshot(),
            Err(PlanError::NegativeAmount { field: "interest rate", .. })
        ));

        let mut row = input(3, "Card", Some(dec!(100)));
        row.minimum_payment = Some(dec!(-0.01));
        assert!(matches!(
            row.into_snapshot(),
            Err(PlanError::NegativeAmount { field: "minimum payment", .. })
        ));
    }

    #[test]
    fn amounts_above_limit_are_rejected() {
        assert_eq!(validate_amount("balance", "x", MAX_AMOUNT), Ok(MAX_AMOUNT));
        let err = validate_amount("balance", "x", dec!(1000000000)).unwrap_err();
        assert!(matches!(err, PlanError::AmountTooLarge { .. }));
    }

    #[test]
    fn duplicates_are_rejected() {
        let err = build_snapshots(vec![
            input(1, "Visa", Some(dec!(10))),
            input(1, "Other", Some(dec!(20))),
        ])
        .unwrap_err();
        assert_eq!(err, PlanError::DuplicateDebt(1));

        let err = build_snapshots(vec![
            input(1, "Visa", Some(dec!(10))),
            input(2, " Visa ", Some(dec!(20))),
        ])
        .unwrap_err();
        assert_eq!(err, PlanError::DuplicateLabel("Visa".to_string()));
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = build_snapshots(vec![input(9, "   ", Some(dec!(10)))]).unwrap_err();
        assert_eq!(err, PlanError::EmptyLabel(9));
    }

    #[test]
    fn extra_payment_defaults_to_zero() {
        assert_eq!(validate_extra_payment(None), Ok(Decimal::ZERO));
        assert_eq!(validate_extra_payment(Some(dec!(75.5))), Ok(dec!(75.5)));
        assert!(validate_extra_payment(Some(dec!(-5))).is_err());
    }
}

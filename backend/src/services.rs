use crate::config::Config;
use crate::routes::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chrono::{Local, NaiveDate};
use debtplan::plan::{
    build_snapshots, compare_strategies, validate_extra_payment, DebtInput, DebtPayoff,
    MonthRecord, Outcome, PlanError, SimulationSummary, Strategy,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;
use uuid::Uuid;

pub async fn root() -> &'static str {
    "ok"
}

pub async fn compare_strategies_handler(
    State(state): State<AppState>,
    Json(req): Json<CompareStrategiesReq>,
) -> Result<Json<CompareStrategiesResp>, (StatusCode, String)> {
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("compare_strategies", %run_id);
    let resp = span.in_scope(|| run_comparison(&state.config, run_id, req))?;
    Ok(Json(resp))
}

pub fn run_comparison(
    config: &Config,
    run_id: Uuid,
    req: CompareStrategiesReq,
) -> Result<CompareStrategiesResp, (StatusCode, String)> {
    if req.debts.len() > config.max_debts {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("at most {} debts per simulation", config.max_debts),
        ));
    }
    let extra = validate_extra_payment(req.extra_payment).map_err(plan_error)?;
    let debts = build_snapshots(req.debts).map_err(plan_error)?;
    let start = req.start_date.unwrap_or_else(|| Local::now().date_naive());

    let cmp = compare_strategies(&debts, extra).map_err(plan_error)?;
    info!(
        debts = debts.len(),
        avalanche_months = cmp.avalanche.months,
        snowball_months = cmp.snowball.months,
        "strategies compared"
    );

    Ok(CompareStrategiesResp {
        run_id,
        start_date: start,
        interest_saved: money(cmp.interest_saved),
        months_difference: cmp.months_difference,
        avalanche: SummaryDto::from_summary(cmp.avalanche, start),
        snowball: SummaryDto::from_summary(cmp.snowball, start),
    })
}

/// Rounds to cents and pins the scale so `925` serializes as `"925.00"`.
fn money(value: Decimal) -> Decimal {
    let mut v = value.round_dp(2);
    v.rescale(2);
    v
}

fn plan_error(e: PlanError) -> (StatusCode, String) {
    (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
}

#[derive(Deserialize)]
pub struct CompareStrategiesReq {
    pub extra_payment: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub debts: Vec<DebtInput>,
}

#[derive(Debug, Serialize, Clone)]
pub struct MonthDto {
    pub month: u32,
    pub interest: Decimal,
    pub paid: Decimal,
    pub balances: BTreeMap<String, Decimal>,
}
impl From<MonthRecord> for MonthDto {
    fn from(m: MonthRecord) -> Self {
        Self {
            month: m.month,
            interest: money(m.interest),
            paid: money(m.paid),
            balances: m
                .balances
                .into_iter()
                .map(|(label, b)| (label, money(b)))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct SummaryDto {
    pub strategy: Strategy,
    pub outcome: Outcome,
    pub months: u32,
    pub total_interest: Decimal,
    pub total_paid: Decimal,
    pub outstanding: Decimal,
    pub debt_free_by: Option<NaiveDate>,
    pub payoffs: Vec<DebtPayoff>,
    pub history: Vec<MonthDto>,
}
impl SummaryDto {
    pub fn from_summary(s: SimulationSummary, start: NaiveDate) -> Self {
        Self {
            debt_free_by: s.debt_free_date(start),
            strategy: s.strategy,
            outcome: s.outcome,
            months: s.months,
            total_interest: money(s.total_interest),
            total_paid: money(s.total_paid),
            outstanding: money(s.outstanding),
            payoffs: s.payoffs,
            history: s.history.into_iter().map(MonthDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct CompareStrategiesResp {
    pub run_id: Uuid,
    pub start_date: NaiveDate,
    pub avalanche: SummaryDto,
    pub snowball: SummaryDto,
    pub interest_saved: Decimal,
    pub months_difference: i64,
}

use anyhow::Result;
use debtplan::plan::sample_data::{sample_debts, SAMPLE_EXTRA_PAYMENT};
use debtplan::plan::*;
use tracing_subscriber::EnvFilter;

fn print_summary(s: &SimulationSummary) {
    println!("== {} ==", s.strategy.name());
    match s.outcome {
        Outcome::PaidOff => println!("paid off in {} months", s.months),
        Outcome::NotConverged => println!(
            "not paid off after {} months, {} still owed",
            s.months,
            s.outstanding.round_dp(2)
        ),
    }
    println!(
        "total interest: {:>10} | total paid: {:>10}",
        s.total_interest.round_dp(2),
        s.total_paid.round_dp(2)
    );
    for p in &s.payoffs {
        println!("  month {:>3}: {} cleared", p.month, p.label);
    }
    for m in s.history.iter().take(6) {
        let balances: Vec<String> = m
            .balances
            .iter()
            .map(|(label, b)| format!("{label}={}", b.round_dp(2)))
            .collect();
        println!(
            "  [{:>2}] interest {:>8} paid {:>8} | {}",
            m.month,
            m.interest.round_dp(2),
            m.paid.round_dp(2),
            balances.join(", ")
        );
    }
    println!();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let debts = sample_debts();
    let extra = SAMPLE_EXTRA_PAYMENT;
    let cmp = compare_strategies(&debts, extra)?;

    println!("== Debts ==\n");
    for d in &debts {
        println!(
            "[id={}] {:<12} | balance: {:>9} | rate: {:>6}% | minimum: {:>7}",
            d.id, d.label, d.balance, d.annual_rate_percent, d.minimum_payment
        );
    }
    println!("\nextra payment per month: {extra}\n");

    print_summary(&cmp.avalanche);
    print_summary(&cmp.snowball);
    println!(
        "avalanche saves {} in interest and {} months",
        cmp.interest_saved.round_dp(2),
        cmp.months_difference
    );
    Ok(())
}

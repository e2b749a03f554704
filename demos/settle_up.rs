//! Settlement engine example without any storage

use bigdecimal::BigDecimal;
use std::str::FromStr;
use tripsplit_core::utils::describe_payment;
use tripsplit_core::{
    aggregate_by_participant, Expense, ExpenseCategory, SettlementConfig, SettlementSolver,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🧮 Tripsplit Core - Settlement Example\n");

    let participants: Vec<String> = ["Ana", "Ben", "Chloe", "Dev"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let paid = [
        ("Ana", "120.00"),
        ("Ben", "80.00"),
        ("Ana", "35.50"),
        ("Chloe", "12.25"),
    ];

    let mut expenses = Vec::new();
    for (payer, amount) in paid {
        expenses.push(Expense::new(
            "demo".to_string(),
            payer.to_string(),
            BigDecimal::from_str(amount)?,
            ExpenseCategory::Other,
            String::new(),
        ));
    }

    // A config can come from any JSON source; omitted fields keep their defaults
    let config = SettlementConfig::from_json(r#"{ "currency_symbol": "£" }"#)?;
    let solver = SettlementSolver::with_config(config.clone())?;

    let totals = aggregate_by_participant(&expenses, &participants);
    for balance in solver.balances(&totals, &participants) {
        println!("  {:<6} {:>12}", balance.participant, balance.balance.round(2));
    }
    println!();

    for payment in solver.settle(&totals, &participants) {
        println!("  → {}", describe_payment(&payment, &config));
    }

    Ok(())
}

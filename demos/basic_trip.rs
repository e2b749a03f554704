//! Basic trip book usage example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;
use tripsplit_core::utils::{describe_payment, format_currency, MemoryStorage};
use tripsplit_core::{ExpenseBuilder, ExpenseCategory, TripBook};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🧳 Tripsplit Core - Basic Trip Example\n");

    // Create a new trip book with in-memory storage
    let storage = MemoryStorage::new();
    let mut book = TripBook::new(storage);
    let config = book.config().clone();

    // 1. Create a trip and invite friends
    println!("👥 Setting up the trip...");
    let trip = book
        .create_trip(
            "Lisbon long weekend".to_string(),
            "Alice".to_string(),
            "EUR".to_string(),
        )
        .await?;
    book.join_trip(&trip.id, "Bob".to_string()).await?;
    let trip = book.join_trip(&trip.id, "Carol".to_string()).await?;
    println!("  ✓ {} with {}", trip.name, trip.participants.join(", "));
    println!();

    // 2. Record shared expenses
    println!("💶 Recording expenses...\n");
    let expenses = [
        ("Alice", "240.00", ExpenseCategory::Accommodation, "Apartment", 12),
        ("Bob", "63.40", ExpenseCategory::Food, "Seafood dinner", 12),
        ("Carol", "18.60", ExpenseCategory::Transport, "Tram passes", 13),
        ("Bob", "36.00", ExpenseCategory::Activities, "Castle tickets", 13),
    ];

    for (payer, amount, category, description, day) in expenses {
        let expense = ExpenseBuilder::new(
            trip.id.clone(),
            payer.to_string(),
            BigDecimal::from_str(amount)?,
        )
        .description(description)
        .category(category)
        .date(NaiveDate::from_ymd_opt(2024, 4, day).ok_or("invalid date")?)
        .build()?;
        let expense = book.add_expense(expense).await?;
        println!(
            "  ✓ {} paid {} for {}",
            expense.paid_by,
            format_currency(&expense.amount, &config),
            expense.description
        );
    }
    println!();

    // 3. Show the summary
    let summary = book.summary(&trip.id).await?;
    println!("📊 Spending by category:");
    for (category, total) in summary.category_breakdown() {
        println!("  {:<15} {}", category.label(), format_currency(&total, &config));
    }
    println!();

    println!("⚖️  Balances (share {}):", format_currency(&summary.average_share, &config));
    for balance in &summary.balances {
        println!(
            "  {:<8} paid {:>10}  balance {:>10}",
            balance.participant,
            format_currency(&balance.paid, &config),
            format_currency(&balance.balance, &config)
        );
    }
    println!();

    println!("🤝 Settle up:");
    for payment in &summary.settlement {
        println!("  → {}", describe_payment(payment, &config));
    }

    Ok(())
}

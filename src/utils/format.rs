//! Currency rounding and display helpers

use bigdecimal::{BigDecimal, RoundingMode};

use crate::config::SettlementConfig;
use crate::types::SettledPayment;

/// Round an amount half-up to `places` decimal places
pub fn round_currency(amount: &BigDecimal, places: u32) -> BigDecimal {
    amount.with_scale_round(places as i64, RoundingMode::HalfUp)
}

/// Format an amount with the configured symbol and precision, e.g. `€ 12.50`
pub fn format_currency(amount: &BigDecimal, config: &SettlementConfig) -> String {
    let rounded = round_currency(amount, config.decimal_places);
    if rounded < BigDecimal::from(0) {
        format!("-{} {}", config.currency_symbol, rounded.abs())
    } else {
        format!("{} {}", config.currency_symbol, rounded)
    }
}

/// One-line description of a transfer, e.g. `Bob pays Alice € 50.00`
pub fn describe_payment(payment: &SettledPayment, config: &SettlementConfig) -> String {
    format!(
        "{} pays {} {}",
        payment.from,
        payment.to,
        format_currency(&payment.amount, config)
    )
}

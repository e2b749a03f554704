//! Settlement and display configuration

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Half a cent. Balances and transfers within this distance of zero are treated as zero.
pub fn settlement_epsilon() -> BigDecimal {
    BigDecimal::new(5.into(), 3)
}

/// Tunables for the settlement engine and currency formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlementConfig {
    /// Zero tolerance for balances and transfers
    pub tolerance: BigDecimal,
    /// Symbol printed in front of formatted amounts
    pub currency_symbol: String,
    /// Decimal places amounts are rounded to for display
    pub decimal_places: u32,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            tolerance: settlement_epsilon(),
            currency_symbol: "€".to_string(),
            decimal_places: 2,
        }
    }
}

impl SettlementConfig {
    /// Load a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> TripResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TripError::Validation(format!("Invalid settlement config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the zero tolerance
    pub fn with_tolerance(mut self, tolerance: BigDecimal) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the currency symbol
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Set the display precision
    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Reject configurations the solver cannot work with
    pub fn validate(&self) -> TripResult<()> {
        if self.tolerance <= BigDecimal::from(0) {
            return Err(TripError::Validation(
                "Settlement tolerance must be positive".to_string(),
            ));
        }

        if self.decimal_places > 8 {
            return Err(TripError::Validation(
                "Decimal places cannot exceed 8".to_string(),
            ));
        }

        Ok(())
    }
}

//! Validation utilities

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> TripResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(TripError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that an amount has no more than two decimal places
pub fn validate_cent_precision(amount: &BigDecimal) -> TripResult<()> {
    let (_, scale) = amount.normalized().as_bigint_and_exponent();
    if scale > 2 {
        return Err(TripError::Validation(format!(
            "Amount {} has more than two decimal places",
            amount
        )));
    }

    Ok(())
}

/// Validate that a participant name is valid
pub fn validate_participant_name(name: &str) -> TripResult<()> {
    if name.trim().is_empty() {
        return Err(TripError::Validation(
            "Participant name cannot be empty".to_string(),
        ));
    }

    if name.trim() != name {
        return Err(TripError::Validation(
            "Participant name cannot start or end with whitespace".to_string(),
        ));
    }

    if name.chars().count() > 40 {
        return Err(TripError::Validation(
            "Participant name cannot exceed 40 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a trip name is valid
pub fn validate_trip_name(name: &str) -> TripResult<()> {
    if name.trim().is_empty() {
        return Err(TripError::Validation(
            "Trip name cannot be empty".to_string(),
        ));
    }

    if name.chars().count() > 100 {
        return Err(TripError::Validation(
            "Trip name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a currency code looks like ISO 4217
pub fn validate_currency_code(code: &str) -> TripResult<()> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(TripError::Validation(format!(
            "Currency code '{}' must be three uppercase letters",
            code
        )));
    }

    Ok(())
}

/// Validate that an expense description is valid
pub fn validate_expense_description(description: &str) -> TripResult<()> {
    if description.len() > 500 {
        return Err(TripError::Validation(
            "Expense description cannot exceed 500 characters".to_string(),
        ));
    }

    Ok(())
}

/// Enhanced expense validator with detailed checks
pub struct EnhancedExpenseValidator;

impl ExpenseValidator for EnhancedExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> TripResult<()> {
        expense.validate()?;

        validate_positive_amount(&expense.amount)?;
        validate_cent_precision(&expense.amount)?;
        validate_participant_name(&expense.paid_by)?;
        validate_expense_description(&expense.description)?;

        Ok(())
    }

    fn validate_payer(&self, expense: &Expense, trip: &Trip) -> TripResult<()> {
        DefaultExpenseValidator.validate_payer(expense, trip)
    }
}

/// Enhanced trip validator with detailed checks
pub struct EnhancedTripValidator;

impl TripValidator for EnhancedTripValidator {
    fn validate_trip(&self, trip: &Trip) -> TripResult<()> {
        DefaultTripValidator.validate_trip(trip)?;

        validate_trip_name(&trip.name)?;
        validate_currency_code(&trip.currency_code)?;
        for participant in &trip.participants {
            validate_participant_name(participant)?;
        }

        Ok(())
    }

    fn validate_participant(&self, trip: &Trip, name: &str) -> TripResult<()> {
        validate_participant_name(name)?;
        DefaultTripValidator.validate_participant(trip, name)
    }
}

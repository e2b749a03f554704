//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for trips and their expenses
///
/// This trait allows the trip book to work with any storage backend
/// (browser local storage, SQLite, a remote API, in-memory, etc.) by
/// implementing these methods. How records are encoded is up to the backend.
#[async_trait]
pub trait TripStorage: Send + Sync {
    /// Save a trip to storage
    async fn save_trip(&mut self, trip: &Trip) -> TripResult<()>;

    /// Get a trip by ID
    async fn get_trip(&self, trip_id: &str) -> TripResult<Option<Trip>>;

    /// List all trips
    async fn list_trips(&self) -> TripResult<Vec<Trip>>;

    /// Update an existing trip
    async fn update_trip(&mut self, trip: &Trip) -> TripResult<()>;

    /// Delete a trip record (expenses are removed separately)
    async fn delete_trip(&mut self, trip_id: &str) -> TripResult<()>;

    /// Save an expense to storage
    async fn save_expense(&mut self, expense: &Expense) -> TripResult<()>;

    /// Get an expense by ID
    async fn get_expense(&self, expense_id: &str) -> TripResult<Option<Expense>>;

    /// List the expenses of a trip
    async fn list_expenses(&self, trip_id: &str) -> TripResult<Vec<Expense>>;

    /// Delete a single expense
    async fn delete_expense(&mut self, expense_id: &str) -> TripResult<()>;

    /// Delete every expense of a trip, returning how many were removed
    async fn delete_trip_expenses(&mut self, trip_id: &str) -> TripResult<usize>;
}

/// Trait for implementing custom expense validation rules
pub trait ExpenseValidator: Send + Sync {
    /// Validate an expense before saving
    fn validate_expense(&self, expense: &Expense) -> TripResult<()>;

    /// Validate that the payer belongs to the trip
    fn validate_payer(&self, expense: &Expense, trip: &Trip) -> TripResult<()>;
}

/// Trait for implementing custom trip validation rules
pub trait TripValidator: Send + Sync {
    /// Validate a trip before saving
    fn validate_trip(&self, trip: &Trip) -> TripResult<()>;

    /// Validate a name before it joins a trip
    fn validate_participant(&self, trip: &Trip, name: &str) -> TripResult<()>;
}

/// Default expense validator with basic rules
pub struct DefaultExpenseValidator;

impl ExpenseValidator for DefaultExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> TripResult<()> {
        expense.validate()
    }

    fn validate_payer(&self, expense: &Expense, trip: &Trip) -> TripResult<()> {
        if trip.has_participant(&expense.paid_by) {
            Ok(())
        } else {
            Err(TripError::UnknownParticipant {
                trip_id: trip.id.clone(),
                participant: expense.paid_by.clone(),
            })
        }
    }
}

/// Default trip validator with basic rules
pub struct DefaultTripValidator;

impl TripValidator for DefaultTripValidator {
    fn validate_trip(&self, trip: &Trip) -> TripResult<()> {
        if trip.name.trim().is_empty() {
            return Err(TripError::Validation(
                "Trip name cannot be empty".to_string(),
            ));
        }

        if trip.participants.is_empty() {
            return Err(TripError::Validation(
                "Trip must have at least one participant".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_participant(&self, trip: &Trip, name: &str) -> TripResult<()> {
        if name.trim().is_empty() {
            return Err(TripError::Validation(
                "Participant name cannot be empty".to_string(),
            ));
        }

        if trip.has_participant(name) {
            return Err(TripError::Validation(format!(
                "'{}' already participates in trip {}",
                name, trip.id
            )));
        }

        Ok(())
    }
}

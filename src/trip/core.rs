//! Trip book orchestrator that coordinates trips, expenses and settlement

use bigdecimal::BigDecimal;
use std::collections::HashMap;

use crate::config::SettlementConfig;
use crate::settlement::*;
use crate::traits::*;
use crate::trip::{ExpenseManager, TripManager};
use crate::types::*;

/// Main entry point for tracking shared trip expenses
///
/// Balances and settlements are never stored: every derived read pulls the
/// current expense list from storage and recomputes.
pub struct TripBook<S: TripStorage> {
    trip_manager: TripManager<S>,
    expense_manager: ExpenseManager<S>,
    config: SettlementConfig,
}

impl<S: TripStorage + Clone> TripBook<S> {
    /// Create a new trip book with the given storage backend
    pub fn new(storage: S) -> Self {
        Self {
            trip_manager: TripManager::new(storage.clone()),
            expense_manager: ExpenseManager::new(storage),
            config: SettlementConfig::default(),
        }
    }

    /// Create a new trip book with custom validators
    pub fn with_validators(
        storage: S,
        trip_validator: Box<dyn TripValidator>,
        expense_validator: Box<dyn ExpenseValidator>,
    ) -> Self {
        Self {
            trip_manager: TripManager::with_validator(storage.clone(), trip_validator),
            expense_manager: ExpenseManager::with_validator(storage, expense_validator),
            config: SettlementConfig::default(),
        }
    }

    /// Replace the settlement configuration
    pub fn with_config(mut self, config: SettlementConfig) -> TripResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }

    // Trip operations
    /// Create a new trip
    pub async fn create_trip(
        &mut self,
        name: String,
        creator: String,
        currency_code: String,
    ) -> TripResult<Trip> {
        self.trip_manager
            .create_trip(name, creator, currency_code)
            .await
    }

    /// Get a trip by ID
    pub async fn get_trip(&self, trip_id: &str) -> TripResult<Option<Trip>> {
        self.trip_manager.get_trip(trip_id).await
    }

    /// Get a trip by ID, returning an error if not found
    pub async fn get_trip_required(&self, trip_id: &str) -> TripResult<Trip> {
        self.trip_manager.get_trip_required(trip_id).await
    }

    /// List all trips
    pub async fn list_trips(&self) -> TripResult<Vec<Trip>> {
        self.trip_manager.list_trips().await
    }

    /// Join a trip as a new participant
    pub async fn join_trip(&mut self, trip_id: &str, name: String) -> TripResult<Trip> {
        self.trip_manager.join_trip(trip_id, name).await
    }

    /// Leave a trip
    pub async fn leave_trip(&mut self, trip_id: &str, name: &str) -> TripResult<Trip> {
        self.trip_manager.leave_trip(trip_id, name).await
    }

    /// Rename a trip
    pub async fn rename_trip(&mut self, trip_id: &str, name: String) -> TripResult<Trip> {
        self.trip_manager.rename_trip(trip_id, name).await
    }

    /// Delete a trip and its expenses
    pub async fn delete_trip(&mut self, trip_id: &str) -> TripResult<()> {
        self.trip_manager.delete_trip(trip_id).await
    }

    // Expense operations
    /// Record a new expense
    pub async fn add_expense(&mut self, expense: Expense) -> TripResult<Expense> {
        self.expense_manager.add_expense(expense).await
    }

    /// Get an expense by ID
    pub async fn get_expense(&self, expense_id: &str) -> TripResult<Option<Expense>> {
        self.expense_manager.get_expense(expense_id).await
    }

    /// List the expenses of a trip
    pub async fn list_expenses(&self, trip_id: &str) -> TripResult<Vec<Expense>> {
        self.trip_manager.get_trip_required(trip_id).await?;
        self.expense_manager.list_expenses(trip_id).await
    }

    /// Delete an expense
    pub async fn delete_expense(&mut self, expense_id: &str) -> TripResult<()> {
        self.expense_manager.delete_expense(expense_id).await
    }

    // Derived reads
    /// Spending per category, zero for categories without expenses
    pub async fn totals_by_category(
        &self,
        trip_id: &str,
    ) -> TripResult<HashMap<ExpenseCategory, BigDecimal>> {
        let expenses = self.list_expenses(trip_id).await?;
        Ok(aggregate_by_category(&expenses, &ExpenseCategory::ALL))
    }

    /// Amount paid per participant, zero for participants who paid nothing
    pub async fn totals_by_participant(
        &self,
        trip_id: &str,
    ) -> TripResult<HashMap<String, BigDecimal>> {
        let (trip, expenses) = self.load(trip_id).await?;
        Ok(aggregate_by_participant(&expenses, &trip.participants))
    }

    /// Net balance of each participant, in join order
    pub async fn balances(&self, trip_id: &str) -> TripResult<Vec<ParticipantBalance>> {
        let (trip, expenses) = self.load(trip_id).await?;
        let totals = aggregate_by_participant(&expenses, &trip.participants);
        Ok(self.solver()?.balances(&totals, &trip.participants))
    }

    /// Transfers that settle the trip
    pub async fn settlement(&self, trip_id: &str) -> TripResult<Vec<SettledPayment>> {
        let (trip, expenses) = self.load(trip_id).await?;
        let totals = aggregate_by_participant(&expenses, &trip.participants);
        Ok(self.solver()?.settle(&totals, &trip.participants))
    }

    /// Full summary of the trip's spending and settlement
    pub async fn summary(&self, trip_id: &str) -> TripResult<TripSummary> {
        let (trip, expenses) = self.load(trip_id).await?;
        TripSummary::build(&expenses, &trip.participants, &self.config)
    }

    async fn load(&self, trip_id: &str) -> TripResult<(Trip, Vec<Expense>)> {
        let trip = self.trip_manager.get_trip_required(trip_id).await?;
        let expenses = self.expense_manager.list_expenses(trip_id).await?;
        Ok((trip, expenses))
    }

    fn solver(&self) -> TripResult<SettlementSolver> {
        SettlementSolver::with_config(self.config.clone())
    }
}

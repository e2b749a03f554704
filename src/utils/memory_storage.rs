//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::traits::*;
use crate::types::*;

/// In-memory storage implementation for testing and development
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    trips: Arc<RwLock<HashMap<String, Trip>>>,
    expenses: Arc<RwLock<HashMap<String, Expense>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self {
            trips: Arc::new(RwLock::new(HashMap::new())),
            expenses: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn read<T>(lock: &RwLock<T>) -> TripResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| TripError::Storage("storage lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> TripResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| TripError::Storage("storage lock poisoned".to_string()))
}

#[async_trait]
impl TripStorage for MemoryStorage {
    async fn save_trip(&mut self, trip: &Trip) -> TripResult<()> {
        write(&self.trips)?.insert(trip.id.clone(), trip.clone());
        Ok(())
    }

    async fn get_trip(&self, trip_id: &str) -> TripResult<Option<Trip>> {
        Ok(read(&self.trips)?.get(trip_id).cloned())
    }

    async fn list_trips(&self) -> TripResult<Vec<Trip>> {
        let mut trips: Vec<Trip> = read(&self.trips)?.values().cloned().collect();
        trips.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(trips)
    }

    async fn update_trip(&mut self, trip: &Trip) -> TripResult<()> {
        let mut trips = write(&self.trips)?;
        match trips.get_mut(&trip.id) {
            Some(existing) => {
                *existing = trip.clone();
                Ok(())
            }
            None => Err(TripError::TripNotFound(trip.id.clone())),
        }
    }

    async fn delete_trip(&mut self, trip_id: &str) -> TripResult<()> {
        if write(&self.trips)?.remove(trip_id).is_some() {
            Ok(())
        } else {
            Err(TripError::TripNotFound(trip_id.to_string()))
        }
    }

    async fn save_expense(&mut self, expense: &Expense) -> TripResult<()> {
        write(&self.expenses)?.insert(expense.id.clone(), expense.clone());
        Ok(())
    }

    async fn get_expense(&self, expense_id: &str) -> TripResult<Option<Expense>> {
        Ok(read(&self.expenses)?.get(expense_id).cloned())
    }

    async fn list_expenses(&self, trip_id: &str) -> TripResult<Vec<Expense>> {
        let mut expenses: Vec<Expense> = read(&self.expenses)?
            .values()
            .filter(|expense| expense.trip_id == trip_id)
            .cloned()
            .collect();
        expenses.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(expenses)
    }

    async fn delete_expense(&mut self, expense_id: &str) -> TripResult<()> {
        if write(&self.expenses)?.remove(expense_id).is_some() {
            Ok(())
        } else {
            Err(TripError::ExpenseNotFound(expense_id.to_string()))
        }
    }

    async fn delete_trip_expenses(&mut self, trip_id: &str) -> TripResult<usize> {
        let mut expenses = write(&self.expenses)?;
        let before = expenses.len();
        expenses.retain(|_, expense| expense.trip_id != trip_id);
        Ok(before - expenses.len())
    }
}

//! Expense recording and management

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::traits::*;
use crate::types::*;

/// Expense manager for recording and removing trip expenses
pub struct ExpenseManager<S: TripStorage> {
    storage: S,
    validator: Box<dyn ExpenseValidator>,
}

impl<S: TripStorage> ExpenseManager<S> {
    /// Create a new expense manager
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultExpenseValidator),
        }
    }

    /// Create a new expense manager with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn ExpenseValidator>) -> Self {
        Self { storage, validator }
    }

    /// Record a new expense
    pub async fn add_expense(&mut self, expense: Expense) -> TripResult<Expense> {
        self.validator.validate_expense(&expense)?;

        let trip = self
            .storage
            .get_trip(&expense.trip_id)
            .await?
            .ok_or_else(|| TripError::TripNotFound(expense.trip_id.clone()))?;
        self.validator.validate_payer(&expense, &trip)?;

        if self.storage.get_expense(&expense.id).await?.is_some() {
            return Err(TripError::Validation(format!(
                "Expense with ID '{}' already exists",
                expense.id
            )));
        }

        self.storage.save_expense(&expense).await?;

        tracing::info!(
            trip_id = %expense.trip_id,
            expense_id = %expense.id,
            paid_by = %expense.paid_by,
            amount = %expense.amount,
            category = ?expense.category,
            "Recorded expense"
        );
        Ok(expense)
    }

    /// Get an expense by ID
    pub async fn get_expense(&self, expense_id: &str) -> TripResult<Option<Expense>> {
        self.storage.get_expense(expense_id).await
    }

    /// List the expenses of a trip, oldest first
    pub async fn list_expenses(&self, trip_id: &str) -> TripResult<Vec<Expense>> {
        self.storage.list_expenses(trip_id).await
    }

    /// Delete an expense
    pub async fn delete_expense(&mut self, expense_id: &str) -> TripResult<()> {
        if self.storage.get_expense(expense_id).await?.is_none() {
            return Err(TripError::ExpenseNotFound(expense_id.to_string()));
        }

        self.storage.delete_expense(expense_id).await?;

        tracing::info!(expense_id = %expense_id, "Deleted expense");
        Ok(())
    }
}

/// Builder for expenses with optional fields
#[derive(Debug)]
pub struct ExpenseBuilder {
    expense: Expense,
}

impl ExpenseBuilder {
    /// Start an expense of `amount` paid by `paid_by` in trip `trip_id`
    pub fn new(trip_id: String, paid_by: String, amount: BigDecimal) -> Self {
        Self {
            expense: Expense::new(
                trip_id,
                paid_by,
                amount,
                ExpenseCategory::default(),
                String::new(),
            ),
        }
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.expense.description = description.into();
        self
    }

    /// Set the category
    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.expense.category = category;
        self
    }

    /// Set the day the expense happened
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.expense.date = date;
        self
    }

    /// Build the expense
    pub fn build(self) -> TripResult<Expense> {
        self.expense.validate()?;
        Ok(self.expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 14).unwrap();
        let expense = ExpenseBuilder::new(
            "trip1".to_string(),
            "Alice".to_string(),
            BigDecimal::from(42),
        )
        .description("Museum tickets")
        .category(ExpenseCategory::Activities)
        .date(date)
        .build()
        .unwrap();

        assert_eq!(expense.description, "Museum tickets");
        assert_eq!(expense.category, ExpenseCategory::Activities);
        assert_eq!(expense.date, date);
        assert_eq!(expense.amount, BigDecimal::from(42));
    }

    #[test]
    fn test_builder_defaults_and_validation() {
        let expense =
            ExpenseBuilder::new("trip1".to_string(), "Bob".to_string(), BigDecimal::from(5))
                .build()
                .unwrap();
        assert_eq!(expense.category, ExpenseCategory::Other);
        assert!(expense.description.is_empty());

        let negative =
            ExpenseBuilder::new("trip1".to_string(), "Bob".to_string(), BigDecimal::from(-5))
                .build();
        assert!(negative.is_err());
    }
}

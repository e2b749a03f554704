//! Core types and data structures for trip expense tracking

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Spending categories a trip expense can be filed under
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ExpenseCategory {
    /// Hotels, hostels, rentals
    Accommodation,
    /// Flights, trains, fuel, taxis
    Transport,
    /// Restaurants and groceries
    Food,
    /// Tickets, tours, entrance fees
    Activities,
    /// Souvenirs and other purchases
    Shopping,
    /// Anything else
    #[default]
    Other,
}

impl ExpenseCategory {
    /// Every category, in display order
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Accommodation,
        ExpenseCategory::Transport,
        ExpenseCategory::Food,
        ExpenseCategory::Activities,
        ExpenseCategory::Shopping,
        ExpenseCategory::Other,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Accommodation => "Accommodation",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Activities => "Activities",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Other => "Other",
        }
    }
}

/// A shared context grouping participants and their expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: String,
    /// Display name of the trip
    pub name: String,
    /// Participant display names, in join order
    pub participants: Vec<String>,
    /// ISO currency code every amount in this trip is expressed in
    pub currency_code: String,
    /// When the trip was created
    pub created_at: NaiveDateTime,
    /// When the trip was last updated
    pub updated_at: NaiveDateTime,
}

impl Trip {
    /// Create a new trip with its creator as the only participant
    pub fn new(name: String, creator: String, currency_code: String) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            participants: vec![creator],
            currency_code,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `name` is a participant of this trip
    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    /// Add a participant, returning false if the name is already taken
    pub fn add_participant(&mut self, name: String) -> bool {
        if self.has_participant(&name) {
            return false;
        }
        self.participants.push(name);
        self.updated_at = chrono::Utc::now().naive_utc();
        true
    }

    /// Remove a participant, returning false if they were not a member
    pub fn remove_participant(&mut self, name: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != name);
        let removed = self.participants.len() != before;
        if removed {
            self.updated_at = chrono::Utc::now().naive_utc();
        }
        removed
    }
}

/// A single shared expense paid by one participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier for the expense
    pub id: String,
    /// Trip this expense belongs to
    pub trip_id: String,
    /// Free-text description
    pub description: String,
    /// Amount paid, always positive
    pub amount: BigDecimal,
    /// Spending category
    pub category: ExpenseCategory,
    /// Display name of the participant who paid
    pub paid_by: String,
    /// Day the expense happened
    pub date: NaiveDate,
    /// When the expense was recorded
    pub created_at: NaiveDateTime,
}

impl Expense {
    /// Create a new expense dated today
    pub fn new(
        trip_id: String,
        paid_by: String,
        amount: BigDecimal,
        category: ExpenseCategory,
        description: String,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            trip_id,
            description,
            amount,
            category,
            paid_by,
            date: now.date(),
            created_at: now,
        }
    }

    /// Validate the expense in isolation
    pub fn validate(&self) -> TripResult<()> {
        if self.amount <= BigDecimal::from(0) {
            return Err(TripError::Validation(
                "Expense amount must be positive".to_string(),
            ));
        }

        if self.paid_by.trim().is_empty() {
            return Err(TripError::Validation(
                "Expense must have a payer".to_string(),
            ));
        }

        if self.trip_id.trim().is_empty() {
            return Err(TripError::Validation(
                "Expense must belong to a trip".to_string(),
            ));
        }

        Ok(())
    }
}

/// A participant's net position relative to an equal split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantBalance {
    /// Participant display name
    pub participant: String,
    /// Total the participant paid
    pub paid: BigDecimal,
    /// The participant's equal share of the total
    pub share: BigDecimal,
    /// `paid - share`; positive means the participant is owed money
    pub balance: BigDecimal,
}

impl ParticipantBalance {
    /// Whether the participant is owed more than `tolerance`
    pub fn is_creditor(&self, tolerance: &BigDecimal) -> bool {
        self.balance > *tolerance
    }

    /// Whether the participant owes more than `tolerance`
    pub fn is_debtor(&self, tolerance: &BigDecimal) -> bool {
        self.balance < -tolerance.clone()
    }
}

/// A transfer from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettledPayment {
    pub from: String,
    pub to: String,
    pub amount: BigDecimal,
}

/// Errors that can occur while managing trips and expenses
#[derive(Debug, thiserror::Error)]
pub enum TripError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Trip not found: {0}")]
    TripNotFound(String),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),
    #[error("'{participant}' is not a participant of trip {trip_id}")]
    UnknownParticipant {
        trip_id: String,
        participant: String,
    },
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for trip operations
pub type TripResult<T> = Result<T, TripError>;

//! Trip and participant management

use crate::traits::*;
use crate::types::*;

/// Trip manager for creating trips and handling who takes part in them
pub struct TripManager<S: TripStorage> {
    storage: S,
    validator: Box<dyn TripValidator>,
}

impl<S: TripStorage> TripManager<S> {
    /// Create a new trip manager
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            validator: Box::new(DefaultTripValidator),
        }
    }

    /// Create a new trip manager with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn TripValidator>) -> Self {
        Self { storage, validator }
    }

    /// Create a new trip with `creator` as its first participant
    pub async fn create_trip(
        &mut self,
        name: String,
        creator: String,
        currency_code: String,
    ) -> TripResult<Trip> {
        let trip = Trip::new(name, creator, currency_code);

        self.validator.validate_trip(&trip)?;
        self.storage.save_trip(&trip).await?;

        tracing::info!(trip_id = %trip.id, name = %trip.name, "Created trip");
        Ok(trip)
    }

    /// Get a trip by ID
    pub async fn get_trip(&self, trip_id: &str) -> TripResult<Option<Trip>> {
        self.storage.get_trip(trip_id).await
    }

    /// Get a trip by ID, returning an error if not found
    pub async fn get_trip_required(&self, trip_id: &str) -> TripResult<Trip> {
        self.storage
            .get_trip(trip_id)
            .await?
            .ok_or_else(|| TripError::TripNotFound(trip_id.to_string()))
    }

    /// List all trips
    pub async fn list_trips(&self) -> TripResult<Vec<Trip>> {
        self.storage.list_trips().await
    }

    /// Add a participant to a trip
    pub async fn join_trip(&mut self, trip_id: &str, name: String) -> TripResult<Trip> {
        let mut trip = self.get_trip_required(trip_id).await?;

        self.validator.validate_participant(&trip, &name)?;
        trip.add_participant(name.clone());
        self.storage.update_trip(&trip).await?;

        tracing::info!(trip_id = %trip.id, participant = %name, "Participant joined trip");
        Ok(trip)
    }

    /// Remove a participant who has not paid for anything
    pub async fn leave_trip(&mut self, trip_id: &str, name: &str) -> TripResult<Trip> {
        let mut trip = self.get_trip_required(trip_id).await?;

        if !trip.has_participant(name) {
            return Err(TripError::UnknownParticipant {
                trip_id: trip.id.clone(),
                participant: name.to_string(),
            });
        }

        if trip.participants.len() == 1 {
            return Err(TripError::Validation(
                "The last participant cannot leave a trip".to_string(),
            ));
        }

        let expenses = self.storage.list_expenses(trip_id).await?;
        if expenses.iter().any(|e| e.paid_by == name) {
            return Err(TripError::Validation(format!(
                "'{}' has recorded expenses and cannot leave the trip",
                name
            )));
        }

        trip.remove_participant(name);
        self.storage.update_trip(&trip).await?;

        tracing::info!(trip_id = %trip.id, participant = %name, "Participant left trip");
        Ok(trip)
    }

    /// Rename a trip
    pub async fn rename_trip(&mut self, trip_id: &str, name: String) -> TripResult<Trip> {
        let mut trip = self.get_trip_required(trip_id).await?;

        trip.name = name;
        trip.updated_at = chrono::Utc::now().naive_utc();
        self.validator.validate_trip(&trip)?;
        self.storage.update_trip(&trip).await?;

        Ok(trip)
    }

    /// Delete a trip together with all of its expenses
    pub async fn delete_trip(&mut self, trip_id: &str) -> TripResult<()> {
        self.get_trip_required(trip_id).await?;

        let removed = self.storage.delete_trip_expenses(trip_id).await?;
        self.storage.delete_trip(trip_id).await?;

        tracing::info!(trip_id = %trip_id, removed_expenses = removed, "Deleted trip");
        Ok(())
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::require_text;
use crate::domain::farm::Farm;
use crate::domain::note::{Note, Notes};
use crate::repository::Entity;

use super::errors::ReservoirError;
use super::value_objects::{Bucket, WaterSource};

// ============================================================================
// Reservoir Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservoir {
    id: Uuid,
    name: String,
    /// Back-reference to the owning farm
    farm_id: Uuid,
    water_source: Option<WaterSource>,
    notes: Notes,
    created_at: DateTime<Utc>,
}

impl Reservoir {
    pub fn create(farm: &Farm, name: &str) -> Result<Self, ReservoirError> {
        let name = require_text(name, "name")?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            farm_id: farm.id(),
            water_source: None,
            notes: Notes::new(),
            created_at: Utc::now(),
        })
    }

    pub fn attach_bucket(&mut self, capacity: f64, initial_volume: f64) -> Result<(), ReservoirError> {
        self.ensure_unattached()?;
        let bucket = Bucket::new(capacity, initial_volume)?;
        self.water_source = Some(WaterSource::Bucket(bucket));
        Ok(())
    }

    pub fn attach_tap(&mut self) -> Result<(), ReservoirError> {
        self.ensure_unattached()?;
        self.water_source = Some(WaterSource::Tap);
        Ok(())
    }

    pub fn add_note(&mut self, content: &str) -> Result<&Note, ReservoirError> {
        Ok(self.notes.add(content)?)
    }

    pub fn remove_note(&mut self, note_id: Uuid) -> Result<Note, ReservoirError> {
        Ok(self.notes.remove(note_id)?)
    }

    fn ensure_unattached(&self) -> Result<(), ReservoirError> {
        match self.water_source {
            Some(_) => Err(ReservoirError::WaterSourceAlreadyAttached),
            None => Ok(()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn farm_id(&self) -> Uuid {
        self.farm_id
    }

    pub fn water_source(&self) -> Option<&WaterSource> {
        self.water_source.as_ref()
    }

    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Reservoir {
    const KIND: &'static str = "reservoir";

    fn id(&self) -> Uuid {
        self.id
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;

    fn create_test_reservoir() -> Reservoir {
        let farm = Farm::create("F1", "organic").unwrap();
        Reservoir::create(&farm, "R1").unwrap()
    }

    #[test]
    fn test_reservoir_creation() {
        let farm = Farm::create("F1", "organic").unwrap();
        let reservoir = Reservoir::create(&farm, "R1").unwrap();

        assert_eq!(reservoir.name(), "R1");
        assert_eq!(reservoir.farm_id(), farm.id());
        assert!(reservoir.water_source().is_none());
        assert!(reservoir.notes().is_empty());
    }

    #[test]
    fn test_reservoir_creation_with_empty_name_fails() {
        let farm = Farm::create("F1", "organic").unwrap();
        let result = Reservoir::create(&farm, "");
        assert_eq!(result.unwrap_err(), ReservoirError::Validation(ValidationError::Required("name")));
    }

    #[test]
    fn test_attach_tap_after_bucket_fails() {
        let mut reservoir = create_test_reservoir();
        reservoir.attach_bucket(10.0, 0.0).unwrap();

        let result = reservoir.attach_tap();
        assert_eq!(result.unwrap_err(), ReservoirError::WaterSourceAlreadyAttached);
        assert!(matches!(reservoir.water_source(), Some(WaterSource::Bucket(_))));
    }

    #[test]
    fn test_attach_bucket_after_tap_fails() {
        let mut reservoir = create_test_reservoir();
        reservoir.attach_tap().unwrap();

        let result = reservoir.attach_bucket(10.0, 0.0);
        assert_eq!(result.unwrap_err(), ReservoirError::WaterSourceAlreadyAttached);
        assert_eq!(reservoir.water_source(), Some(&WaterSource::Tap));
    }

    #[test]
    fn test_invalid_bucket_leaves_reservoir_unattached() {
        let mut reservoir = create_test_reservoir();

        let result = reservoir.attach_bucket(5.0, 6.0);
        assert_eq!(result.unwrap_err(), ReservoirError::Validation(ValidationError::InvalidOption("volume")));
        assert!(reservoir.water_source().is_none());

        reservoir.attach_tap().unwrap();
    }

    #[test]
    fn test_add_and_remove_note() {
        let mut reservoir = create_test_reservoir();

        let note_id = reservoir.add_note("hello").unwrap().id;
        assert_eq!(reservoir.notes().len(), 1);

        let removed = reservoir.remove_note(note_id).unwrap();
        assert_eq!(removed.content, "hello");
        assert!(reservoir.notes().is_empty());
    }

    #[test]
    fn test_remove_unknown_note_fails() {
        let mut reservoir = create_test_reservoir();
        reservoir.add_note("hello").unwrap();

        let result = reservoir.remove_note(Uuid::new_v4());
        assert_eq!(result.unwrap_err(), ReservoirError::Validation(ValidationError::NotFound("note")));
        assert_eq!(reservoir.notes().len(), 1);
    }
}

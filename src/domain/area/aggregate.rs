use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{require_text, ValidationError};
use crate::domain::farm::Farm;
use crate::domain::lookup::Lookup;
use crate::domain::note::{Note, Notes};
use crate::domain::reservoir::Reservoir;
use crate::repository::Entity;

use super::errors::AreaError;
use super::value_objects::{AreaLocation, AreaPhoto, AreaSize, AreaType};

// ============================================================================
// Area Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    id: Uuid,
    name: String,
    area_type: AreaType,
    farm_id: Uuid,
    /// Reservoir watering this area; a reference, not ownership
    reservoir_id: Option<Uuid>,
    size: Option<AreaSize>,
    location: Option<AreaLocation>,
    photo: Option<AreaPhoto>,
    notes: Notes,
    created_at: DateTime<Utc>,
}

impl Area {
    pub fn create(farm: &Farm, name: &str, area_type: &str) -> Result<Self, AreaError> {
        let name = require_text(name, "name")?;
        let area_type = resolve_area_type(area_type)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            area_type,
            farm_id: farm.id(),
            reservoir_id: None,
            size: None,
            location: None,
            photo: None,
            notes: Notes::new(),
            created_at: Utc::now(),
        })
    }

    pub fn change_size(&mut self, size: AreaSize) -> Result<(), AreaError> {
        if !self.area_type.allows(size.unit()) {
            return Err(ValidationError::InvalidOption("size_unit").into());
        }
        self.size = Some(size);
        Ok(())
    }

    pub fn change_location(&mut self, location: AreaLocation) {
        self.location = Some(location);
    }

    pub fn change_reservoir(&mut self, reservoir: &Reservoir) -> Result<(), AreaError> {
        if reservoir.farm_id() != self.farm_id {
            return Err(AreaError::ForeignReservoir {
                reservoir_id: reservoir.id(),
                owner_id: reservoir.farm_id(),
            });
        }
        self.reservoir_id = Some(reservoir.id());
        Ok(())
    }

    /// Record the photo of the latest upload, replacing any earlier one.
    pub fn attach_photo(&mut self, photo: AreaPhoto) {
        self.photo = Some(photo);
    }

    pub fn photo(&self) -> Result<&AreaPhoto, AreaError> {
        self.photo
            .as_ref()
            .ok_or(AreaError::Validation(ValidationError::NotFound("photo")))
    }

    pub fn add_note(&mut self, content: &str) -> Result<&Note, AreaError> {
        Ok(self.notes.add(content)?)
    }

    pub fn remove_note(&mut self, note_id: Uuid) -> Result<Note, AreaError> {
        Ok(self.notes.remove(note_id)?)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area_type(&self) -> AreaType {
        self.area_type
    }

    pub fn farm_id(&self) -> Uuid {
        self.farm_id
    }

    pub fn reservoir_id(&self) -> Option<Uuid> {
        self.reservoir_id
    }

    pub fn size(&self) -> Option<AreaSize> {
        self.size
    }

    pub fn location(&self) -> Option<AreaLocation> {
        self.location
    }

    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

pub(crate) fn resolve_area_type(code: &str) -> Result<AreaType, ValidationError> {
    let code = require_text(code, "type")?;
    AreaType::get(&code).ok_or(ValidationError::InvalidOption("type"))
}

impl Entity for Area {
    const KIND: &'static str = "area";

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
    use crate::domain::area::AreaUnit;

    fn create_test_farm() -> Farm {
        Farm::create("F1", "organic").unwrap()
    }

    #[test]
    fn test_area_creation() {
        let farm = create_test_farm();
        let area = Area::create(&farm, "North field", "growing").unwrap();

        assert_eq!(area.name(), "North field");
        assert_eq!(area.area_type(), AreaType::Growing);
        assert_eq!(area.farm_id(), farm.id());
        assert!(area.size().is_none());
        assert!(area.reservoir_id().is_none());
    }

    #[test]
    fn test_area_creation_with_unknown_type_fails() {
        let farm = create_test_farm();
        let result = Area::create(&farm, "A1", "orchard");
        assert_eq!(result.unwrap_err(), AreaError::Validation(ValidationError::InvalidOption("type")));
    }

    #[test]
    fn test_seeding_area_rejects_square_metres() {
        let farm = create_test_farm();
        let mut area = Area::create(&farm, "Nursery", "seeding").unwrap();

        let result = area.change_size(AreaSize::new(10.0, AreaUnit::SquareMetre).unwrap());
        assert_eq!(result.unwrap_err(), AreaError::Validation(ValidationError::InvalidOption("size_unit")));
        assert!(area.size().is_none());
    }

    #[test]
    fn test_change_size_with_allowed_unit() {
        let farm = create_test_farm();
        let mut area = Area::create(&farm, "Nursery", "seeding").unwrap();

        area.change_size(AreaSize::new(400.0, AreaUnit::SquareCentimetre).unwrap()).unwrap();
        assert_eq!(area.size().unwrap().value(), 400.0);
    }

    #[test]
    fn test_change_location() {
        let farm = create_test_farm();
        let mut area = Area::create(&farm, "A1", "growing").unwrap();

        area.change_location(AreaLocation::Outdoor);
        assert_eq!(area.location(), Some(AreaLocation::Outdoor));
    }

    #[test]
    fn test_change_reservoir_requires_same_farm() {
        let farm = create_test_farm();
        let other = Farm::create("F2", "hydroponic").unwrap();
        let mut area = Area::create(&farm, "A1", "growing").unwrap();

        let own = Reservoir::create(&farm, "R1").unwrap();
        let foreign = Reservoir::create(&other, "R2").unwrap();

        area.change_reservoir(&own).unwrap();
        assert_eq!(area.reservoir_id(), Some(own.id()));

        assert!(matches!(
            area.change_reservoir(&foreign).unwrap_err(),
            AreaError::ForeignReservoir { .. }
        ));
        assert_eq!(area.reservoir_id(), Some(own.id()));
    }

    #[test]
    fn test_photo_absent_is_not_found() {
        let farm = create_test_farm();
        let area = Area::create(&farm, "A1", "growing").unwrap();

        assert_eq!(area.photo().unwrap_err(), AreaError::Validation(ValidationError::NotFound("photo")));
    }

    #[test]
    fn test_reupload_replaces_photo() {
        let farm = create_test_farm();
        let mut area = Area::create(&farm, "A1", "growing").unwrap();

        area.attach_photo(AreaPhoto::new("first.jpg", "image/jpeg", 100, 10, 10).unwrap());
        area.attach_photo(AreaPhoto::new("second.png", "image/png", 200, 20, 20).unwrap());

        let photo = area.photo().unwrap();
        assert_eq!(photo.filename(), "second.png");
        assert_eq!(photo.width(), 20);
    }

    #[test]
    fn test_area_notes() {
        let farm = create_test_farm();
        let mut area = Area::create(&farm, "A1", "growing").unwrap();

        let first = area.add_note("hello").unwrap().id;
        let second = area.add_note("world").unwrap().id;
        assert_ne!(first, second);
        assert_eq!(area.notes().len(), 2);

        assert_eq!(
            area.remove_note(Uuid::new_v4()).unwrap_err(),
            AreaError::Validation(ValidationError::NotFound("note"))
        );
        area.remove_note(first).unwrap();
        assert_eq!(area.notes().len(), 1);
    }
}

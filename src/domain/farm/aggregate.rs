use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::area::Area;
use crate::domain::errors::{require_text, ValidationError};
use crate::domain::lookup::Lookup;
use crate::domain::reservoir::Reservoir;
use crate::repository::Entity;

use super::errors::FarmError;
use super::value_objects::{FarmType, GeoLocation, Region};

// ============================================================================
// Farm Aggregate
// ============================================================================
//
// Owns denormalized copies of its reservoirs and areas. The standalone
// Reservoir/Area aggregates stay authoritative; every change to one of them
// has to be pushed back here through `sync_reservoir_info`/`sync_area_info`
// (see `child_sync::mutate_and_sync`).
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    id: Uuid,
    name: String,
    farm_type: FarmType,
    geolocation: Option<GeoLocation>,
    region: Option<Region>,
    reservoirs: Vec<Reservoir>,
    areas: Vec<Area>,
    created_at: DateTime<Utc>,
}

impl Farm {
    pub fn create(name: &str, farm_type: &str) -> Result<Self, FarmError> {
        let name = require_text(name, "name")?;
        if farm_type.trim().is_empty() {
            return Err(ValidationError::Required("farm_type").into());
        }
        let farm_type = FarmType::get(farm_type).ok_or(ValidationError::InvalidOption("farm_type"))?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            farm_type,
            geolocation: None,
            region: None,
            reservoirs: Vec::new(),
            areas: Vec::new(),
            created_at: Utc::now(),
        })
    }

    pub fn change_geolocation(&mut self, latitude: &str, longitude: &str) -> Result<(), FarmError> {
        self.geolocation = Some(GeoLocation::parse(latitude, longitude)?);
        Ok(())
    }

    pub fn change_region(&mut self, country_code: &str, city_code: &str) -> Result<(), FarmError> {
        self.region = Some(Region::resolve(country_code, city_code)?);
        Ok(())
    }

    pub fn add_reservoir(&mut self, reservoir: &Reservoir) -> Result<(), FarmError> {
        if reservoir.farm_id() != self.id {
            return Err(FarmError::ForeignReservoir {
                reservoir_id: reservoir.id(),
                owner_id: reservoir.farm_id(),
            });
        }
        if self.reservoir(reservoir.id()).is_some() {
            return Err(FarmError::ReservoirAlreadyAdded(reservoir.id()));
        }

        self.reservoirs.push(reservoir.clone());
        Ok(())
    }

    pub fn add_area(&mut self, area: &Area) -> Result<(), FarmError> {
        if area.farm_id() != self.id {
            return Err(FarmError::ForeignArea {
                area_id: area.id(),
                owner_id: area.farm_id(),
            });
        }
        if self.area(area.id()).is_some() {
            return Err(FarmError::AreaAlreadyAdded(area.id()));
        }

        self.areas.push(area.clone());
        Ok(())
    }

    /// Replace the mirror of `reservoir`. Idempotent.
    pub fn sync_reservoir_info(&mut self, reservoir: &Reservoir) -> Result<(), FarmError> {
        let mirror = self
            .reservoirs
            .iter_mut()
            .find(|r| r.id() == reservoir.id())
            .ok_or(ValidationError::NotFound("reservoir"))?;

        *mirror = reservoir.clone();
        Ok(())
    }

    /// Replace the mirror of `area`. Idempotent.
    pub fn sync_area_info(&mut self, area: &Area) -> Result<(), FarmError> {
        let mirror = self
            .areas
            .iter_mut()
            .find(|a| a.id() == area.id())
            .ok_or(ValidationError::NotFound("area"))?;

        *mirror = area.clone();
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn farm_type(&self) -> FarmType {
        self.farm_type
    }

    pub fn geolocation(&self) -> Option<GeoLocation> {
        self.geolocation
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn reservoirs(&self) -> &[Reservoir] {
        &self.reservoirs
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn reservoir(&self, id: Uuid) -> Option<&Reservoir> {
        self.reservoirs.iter().find(|r| r.id() == id)
    }

    pub fn area(&self, id: Uuid) -> Option<&Area> {
        self.areas.iter().find(|a| a.id() == id)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Farm {
    const KIND: &'static str = "farm";

    fn id(&self) -> Uuid {
        self.id
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

use anyhow::Result;
use uuid::Uuid;

use crate::domain::area::{resolve_area_type, AreaLocation, AreaSize, AreaType};
use crate::domain::errors::{parse_number, require_text, ValidationError};
use crate::domain::farm::Farm;
use crate::domain::lookup::Lookup;
use crate::domain::reservoir::{Reservoir, WaterSourceType};
use crate::repository::{Entity, Repository, RepositoryError};

// ============================================================================
// Request Validators
// ============================================================================
//
// Run by the command handlers before any aggregate is touched. Pure
// validators return `ValidationError`; the existence checks go through the
// repository port and return `anyhow::Error` so storage failures pass
// through untouched.
//
// ============================================================================

pub fn validate_reservoir_name(raw: &str) -> Result<String, ValidationError> {
    require_text(raw, "name")
}

pub fn validate_water_source_type(raw: &str) -> Result<WaterSourceType, ValidationError> {
    let code = require_text(raw, "type")?;
    WaterSourceType::get(&code).ok_or(ValidationError::InvalidOption("type"))
}

/// Capacity is only read for buckets; a tap reports zero
pub fn validate_capacity(source_type: WaterSourceType, raw: &str) -> Result<f64, ValidationError> {
    match source_type {
        WaterSourceType::Tap => Ok(0.0),
        WaterSourceType::Bucket => {
            let capacity = parse_number(raw, "capacity")?;
            if capacity < 0.0 {
                return Err(ValidationError::InvalidOption("capacity"));
            }
            Ok(capacity)
        }
    }
}

pub fn validate_area_type(raw: &str) -> Result<AreaType, ValidationError> {
    resolve_area_type(raw)
}

/// Size value and unit, with the unit checked against the area type
pub fn validate_area_size(area_type: AreaType, value: &str, unit: &str) -> Result<AreaSize, ValidationError> {
    let size = AreaSize::parse(value, unit)?;
    if !area_type.allows(size.unit()) {
        return Err(ValidationError::InvalidOption("size_unit"));
    }
    Ok(size)
}

pub fn validate_area_location(raw: &str) -> Result<AreaLocation, ValidationError> {
    let code = require_text(raw, "location")?;
    AreaLocation::get(&code).ok_or(ValidationError::InvalidOption("location"))
}

pub fn validate_id(raw: &str, field: &'static str) -> Result<Uuid, ValidationError> {
    let raw = require_text(raw, field)?;
    Uuid::parse_str(&raw).map_err(|_| ValidationError::ParseFailed(field))
}

/// Callers parse the id first so they can take the farm's write lock
pub async fn validate_farm(farms: &dyn Repository<Farm>, farm_id: Uuid) -> Result<Farm> {
    find_existing(farms, farm_id).await
}

pub async fn validate_reservoir(reservoirs: &dyn Repository<Reservoir>, raw_id: &str) -> Result<Reservoir> {
    let id = validate_id(raw_id, "reservoir_id")?;
    find_existing(reservoirs, id).await
}

/// `NOT_FOUND(<kind>)` for a missing aggregate; other repository
/// failures propagate as they are
pub(crate) async fn find_existing<T: Entity>(repo: &dyn Repository<T>, id: Uuid) -> Result<T> {
    match repo.find_by_id(id).await {
        Ok(entity) => Ok(entity),
        Err(RepositoryError::NotFound { .. }) => Err(ValidationError::NotFound(T::KIND).into()),
        Err(e) => Err(e.into()),
    }
}

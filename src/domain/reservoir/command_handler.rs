use anyhow::Result;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::errors::{surface_validation, ValidationError};
use crate::domain::farm::{mutate_and_sync, save_with_farm};
use crate::domain::note::Note;
use crate::repository::Repositories;
use crate::validation::{
    find_existing, validate_capacity, validate_farm, validate_id, validate_reservoir_name,
    validate_water_source_type,
};

use super::aggregate::Reservoir;
use super::commands::CreateReservoir;
use super::value_objects::WaterSourceType;

// ============================================================================
// Reservoir Command Handler
// ============================================================================
//
// Orchestrates: validate -> Reservoir aggregate -> farm mirror -> repositories
//
// ============================================================================

pub struct ReservoirCommandHandler {
    repos: Repositories,
}

impl ReservoirCommandHandler {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Create a reservoir with its water source and add it to the farm.
    /// Buckets start empty.
    pub async fn create_reservoir(&self, farm_id: &str, form: CreateReservoir) -> Result<Reservoir> {
        let result = self.try_create_reservoir(farm_id, &form).await;
        if let Err(e) = &result {
            warn!(farm_id = %farm_id, name = %form.name, error = %e, "Reservoir rejected");
        }
        result.map_err(surface_validation)
    }

    async fn try_create_reservoir(&self, farm_id: &str, form: &CreateReservoir) -> Result<Reservoir> {
        let name = validate_reservoir_name(&form.name)?;
        let source_type = validate_water_source_type(&form.water_source_type)?;
        let capacity = validate_capacity(source_type, &form.capacity)?;

        let farm_id = validate_id(farm_id, "farm_id")?;

        let _guard = self.repos.lock_farm_writes(farm_id).await;
        let mut farm = validate_farm(self.repos.farms.as_ref(), farm_id).await?;

        let mut reservoir = Reservoir::create(&farm, &name)?;
        match source_type {
            WaterSourceType::Bucket => reservoir.attach_bucket(capacity, 0.0)?,
            WaterSourceType::Tap => reservoir.attach_tap()?,
        }
        farm.add_reservoir(&reservoir)?;

        save_with_farm(&self.repos, &reservoir, farm).await?;

        info!(
            reservoir_id = %reservoir.id(),
            farm_id = %reservoir.farm_id(),
            water_source = %source_type,
            "💧 Reservoir created"
        );
        Ok(reservoir)
    }

    pub async fn add_note(&self, reservoir_id: Uuid, content: &str) -> Result<(Reservoir, Note)> {
        let (reservoir, note) =
            mutate_and_sync(&self.repos, reservoir_id, |r: &mut Reservoir| r.add_note(content).cloned())
                .await
                .map_err(surface_validation)?;

        info!(reservoir_id = %reservoir_id, note_id = %note.id, "Reservoir note added");
        Ok((reservoir, note))
    }

    pub async fn remove_note(&self, reservoir_id: Uuid, note_id: &str) -> Result<(Reservoir, Note)> {
        let note_id = validate_id(note_id, "note_id")?;

        let (reservoir, note) =
            mutate_and_sync(&self.repos, reservoir_id, |r: &mut Reservoir| r.remove_note(note_id))
                .await
                .map_err(surface_validation)?;

        info!(reservoir_id = %reservoir_id, note_id = %note.id, "Reservoir note removed");
        Ok((reservoir, note))
    }

    /// The reservoir `reservoir_id`, provided it belongs to farm `farm_id`
    pub async fn find_by_id(&self, farm_id: Uuid, reservoir_id: Uuid) -> Result<Reservoir> {
        debug!(farm_id = %farm_id, reservoir_id = %reservoir_id, "Loading reservoir");

        find_existing(self.repos.farms.as_ref(), farm_id).await?;
        let reservoir = find_existing(self.repos.reservoirs.as_ref(), reservoir_id).await?;

        if reservoir.farm_id() != farm_id {
            return Err(ValidationError::NotFound("reservoir").into());
        }
        Ok(reservoir)
    }
}

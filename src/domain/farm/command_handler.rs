use anyhow::Result;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::area::Area;
use crate::domain::errors::surface_validation;
use crate::domain::lookup::Lookup;
use crate::domain::reservoir::Reservoir;
use crate::repository::Repositories;
use crate::validation::find_existing;

use super::aggregate::Farm;
use super::commands::CreateFarm;
use super::value_objects::FarmType;

// ============================================================================
// Farm Command Handler
// ============================================================================
//
// Orchestrates: raw form -> Farm aggregate -> repository
//
// ============================================================================

pub struct FarmCommandHandler {
    repos: Repositories,
}

impl FarmCommandHandler {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    pub async fn create_farm(&self, form: CreateFarm) -> Result<Farm> {
        let farm = match Self::build_farm(&form) {
            Ok(farm) => farm,
            Err(e) => {
                warn!(name = %form.name, error = %e, "Farm rejected");
                return Err(surface_validation(e));
            }
        };

        self.repos.farms.save(farm.clone()).await?;

        info!(farm_id = %farm.id(), farm_type = %farm.farm_type(), "🌱 Farm created");
        Ok(farm)
    }

    fn build_farm(form: &CreateFarm) -> Result<Farm> {
        let mut farm = Farm::create(&form.name, &form.farm_type)?;
        farm.change_geolocation(&form.latitude, &form.longitude)?;
        farm.change_region(&form.country_code, &form.city_code)?;
        Ok(farm)
    }

    pub async fn find_all(&self) -> Result<Vec<Farm>> {
        Ok(self.repos.farms.find_all().await?)
    }

    pub async fn find_by_id(&self, farm_id: Uuid) -> Result<Farm> {
        debug!(farm_id = %farm_id, "Loading farm");
        find_existing(self.repos.farms.as_ref(), farm_id).await
    }

    /// Reservoir mirrors held by the farm
    pub async fn list_reservoirs(&self, farm_id: Uuid) -> Result<Vec<Reservoir>> {
        let farm = self.find_by_id(farm_id).await?;
        Ok(farm.reservoirs().to_vec())
    }

    /// Area mirrors held by the farm
    pub async fn list_areas(&self, farm_id: Uuid) -> Result<Vec<Area>> {
        let farm = self.find_by_id(farm_id).await?;
        Ok(farm.areas().to_vec())
    }

    pub fn farm_types(&self) -> &'static [FarmType] {
        FarmType::list_all()
    }
}

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::errors::{surface_validation, ValidationError};
use crate::domain::lookup::Lookup;
use crate::repository::Repositories;
use crate::validation::find_existing;

use super::aggregate::Material;
use super::commands::{CreateMaterial, MaterialCommand};
use super::value_objects::{MaterialCategory, MaterialQuantity, MaterialType, MaterialTypeCodes, PlantType, PricePerUnit};

// ============================================================================
// Material Command Handler
// ============================================================================
//
// Orchestrates: raw form -> Material aggregate -> transition log -> repository
//
// ============================================================================

pub struct MaterialCommandHandler {
    repos: Repositories,
}

impl MaterialCommandHandler {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Create a material of `category`. Every field is parsed before the
    /// aggregate is built; optional fields are only recorded when given.
    pub async fn create_material(&self, category: &str, form: CreateMaterial) -> Result<Material> {
        let material = match Self::build_material(category, &form) {
            Ok(material) => material,
            Err(e) => {
                warn!(category = %category, name = %form.name, error = %e, "Material rejected");
                return Err(surface_validation(e));
            }
        };

        self.repos.materials.save(material.clone()).await?;

        info!(
            material_id = %material.id(),
            category = %material.material_type().category(),
            records = material.history().len(),
            "📦 Material created"
        );
        Ok(material)
    }

    fn build_material(category: &str, form: &CreateMaterial) -> Result<Material> {
        let codes = MaterialTypeCodes {
            plant_type: &form.plant_type,
            chemical_type: &form.chemical_type,
            container_type: &form.container_type,
        };
        let material_type = MaterialType::resolve(category, &codes)?;
        let price_per_unit = PricePerUnit::parse(&form.price_per_unit, &form.currency_code)?;
        let quantity = MaterialQuantity::parse(&form.quantity, &form.quantity_unit)?;
        let expiration_date = parse_expiration_date(&form.expiration_date)?;
        let is_expense = parse_is_expense(&form.is_expense)?;

        let mut material = Material::create(&form.name, price_per_unit, material_type, quantity)?;

        if let Some(date) = expiration_date {
            material.change_expiration_date(date)?;
        }
        if !form.notes.trim().is_empty() {
            material.change_notes(&form.notes)?;
        }
        if !form.produced_by.trim().is_empty() {
            material.change_produced_by(&form.produced_by)?;
        }
        if let Some(is_expense) = is_expense {
            material.change_is_expense(is_expense)?;
        }

        Ok(material)
    }

    /// Apply one field change to a stored material and save it. Changes to
    /// the same material run one at a time so no record is lost.
    pub async fn change_material(&self, material_id: Uuid, command: MaterialCommand) -> Result<Material> {
        let _guard = self.repos.lock_material_writes(material_id).await;

        let mut material = find_existing(self.repos.materials.as_ref(), material_id).await?;

        if let Err(e) = material.execute(command) {
            warn!(material_id = %material_id, error = %e, "Material change rejected");
            return Err(surface_validation(e.into()));
        }

        self.repos.materials.save(material.clone()).await?;

        if let Some(last) = material.history().last() {
            info!(material_id = %material_id, event = %last.event_type, version = last.sequence_number, "Material changed");
        }
        Ok(material)
    }

    pub async fn find_all(&self) -> Result<Vec<Material>> {
        Ok(self.repos.materials.find_all().await?)
    }

    /// Materials of the seed category
    pub async fn available_seeds(&self) -> Result<Vec<Material>> {
        let seeds: Vec<_> = self
            .find_all()
            .await?
            .into_iter()
            .filter(|m| m.material_type().category() == MaterialCategory::Seed)
            .collect();

        debug!(count = seeds.len(), "Available seeds");
        Ok(seeds)
    }

    pub fn plant_types(&self) -> &'static [PlantType] {
        PlantType::list_all()
    }
}

fn parse_expiration_date(raw: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::ParseFailed("expiration_date"))
}

fn parse_is_expense(raw: &str) -> Result<Option<bool>, ValidationError> {
    match raw.trim() {
        "" => Ok(None),
        "true" => Ok(Some(true)),
        "false" => Ok(Some(false)),
        _ => Err(ValidationError::ParseFailed("is_expense")),
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AssetsConfig;
use crate::domain::errors::{surface_validation, ValidationError};
use crate::domain::farm::{mutate_and_sync, save_with_farm};
use crate::domain::note::Note;
use crate::repository::Repositories;
use crate::validation::{
    find_existing, validate_area_location, validate_area_size, validate_area_type, validate_farm,
    validate_id, validate_reservoir,
};

use super::aggregate::Area;
use super::commands::{CreateArea, PhotoUpload};
use super::photo_store::PhotoStore;
use super::value_objects::AreaPhoto;

// ============================================================================
// Area Command Handler
// ============================================================================
//
// Orchestrates: validate -> Area aggregate -> optional photo upload
//               -> farm mirror -> repositories
//
// ============================================================================

pub struct AreaCommandHandler {
    repos: Repositories,
    photos: Arc<dyn PhotoStore>,
    config: AssetsConfig,
}

impl AreaCommandHandler {
    pub fn new(repos: Repositories, photos: Arc<dyn PhotoStore>, config: AssetsConfig) -> Self {
        Self { repos, photos, config }
    }

    pub async fn create_area(&self, farm_id: &str, form: CreateArea, photo: Option<PhotoUpload>) -> Result<Area> {
        let result = self.try_create_area(farm_id, &form, photo).await;
        if let Err(e) = &result {
            warn!(farm_id = %farm_id, name = %form.name, error = %e, "Area rejected");
        }
        result.map_err(surface_validation)
    }

    async fn try_create_area(&self, farm_id: &str, form: &CreateArea, photo: Option<PhotoUpload>) -> Result<Area> {
        let area_type = validate_area_type(&form.area_type)?;
        let size = validate_area_size(area_type, &form.size, &form.size_unit)?;
        let location = validate_area_location(&form.location)?;
        let farm_id = validate_id(farm_id, "farm_id")?;

        // Checked before the upload; the farm is reloaded under its lock
        let farm = validate_farm(self.repos.farms.as_ref(), farm_id).await?;
        let reservoir = validate_reservoir(self.repos.reservoirs.as_ref(), &form.reservoir_id).await?;
        let mut area = Area::create(&farm, &form.name, &form.area_type)?;
        area.change_size(size)?;
        area.change_location(location);
        area.change_reservoir(&reservoir)?;

        if let Some(upload) = photo {
            area.attach_photo(self.store_photo(&upload).await?);
        }

        let _guard = self.repos.lock_farm_writes(farm_id).await;
        let mut farm = validate_farm(self.repos.farms.as_ref(), farm_id).await?;
        farm.add_area(&area)?;
        save_with_farm(&self.repos, &area, farm).await?;

        info!(
            area_id = %area.id(),
            farm_id = %area.farm_id(),
            area_type = %area_type,
            "🌿 Area created"
        );
        Ok(area)
    }

    /// Upload the photo and read back its dimensions
    async fn store_photo(&self, upload: &PhotoUpload) -> Result<AreaPhoto> {
        let destination = self.config.area_photo_path(&upload.filename)?;

        self.photos.upload(upload, &destination).await?;
        let (width, height) = self.photos.dimensions(&destination).await?;

        debug!(path = %destination.display(), width, height, "Area photo stored");
        Ok(AreaPhoto::new(
            &upload.filename,
            &upload.mime_type,
            upload.bytes.len() as u64,
            width,
            height,
        )?)
    }

    pub async fn add_note(&self, area_id: Uuid, content: &str) -> Result<(Area, Note)> {
        let (area, note) = mutate_and_sync(&self.repos, area_id, |a: &mut Area| a.add_note(content).cloned())
            .await
            .map_err(surface_validation)?;

        info!(area_id = %area_id, note_id = %note.id, "Area note added");
        Ok((area, note))
    }

    pub async fn remove_note(&self, area_id: Uuid, note_id: &str) -> Result<(Area, Note)> {
        let note_id = validate_id(note_id, "note_id")?;

        let (area, note) = mutate_and_sync(&self.repos, area_id, |a: &mut Area| a.remove_note(note_id))
            .await
            .map_err(surface_validation)?;

        info!(area_id = %area_id, note_id = %note.id, "Area note removed");
        Ok((area, note))
    }

    /// The area `area_id`, provided it belongs to farm `farm_id`
    pub async fn find_by_id(&self, farm_id: Uuid, area_id: Uuid) -> Result<Area> {
        debug!(farm_id = %farm_id, area_id = %area_id, "Loading area");

        find_existing(self.repos.farms.as_ref(), farm_id).await?;
        let area = find_existing(self.repos.areas.as_ref(), area_id).await?;

        if area.farm_id() != farm_id {
            return Err(ValidationError::NotFound("area").into());
        }
        Ok(area)
    }

    /// Photo metadata and the path the file was stored at
    pub async fn get_photo(&self, farm_id: Uuid, area_id: Uuid) -> Result<(AreaPhoto, PathBuf)> {
        let area = self.find_by_id(farm_id, area_id).await?;
        let photo = area.photo().map_err(|e| surface_validation(e.into()))?.clone();
        let path = self.config.area_photo_path(photo.filename())?;
        Ok((photo, path))
    }
}

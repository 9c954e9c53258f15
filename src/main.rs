use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use farm_assets::config::AssetsConfig;
use farm_assets::domain::area::{AreaCommandHandler, CreateArea, PhotoStore, PhotoUpload};
use farm_assets::domain::farm::{CreateFarm, FarmCommandHandler};
use farm_assets::domain::material::{CreateMaterial, MaterialCommand, MaterialCommandHandler};
use farm_assets::domain::reservoir::{CreateReservoir, ReservoirCommandHandler};
use farm_assets::repository::Repositories;

/// Photo storage is provided by the host application; the demo runs without it
struct NoPhotoStore;

#[async_trait]
impl PhotoStore for NoPhotoStore {
    async fn upload(&self, _photo: &PhotoUpload, destination: &Path) -> anyhow::Result<()> {
        anyhow::bail!("No photo store configured for {}", destination.display())
    }

    async fn dimensions(&self, path: &Path) -> anyhow::Result<(u32, u32)> {
        anyhow::bail!("No photo store configured for {}", path.display())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO with DEBUG for this crate, overridable with RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,farm_assets=debug")))
        .init();

    tracing::info!("🚀 Starting farm assets demo");

    let config = AssetsConfig::from_env();
    let repos = Repositories::in_memory();

    let farms = FarmCommandHandler::new(repos.clone());
    let reservoirs = ReservoirCommandHandler::new(repos.clone());
    let areas = AreaCommandHandler::new(repos.clone(), Arc::new(NoPhotoStore), config);
    let materials = MaterialCommandHandler::new(repos.clone());

    // === 1. Farm ===
    let farm = farms
        .create_farm(CreateFarm {
            name: "F1".to_string(),
            farm_type: "organic".to_string(),
            latitude: "-6.2088".to_string(),
            longitude: "106.8456".to_string(),
            country_code: "ID".to_string(),
            city_code: "JK".to_string(),
        })
        .await?;
    let farm_id = farm.id().to_string();

    // === 2. Reservoir with a bucket, mirrored into the farm ===
    let reservoir = reservoirs
        .create_reservoir(
            &farm_id,
            CreateReservoir {
                name: "R1".to_string(),
                water_source_type: "bucket".to_string(),
                capacity: "100".to_string(),
            },
        )
        .await?;

    let (_, note) = reservoirs.add_note(reservoir.id(), "Refill every Monday").await?;
    tracing::info!(note_id = %note.id, "✅ Reservoir note added");

    // === 3. Area watered by the reservoir ===
    let area = areas
        .create_area(
            &farm_id,
            CreateArea {
                name: "Seedbed A".to_string(),
                area_type: "seeding".to_string(),
                reservoir_id: reservoir.id().to_string(),
                size: "1200".to_string(),
                size_unit: "cm2".to_string(),
                location: "indoor".to_string(),
            },
            None,
        )
        .await?;
    areas.add_note(area.id(), "Germination started").await?;

    // A seeding area measured in square metres is rejected
    let rejected = areas
        .create_area(
            &farm_id,
            CreateArea {
                name: "Seedbed B".to_string(),
                area_type: "seeding".to_string(),
                reservoir_id: reservoir.id().to_string(),
                size: "2".to_string(),
                size_unit: "m2".to_string(),
                location: "outdoor".to_string(),
            },
            None,
        )
        .await;
    if let Err(e) = rejected {
        tracing::info!(error = %e, "Seeding area in m2 rejected as expected");
    }

    let mirror = farms.find_by_id(farm.id()).await?;
    tracing::info!(
        farm_id = %mirror.id(),
        reservoirs = mirror.reservoirs().len(),
        areas = mirror.areas().len(),
        "🌾 Farm mirrors in sync"
    );

    // === 4. Material with its transition log ===
    let seed = materials
        .create_material(
            "seed",
            CreateMaterial {
                name: "Tomato seeds".to_string(),
                plant_type: "vegetable".to_string(),
                price_per_unit: "15000".to_string(),
                currency_code: "IDR".to_string(),
                quantity: "250".to_string(),
                quantity_unit: "seeds".to_string(),
                expiration_date: "2027-06-30".to_string(),
                is_expense: "true".to_string(),
                ..Default::default()
            },
        )
        .await?;

    let seed = materials
        .change_material(seed.id(), MaterialCommand::ChangeProducedBy { produced_by: "Local co-op".to_string() })
        .await?;

    for envelope in seed.history() {
        tracing::info!(
            seq = envelope.sequence_number,
            event = %envelope.event_type,
            "📜 Material record"
        );
    }

    let available = materials.available_seeds().await?;
    tracing::info!(count = available.len(), "🎉 Demo complete");

    Ok(())
}

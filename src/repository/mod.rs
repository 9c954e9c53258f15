use std::sync::Arc;

use tokio::sync::OwnedMutexGuard;
use uuid::Uuid;

use crate::domain::area::Area;
use crate::domain::farm::Farm;
use crate::domain::material::Material;
use crate::domain::reservoir::Reservoir;

mod in_memory;
mod locks;
mod pending;
#[cfg(test)]
pub(crate) mod testing;

pub use in_memory::InMemoryRepository;
pub use locks::WriteLocks;
pub use pending::Pending;

// ============================================================================
// Repository Port
// ============================================================================
//
// One repository per aggregate type. Every call returns immediately with a
// single-shot `Pending` handle; the storage work happens on its own task.
//
// ============================================================================

/// An aggregate the repositories can store
pub trait Entity: Clone + Send + Sync + 'static {
    /// Entity name used in NOT_FOUND failures, e.g. `farm`
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

pub trait Repository<T: Entity>: Send + Sync {
    /// Every stored aggregate in insertion order
    fn find_all(&self) -> Pending<Vec<T>>;

    /// Completes with `RepositoryError::NotFound` when no aggregate has `id`
    fn find_by_id(&self, id: Uuid) -> Pending<T>;

    /// Insert, or replace the stored aggregate with the same id
    fn save(&self, entity: T) -> Pending<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("NOT_FOUND: {entity} {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Repository task failed: {0}")]
    Task(String),
}

impl RepositoryError {
    pub fn not_found<T: Entity>(id: Uuid) -> Self {
        RepositoryError::NotFound { entity: T::KIND, id }
    }
}

// ============================================================================
// Repositories - the set a command handler works against
// ============================================================================

#[derive(Clone)]
pub struct Repositories {
    pub farms: Arc<dyn Repository<Farm>>,
    pub reservoirs: Arc<dyn Repository<Reservoir>>,
    pub areas: Arc<dyn Repository<Area>>,
    pub materials: Arc<dyn Repository<Material>>,
    farm_writes: Arc<WriteLocks>,
    material_writes: Arc<WriteLocks>,
}

impl Repositories {
    pub fn new(
        farms: Arc<dyn Repository<Farm>>,
        reservoirs: Arc<dyn Repository<Reservoir>>,
        areas: Arc<dyn Repository<Area>>,
        materials: Arc<dyn Repository<Material>>,
    ) -> Self {
        Self {
            farms,
            reservoirs,
            areas,
            materials,
            farm_writes: Arc::new(WriteLocks::new()),
            material_writes: Arc::new(WriteLocks::new()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
        )
    }

    /// Serializes writes that touch farm `farm_id` or one of its children.
    /// Writers of other farms proceed in parallel.
    pub async fn lock_farm_writes(&self, farm_id: Uuid) -> OwnedMutexGuard<()> {
        self.farm_writes.lock(farm_id).await
    }

    /// Serializes load, execute and save of material `material_id`
    pub async fn lock_material_writes(&self, material_id: Uuid) -> OwnedMutexGuard<()> {
        self.material_writes.lock(material_id).await
    }
}

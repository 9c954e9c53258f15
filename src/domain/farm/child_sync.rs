use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::area::Area;
use crate::domain::reservoir::Reservoir;
use crate::repository::{Entity, Repositories, Repository};
use crate::validation::find_existing;

use super::aggregate::Farm;
use super::errors::FarmError;

// ============================================================================
// Child Sync - keeps a farm's mirrors in step with its children
// ============================================================================
//
// Flow:
//   load child -> lock its farm -> reload child -> load farm
//   -> mutate child -> sync farm mirror -> save child -> save farm
//
// Nothing is saved unless both aggregates load and the mutation and sync
// succeed. A failed farm save after the child save is not rolled back.
//
// ============================================================================

/// A standalone aggregate mirrored inside its farm
pub trait FarmChild: Entity {
    fn farm_id(&self) -> Uuid;

    /// Replace this child's mirror in `farm`
    fn sync_into(&self, farm: &mut Farm) -> Result<(), FarmError>;

    fn repository(repos: &Repositories) -> &Arc<dyn Repository<Self>>;
}

impl FarmChild for Reservoir {
    fn farm_id(&self) -> Uuid {
        Reservoir::farm_id(self)
    }

    fn sync_into(&self, farm: &mut Farm) -> Result<(), FarmError> {
        farm.sync_reservoir_info(self)
    }

    fn repository(repos: &Repositories) -> &Arc<dyn Repository<Self>> {
        &repos.reservoirs
    }
}

impl FarmChild for Area {
    fn farm_id(&self) -> Uuid {
        Area::farm_id(self)
    }

    fn sync_into(&self, farm: &mut Farm) -> Result<(), FarmError> {
        farm.sync_area_info(self)
    }

    fn repository(repos: &Repositories) -> &Arc<dyn Repository<Self>> {
        &repos.areas
    }
}

/// Apply `mutate` to the stored child `child_id`, push the result into its
/// farm and persist both. Returns the saved child and whatever `mutate`
/// produced.
pub async fn mutate_and_sync<C, T, E, F>(repos: &Repositories, child_id: Uuid, mutate: F) -> Result<(C, T)>
where
    C: FarmChild,
    E: std::error::Error + Send + Sync + 'static,
    F: FnOnce(&mut C) -> Result<T, E>,
{
    let farm_id = find_existing(C::repository(repos).as_ref(), child_id).await?.farm_id();
    let _guard = repos.lock_farm_writes(farm_id).await;

    // Reload under the lock; a writer may have finished in between
    let mut child = find_existing(C::repository(repos).as_ref(), child_id).await?;
    let mut farm = find_existing(repos.farms.as_ref(), child.farm_id()).await?;

    let outcome = mutate(&mut child)?;
    child.sync_into(&mut farm)?;

    save_with_farm(repos, &child, farm).await?;

    debug!(entity = C::KIND, child_id = %child_id, "Child synced into farm");
    Ok((child, outcome))
}

/// Save `child`, then the farm mirroring it. Callers hold the write lock
/// of `farm`. A failed farm save leaves the child saved.
pub async fn save_with_farm<C: FarmChild>(repos: &Repositories, child: &C, farm: Farm) -> Result<()> {
    C::repository(repos).save(child.clone()).await?;

    let farm_id = farm.id();
    if let Err(e) = repos.farms.save(farm).await {
        error!(
            entity = C::KIND,
            child_id = %child.id(),
            farm_id = %farm_id,
            error = %e,
            "Child saved but farm mirror was not; mirror is stale"
        );
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;
    use crate::domain::reservoir::ReservoirError;
    use futures_util::future::join_all;
    use std::time::Duration;

    async fn create_test_farm_with_reservoirs(repos: &Repositories, names: &[&str]) -> (Farm, Vec<Reservoir>) {
        let mut farm = Farm::create("F1", "organic").unwrap();
        let mut reservoirs = Vec::new();

        for name in names {
            let mut reservoir = Reservoir::create(&farm, name).unwrap();
            reservoir.attach_tap().unwrap();
            farm.add_reservoir(&reservoir).unwrap();
            repos.reservoirs.save(reservoir.clone()).await.unwrap();
            reservoirs.push(reservoir);
        }

        repos.farms.save(farm.clone()).await.unwrap();
        (farm, reservoirs)
    }

    #[tokio::test]
    async fn test_note_lands_in_child_and_mirror() {
        let repos = Repositories::in_memory();
        let (farm, reservoirs) = create_test_farm_with_reservoirs(&repos, &["R1"]).await;
        let reservoir_id = reservoirs[0].id();

        let (saved, note) = mutate_and_sync(&repos, reservoir_id, |r: &mut Reservoir| {
            r.add_note("water is low").map(|n| n.clone())
        })
        .await
        .unwrap();

        assert_eq!(saved.notes().len(), 1);

        let stored = repos.reservoirs.find_by_id(reservoir_id).await.unwrap();
        assert_eq!(stored.notes().get(note.id), Some(&note));

        let farm = repos.farms.find_by_id(farm.id()).await.unwrap();
        assert_eq!(farm.reservoir(reservoir_id), Some(&stored));
    }

    #[tokio::test]
    async fn test_rejected_mutation_saves_nothing() {
        let repos = Repositories::in_memory();
        let (farm, reservoirs) = create_test_farm_with_reservoirs(&repos, &["R1"]).await;
        let reservoir_id = reservoirs[0].id();

        let err = mutate_and_sync(&repos, reservoir_id, |r: &mut Reservoir| r.remove_note(Uuid::new_v4()))
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ReservoirError>(),
            Some(&ReservoirError::Validation(ValidationError::NotFound("note")))
        );
        assert_eq!(repos.farms.find_by_id(farm.id()).await.unwrap(), farm);
        assert_eq!(repos.reservoirs.find_by_id(reservoir_id).await.unwrap(), reservoirs[0]);
    }

    #[tokio::test]
    async fn test_unknown_child_is_not_found() {
        let repos = Repositories::in_memory();

        let err = mutate_and_sync(&repos, Uuid::new_v4(), |a: &mut Area| a.add_note("x").map(|_| ()))
            .await
            .unwrap_err();

        assert_eq!(err.downcast_ref::<ValidationError>(), Some(&ValidationError::NotFound("area")));
    }

    #[tokio::test]
    async fn test_concurrent_child_updates_keep_every_mirror() {
        let repos = Repositories::in_memory();
        let (farm, reservoirs) = create_test_farm_with_reservoirs(&repos, &["R1", "R2", "R3", "R4"]).await;

        let updates = reservoirs.iter().map(|r| {
            let repos = repos.clone();
            let id = r.id();
            async move {
                mutate_and_sync(&repos, id, |r: &mut Reservoir| r.add_note("checked").map(|_| ())).await
            }
        });

        let results = join_all(updates).await;
        assert!(results.iter().all(|r| r.is_ok()));

        let farm = repos.farms.find_by_id(farm.id()).await.unwrap();
        for reservoir in &reservoirs {
            let mirror = farm.reservoir(reservoir.id()).unwrap();
            assert_eq!(mirror.notes().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_other_farms_are_not_blocked() {
        let repos = Repositories::in_memory();
        let (busy_farm, _) = create_test_farm_with_reservoirs(&repos, &["R1"]).await;
        let (_, reservoirs) = create_test_farm_with_reservoirs(&repos, &["R2"]).await;

        let _held = repos.lock_farm_writes(busy_farm.id()).await;

        let update = mutate_and_sync(&repos, reservoirs[0].id(), |r: &mut Reservoir| {
            r.add_note("independent").map(|_| ())
        });
        let result = tokio::time::timeout(Duration::from_secs(1), update).await;

        assert!(matches!(result, Ok(Ok(_))));
    }
}

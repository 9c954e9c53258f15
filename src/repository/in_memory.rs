use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{Entity, Pending, Repository, RepositoryError};

// ============================================================================
// In-Memory Repository
// ============================================================================
//
// Backing table is a Vec kept in insertion order. Writers take the write
// lock so they are serialized; readers share the read lock and clone out.
//
// ============================================================================

pub struct InMemoryRepository<T: Entity> {
    table: Arc<RwLock<Vec<T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn find_all(&self) -> Pending<Vec<T>> {
        let table = self.table.clone();
        Pending::spawn(async move {
            let rows = table.read().await;
            debug!(entity = T::KIND, count = rows.len(), "find_all");
            Ok(rows.clone())
        })
    }

    fn find_by_id(&self, id: Uuid) -> Pending<T> {
        let table = self.table.clone();
        Pending::spawn(async move {
            let rows = table.read().await;
            rows.iter()
                .find(|row| row.id() == id)
                .cloned()
                .ok_or_else(|| RepositoryError::not_found::<T>(id))
        })
    }

    fn save(&self, entity: T) -> Pending<()> {
        let table = self.table.clone();
        Pending::spawn(async move {
            let mut rows = table.write().await;
            let id = entity.id();

            match rows.iter_mut().find(|row| row.id() == id) {
                Some(row) => *row = entity,
                None => rows.push(entity),
            }

            debug!(entity = T::KIND, id = %id, "saved");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::join_all;

    #[derive(Debug, Clone, PartialEq)]
    struct Plot {
        id: Uuid,
        label: String,
    }

    impl Entity for Plot {
        const KIND: &'static str = "plot";

        fn id(&self) -> Uuid {
            self.id
        }
    }

    fn create_test_plot(label: &str) -> Plot {
        Plot {
            id: Uuid::new_v4(),
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_then_find_by_id() {
        let repo = InMemoryRepository::new();
        let plot = create_test_plot("north");

        repo.save(plot.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(plot.id).await.unwrap(), plot);
    }

    #[tokio::test]
    async fn test_find_by_unknown_id_is_not_found() {
        let repo = InMemoryRepository::<Plot>::new();
        let id = Uuid::new_v4();

        let err = repo.find_by_id(id).await.unwrap_err();
        assert_eq!(err, RepositoryError::NotFound { entity: "plot", id });
    }

    #[tokio::test]
    async fn test_save_replaces_and_keeps_order() {
        let repo = InMemoryRepository::new();
        let first = create_test_plot("first");
        let second = create_test_plot("second");

        repo.save(first.clone()).await.unwrap();
        repo.save(second.clone()).await.unwrap();

        let mut renamed = first.clone();
        renamed.label = "renamed".to_string();
        repo.save(renamed.clone()).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![renamed, second]);
    }

    #[tokio::test]
    async fn test_concurrent_saves_are_all_visible() {
        let repo = InMemoryRepository::new();
        let plots: Vec<_> = (0..50).map(|i| create_test_plot(&format!("bed-{i}"))).collect();

        let results = join_all(plots.iter().cloned().map(|p| repo.save(p))).await;
        assert!(results.iter().all(|r| r.is_ok()));

        let stored = repo.find_all().await.unwrap();
        assert_eq!(stored.len(), 50);
        for plot in &plots {
            assert!(stored.contains(plot));
        }
    }

    #[tokio::test]
    async fn test_dropped_save_still_lands() {
        let repo = InMemoryRepository::new();
        let plot = create_test_plot("detached");

        drop(repo.save(plot.clone()));

        // Poll until the detached task has run
        let mut found = None;
        for _ in 0..100 {
            if let Ok(p) = repo.find_by_id(plot.id).await {
                found = Some(p);
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(found, Some(plot));
    }
}

use std::sync::atomic::{AtomicBool, Ordering};

use uuid::Uuid;

use super::{Entity, InMemoryRepository, Pending, Repository, RepositoryError};

/// In-memory repository whose reads or saves can be switched to fail with
/// `RepositoryError::Storage`
pub(crate) struct FailingRepository<T: Entity> {
    inner: InMemoryRepository<T>,
    fail_reads: AtomicBool,
    fail_saves: AtomicBool,
}

impl<T: Entity> FailingRepository<T> {
    pub(crate) fn new() -> Self {
        Self {
            inner: InMemoryRepository::new(),
            fail_reads: AtomicBool::new(false),
            fail_saves: AtomicBool::new(false),
        }
    }

    pub(crate) fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    fn storage_failure<R: Send + 'static>(operation: &'static str) -> Pending<R> {
        Pending::spawn(async move { Err(RepositoryError::Storage(format!("{} {operation} unavailable", T::KIND))) })
    }
}

impl<T: Entity> Repository<T> for FailingRepository<T> {
    fn find_all(&self) -> Pending<Vec<T>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Self::storage_failure("read");
        }
        self.inner.find_all()
    }

    fn find_by_id(&self, id: Uuid) -> Pending<T> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Self::storage_failure("read");
        }
        self.inner.find_by_id(id)
    }

    fn save(&self, entity: T) -> Pending<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Self::storage_failure("save");
        }
        self.inner.save(entity)
    }
}

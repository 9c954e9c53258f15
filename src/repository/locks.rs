use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

// ============================================================================
// Write Locks - one async mutex per aggregate id
// ============================================================================
//
// Writers of the same aggregate queue behind each other; writers of
// different aggregates never contend. Idle entries are pruned on the next
// acquisition.
//
// ============================================================================

#[derive(Debug, Default)]
pub struct WriteLocks {
    entries: StdMutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl WriteLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, id: Uuid) -> OwnedMutexGuard<()> {
        let entry = {
            let mut entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            // Only the map holds an idle entry
            entries.retain(|_, lock| Arc::strong_count(lock) > 1);
            entries.entry(id).or_default().clone()
        };

        entry.lock_owned().await
    }
}

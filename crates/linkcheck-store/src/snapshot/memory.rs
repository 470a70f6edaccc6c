//! In-process snapshot slot
//!
//! Not durable. Used by tests and by embedders that own persistence.

use std::sync::RwLock;

use linkcheck_core::errors::{ExError, ExErrorKind};
use linkcheck_core::Snapshot;

use crate::errors::Result;
use crate::snapshot::SnapshotStore;

#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    slot: RwLock<Option<Snapshot>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let mut slot = self.slot.write().map_err(|_| {
            ExError::new(ExErrorKind::StorageWrite)
                .with_op("save_snapshot")
                .with_message("snapshot slot lock poisoned")
        })?;
        *slot = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Option<Snapshot> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }
}

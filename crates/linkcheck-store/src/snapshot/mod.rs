//! Single-slot snapshot persistence
//!
//! ## Responsibilities
//!
//! - Hold exactly one active snapshot; `save` replaces it wholesale
//! - Make `save` all-or-nothing
//! - Degrade `load` to `None` when the slot is empty or unreadable
//!
//! ## Non-Responsibilities
//!
//! - Building snapshots (handled by `linkcheck-core` ingestion)
//! - Authorization of replacements (handled by `linkcheck-engine`)

pub mod fs_store;
pub mod memory;
pub mod record;

pub use fs_store::FsSnapshotStore;
pub use memory::MemorySnapshotStore;
pub use record::{SheetRecord, SnapshotRecord};

use crate::errors::Result;
use linkcheck_core::Snapshot;

/// The one place the active snapshot lives
///
/// Callers get the store injected and call `load` per query, so a
/// replacement is visible to the next query without a restart.
pub trait SnapshotStore: Send + Sync {
    /// Replace the active snapshot
    ///
    /// # Errors
    ///
    /// `StorageWrite` when the new snapshot could not be made durable. The
    /// previous snapshot is still the one `load` returns.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;

    /// The active snapshot, or `None` when nothing usable is stored
    fn load(&self) -> Option<Snapshot>;
}

//! Persistence backend abstraction.
//!
//! This module defines the [`PersistenceAdapter`] capability trait. The core
//! never names a storage technology; it only loads a [`PersistedPanes`] record
//! at mount and saves one side at a time afterwards.
//!
//! # Design Philosophy
//!
//! The trait is the smallest surface the coordinator needs. Adapters report
//! failures as errors; deciding that a failure degrades to defaults is the job
//! of [`PersistenceBridge`](crate::storage::PersistenceBridge), not of each
//! adapter.

use crate::domain::{Result, Side};
use crate::storage::models::{PersistedPane, PersistedPanes};

/// Abstraction over durable pane state storage.
///
/// # Implementations
///
/// - [`JsonFilePersistence`](crate::storage::JsonFilePersistence): JSON file with atomic writes
/// - [`MemoryPersistence`](crate::storage::MemoryPersistence): shared in-memory record
/// - [`NoPersistence`](crate::storage::NoPersistence): stores nothing
///
/// # Examples
///
/// ```no_run
/// use sidepanes::domain::Side;
/// use sidepanes::storage::{JsonFilePersistence, PersistedOpenState, PersistedPane, PersistenceAdapter};
/// use std::path::PathBuf;
///
/// let mut storage = JsonFilePersistence::new(PathBuf::from("/tmp/sidepanes.json"))?;
/// storage.save(Side::Left, &PersistedPane { open_state: PersistedOpenState::Pinned, width: 360 })?;
/// let panes = storage.load()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait PersistenceAdapter: Send {
    /// Loads the persisted state of both panes.
    ///
    /// Returns `Ok(None)` when nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or decoded.
    fn load(&self) -> Result<Option<PersistedPanes>>;

    /// Saves the state of one pane.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&mut self, side: Side, pane: &PersistedPane) -> Result<()>;
}

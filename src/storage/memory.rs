//! In-memory and no-op persistence backends.

use crate::domain::{Result, Side};
use crate::storage::backend::PersistenceAdapter;
use crate::storage::models::{PersistedPane, PersistedPanes};
use std::sync::{Arc, Mutex, PoisonError};

/// Backend for contexts without persistence. Loads nothing, saves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPersistence;

impl PersistenceAdapter for NoPersistence {
    fn load(&self) -> Result<Option<PersistedPanes>> {
        Ok(None)
    }

    fn save(&mut self, _side: Side, _pane: &PersistedPane) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Shared {
    panes: PersistedPanes,
    saves: usize,
}

/// Shared in-memory record.
///
/// Clones see the same record, so one clone can be handed to a provider while
/// another inspects what was written, or seeds a second mount.
///
/// ```
/// use sidepanes::domain::Side;
/// use sidepanes::storage::{MemoryPersistence, PersistedOpenState, PersistedPane, PersistenceAdapter};
///
/// let store = MemoryPersistence::new();
/// let mut writer = store.clone();
/// writer
///     .save(Side::Right, &PersistedPane { open_state: PersistedOpenState::Pinned, width: 280 })
///     .unwrap();
/// assert_eq!(store.panes().right.map(|p| p.width), Some(280));
/// assert_eq!(store.save_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    shared: Arc<Mutex<Shared>>,
}

impl MemoryPersistence {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record pre-filled with `panes`.
    #[must_use]
    pub fn with_panes(panes: PersistedPanes) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared { panes, saves: 0 })),
        }
    }

    /// Current record.
    #[must_use]
    pub fn panes(&self) -> PersistedPanes {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner).panes
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner).saves
    }
}

impl PersistenceAdapter for MemoryPersistence {
    fn load(&self) -> Result<Option<PersistedPanes>> {
        let panes = self.panes();
        Ok((!panes.is_empty()).then_some(panes))
    }

    fn save(&mut self, side: Side, pane: &PersistedPane) -> Result<()> {
        let mut shared = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
        shared.panes.set(side, *pane);
        shared.saves += 1;
        Ok(())
    }
}

//! Edge adapter between the coordinator and a persistence backend.
//!
//! The bridge is where persistence failures stop. Loads that fail or find
//! nothing yield an empty record; saves that fail are logged and dropped. The
//! coordinator therefore never sees a persistence error.

use crate::domain::{PaneState, Side};
use crate::storage::backend::PersistenceAdapter;
use crate::storage::models::{PersistedPane, PersistedPanes};
use std::fmt;

/// Fault-absorbing wrapper around an optional [`PersistenceAdapter`].
pub struct PersistenceBridge {
    adapter: Option<Box<dyn PersistenceAdapter>>,
    last_written: PersistedPanes,
}

impl PersistenceBridge {
    /// Wraps an adapter. `None` disables persistence.
    #[must_use]
    pub fn new(adapter: Option<Box<dyn PersistenceAdapter>>) -> Self {
        Self {
            adapter,
            last_written: PersistedPanes::default(),
        }
    }

    /// Whether a backend is attached.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.adapter.is_some()
    }

    /// Loads the persisted record, degrading to an empty one on any failure.
    pub fn load(&mut self) -> PersistedPanes {
        let Some(adapter) = self.adapter.as_ref() else {
            return PersistedPanes::default();
        };

        match adapter.load() {
            Ok(Some(panes)) => {
                tracing::debug!(
                    has_left = panes.left.is_some(),
                    has_right = panes.right.is_some(),
                    "restored persisted panes"
                );
                self.last_written = panes;
                panes
            }
            Ok(None) => {
                tracing::debug!("no persisted panes, using defaults");
                PersistedPanes::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load persisted panes, using defaults");
                PersistedPanes::default()
            }
        }
    }

    /// Persists one pane's committed state.
    ///
    /// Temporary panes are written as closed. Writes identical to the last
    /// successful one are skipped. Returns `true` if a write happened.
    pub fn save(&mut self, side: Side, state: &PaneState) -> bool {
        let Some(adapter) = self.adapter.as_mut() else {
            return false;
        };

        let record = PersistedPane::from_state(state);
        if self.last_written.get(side) == Some(record) {
            tracing::trace!(side = %side, "persisted state unchanged, skipping write");
            return false;
        }

        match adapter.save(side, &record) {
            Ok(()) => {
                self.last_written.set(side, record);
                true
            }
            Err(e) => {
                tracing::warn!(side = %side, error = %e, "failed to persist pane state");
                false
            }
        }
    }
}

impl fmt::Debug for PersistenceBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceBridge")
            .field("enabled", &self.is_enabled())
            .field("last_written", &self.last_written)
            .finish()
    }
}

//! Persisted record models.
//!
//! These types are the storage-layer representation of pane state. They are
//! separate from [`PaneState`] so that what can be persisted is enforced by the
//! type system: there is no temporary open state and no closed style here.

use crate::domain::{OpenState, PaneState, Side};
use serde::{Deserialize, Serialize};

/// Open state as it may be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistedOpenState {
    /// Pane was closed (or only hover-revealed).
    Closed,
    /// Pane was pinned by the user.
    Pinned,
}

impl From<OpenState> for PersistedOpenState {
    /// A temporary pane persists as closed.
    fn from(state: OpenState) -> Self {
        match state {
            OpenState::Pinned => Self::Pinned,
            OpenState::Closed | OpenState::Temporary => Self::Closed,
        }
    }
}

impl From<PersistedOpenState> for OpenState {
    fn from(state: PersistedOpenState) -> Self {
        match state {
            PersistedOpenState::Pinned => Self::Pinned,
            PersistedOpenState::Closed => Self::Closed,
        }
    }
}

/// Durable state of one pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedPane {
    /// Committed open state.
    pub open_state: PersistedOpenState,

    /// Width in pixels. Clamped again when restored.
    pub width: u32,
}

impl PersistedPane {
    /// Projects a pane state onto what may be persisted.
    ///
    /// ```
    /// use sidepanes::domain::{OpenState, PaneState, Side};
    /// use sidepanes::storage::{PersistedOpenState, PersistedPane};
    ///
    /// let mut pane = PaneState::default_for(Side::Right);
    /// pane.open_state = OpenState::Temporary;
    /// assert_eq!(PersistedPane::from_state(&pane).open_state, PersistedOpenState::Closed);
    /// ```
    #[must_use]
    pub fn from_state(state: &PaneState) -> Self {
        Self {
            open_state: state.open_state.into(),
            width: state.width,
        }
    }
}

/// Persisted state of both panes. Either side may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedPanes {
    /// Left pane record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<PersistedPane>,

    /// Right pane record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<PersistedPane>,
}

impl PersistedPanes {
    /// Record of one side.
    #[must_use]
    pub const fn get(&self, side: Side) -> Option<PersistedPane> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Replaces the record of one side.
    pub fn set(&mut self, side: Side, pane: PersistedPane) {
        match side {
            Side::Left => self.left = Some(pane),
            Side::Right => self.right = Some(pane),
        }
    }

    /// `true` when neither side has a record.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

//! Persistence layer for committed pane state.
//!
//! Only pinned/closed state and widths are persisted; hover state and closed
//! style never reach storage.
//!
//! # Modules
//!
//! - `backend`: [`PersistenceAdapter`] capability trait
//! - `bridge`: Fault-absorbing adapter used by the coordinator
//! - `json`: JSON file backend with atomic writes
//! - `memory`: Shared in-memory backend and the no-op backend
//! - `models`: Persisted record types separate from domain state

pub mod backend;
pub mod bridge;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::PersistenceAdapter;
pub use bridge::PersistenceBridge;
pub use json::JsonFilePersistence;
pub use memory::{MemoryPersistence, NoPersistence};
pub use models::{PersistedOpenState, PersistedPane, PersistedPanes};

//! Application layer: the coordinator and the surfaces hosts talk to.
//!
//! ```text
//! host ─→ Event ─→ handle_event ─┐
//! host ─────────→ Sidepanes ─────┼─→ SidepanesProvider ─→ SidepanesCoordinator
//!                                │        (Rc<RefCell<_>>)
//! ```
//!
//! # Modules
//!
//! - [`coordinator`]: Composition of store, controllers and persistence
//! - [`handler`]: Serde-tagged host events and their dispatch
//! - [`provider`]: Mount owner and the context handle consumers hold

pub mod coordinator;
pub mod handler;
pub mod provider;

pub use coordinator::SidepanesCoordinator;
pub use handler::{handle_event, Event};
pub use provider::{Sidepanes, SidepanesProvider};

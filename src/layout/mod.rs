//! Layout layer: pane state, space arbitration and derived views.
//!
//! ```text
//! viewport samples ─→ ViewportMonitor ─┐
//!                                      ▼
//! open/close/width requests ─→ PaneStateStore ─→ LayoutSnapshot ─→ observers
//!                                      │
//!                                      └─ compute_panes_to_close (pure)
//! ```
//!
//! # Modules
//!
//! - [`arbiter`]: Which panes must close when space runs short
//! - [`store`]: Canonical pane pair with mutation and publish
//! - [`view`]: Derived read-only views for the rendering layer
//! - [`viewport`]: Trailing-debounced viewport width samples

pub mod arbiter;
pub mod store;
pub mod view;
pub mod viewport;

pub use arbiter::{
    compute_panes_to_close, has_enough_space, is_pin_blocked, ArbitrationInput, PanesToClose,
};
pub use store::{LayoutObserver, PaneStateStore, SubscriptionId, Transition};
pub use view::{central_pane_width, LayoutSnapshot, PaneView};
pub use viewport::ViewportMonitor;

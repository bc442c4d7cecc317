//! Domain layer for the side pane system.
//!
//! This module contains the core value types shared by every other layer: the
//! two [`Side`]s, each pane's [`OpenState`] and [`ClosedStyle`], the canonical
//! [`PaneState`], the per-pane [`PaneConfig`] overrides, and the width and timing
//! constants that govern behavior. Nothing here depends on timers, geometry or
//! persistence.
//!
//! # Organization
//!
//! - [`constants`]: Width bounds and timing defaults
//! - [`error`]: Error types and result aliases
//! - [`pane`]: Pane state model and derived values
//!
//! # Examples
//!
//! ```
//! use sidepanes::domain::{OpenState, PaneState, Side};
//!
//! let left = PaneState::default_for(Side::Left);
//! assert_eq!(left.open_state, OpenState::Pinned);
//! assert!(left.is_expanded());
//! ```

pub mod constants;
pub mod error;
pub mod pane;

pub use constants::*;
pub use error::{Result, SidepanesError, OUTSIDE_PROVIDER_MESSAGE};
pub use pane::{clamp_side_pane_width, ClosedStyle, OpenState, PaneConfig, PaneState, Side};

//! Width bounds and timing defaults.
//!
//! All widths are CSS-style pixels, all durations are milliseconds.

/// Width of a side pane when nothing else is configured or persisted.
pub const DEFAULT_SIDE_PANE_WIDTH: u32 = 320;

/// Smallest width a side pane may be resized to.
pub const MIN_SIDE_PANE_WIDTH: u32 = 200;

/// Largest width a side pane may be resized to.
pub const MAX_SIDE_PANE_WIDTH: u32 = 600;

/// Width of a closed pane rendered with [`ClosedStyle::Compact`](crate::domain::ClosedStyle::Compact).
pub const COMPACT_SIDE_PANE_WIDTH: u32 = 40;

/// Minimum width the central pane must keep before side panes get closed.
pub const CENTRAL_PANE_MIN_WIDTH: u32 = 400;

/// Upper bound of the derived central pane width.
pub const CENTRAL_PANE_MAX_WIDTH: u32 = 1200;

/// Trigger-zone dwell time before a hover reveals a pane.
pub const OPEN_DELAY_MS: u64 = 500;

/// Grace period after the pointer leaves a temporary pane before it closes.
pub const LEAVE_DEBOUNCE_MS: u64 = 100;

/// Window after a temporary pane closes during which hover cannot reopen it.
pub const REOPEN_COOLDOWN_MS: u64 = 500;

/// Trailing debounce applied to viewport width samples.
pub const VIEWPORT_DEBOUNCE_MS: u64 = 100;

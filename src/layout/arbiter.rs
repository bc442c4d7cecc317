//! Space arbitration between the two side panes and the central pane.
//!
//! The viewport offers one horizontal budget. When it is not enough for both
//! side panes plus the central pane at its minimum width, something has to
//! close. [`compute_panes_to_close`] decides what, and is deliberately a pure
//! function over four inputs so the whole decision table can be tested in
//! isolation.
//!
//! # Decision Rules
//!
//! - Enough space: nothing closes.
//! - A specific pane just changed and is open: the *other* pane closes if open.
//!   The pane that acted is never closed by its own action.
//! - A specific pane just changed and is closed: nothing closes. Closing never
//!   cascades.
//! - No specific pane changed (viewport shrink): every open pane closes.

use crate::domain::{PaneState, Side, CENTRAL_PANE_MIN_WIDTH};

/// Inputs to one arbitration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArbitrationInput {
    /// Whether the viewport fits both panes and the central minimum.
    pub enough_space: bool,

    /// Pane whose state just changed, or `None` for a viewport recomputation.
    pub pane_changed: Option<Side>,

    /// Whether the left pane is currently expanded.
    pub left_pane_open: bool,

    /// Whether the right pane is currently expanded.
    pub right_pane_open: bool,
}

/// Closures decided by one arbitration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanesToClose {
    /// Close the left pane.
    pub close_left: bool,
    /// Close the right pane.
    pub close_right: bool,
}

impl PanesToClose {
    /// Whether the given side must close.
    #[must_use]
    pub const fn closes(&self, side: Side) -> bool {
        match side {
            Side::Left => self.close_left,
            Side::Right => self.close_right,
        }
    }

    /// `true` when nothing needs to close.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.close_left && !self.close_right
    }
}

/// Decides which panes must close.
///
/// # Examples
///
/// ```
/// use sidepanes::domain::Side;
/// use sidepanes::layout::{compute_panes_to_close, ArbitrationInput, PanesToClose};
///
/// let result = compute_panes_to_close(ArbitrationInput {
///     enough_space: false,
///     pane_changed: Some(Side::Left),
///     left_pane_open: true,
///     right_pane_open: true,
/// });
/// assert_eq!(result, PanesToClose { close_left: false, close_right: true });
/// ```
#[must_use]
pub const fn compute_panes_to_close(input: ArbitrationInput) -> PanesToClose {
    if input.enough_space {
        return PanesToClose {
            close_left: false,
            close_right: false,
        };
    }

    match input.pane_changed {
        Some(Side::Left) => PanesToClose {
            close_left: false,
            close_right: input.left_pane_open && input.right_pane_open,
        },
        Some(Side::Right) => PanesToClose {
            close_left: input.right_pane_open && input.left_pane_open,
            close_right: false,
        },
        None => PanesToClose {
            close_left: input.left_pane_open,
            close_right: input.right_pane_open,
        },
    }
}

/// Whether the viewport fits both panes' footprints and the central minimum.
///
/// A temporary pane counts with its full width because it is rendered.
#[must_use]
pub fn has_enough_space(viewport_width: u32, left: &PaneState, right: &PaneState) -> bool {
    let required = u64::from(left.footprint())
        + u64::from(right.footprint())
        + u64::from(CENTRAL_PANE_MIN_WIDTH);
    u64::from(viewport_width) >= required
}

/// Whether pinning `pane` is impossible at this viewport width.
///
/// Pinning closes the other pane when space runs short, so only the other
/// pane's closed footprint is accounted for.
#[must_use]
pub fn is_pin_blocked(viewport_width: u32, pane: &PaneState, other: &PaneState) -> bool {
    let required = u64::from(pane.width)
        + u64::from(other.closed_footprint())
        + u64::from(CENTRAL_PANE_MIN_WIDTH);
    u64::from(viewport_width) < required
}

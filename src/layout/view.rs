//! Read-only layout views consumed by the rendering layer.
//!
//! Views are computed from the canonical pane pair on every read and carry no
//! behavior. They are `Serialize` so a host can mirror them straight into
//! element attributes (`data-expanded`, `data-temporary`, `--sidepane-width`).
//!
//! # Example
//!
//! ```rust
//! use sidepanes::domain::{PaneState, Side};
//! use sidepanes::layout::LayoutSnapshot;
//!
//! let snapshot = LayoutSnapshot::compute(
//!     1600,
//!     &PaneState::default_for(Side::Left),
//!     &PaneState::default_for(Side::Right),
//! );
//! assert_eq!(snapshot.left.rendered_width, 320);
//! assert_eq!(snapshot.right.rendered_width, 0);
//! assert_eq!(snapshot.central_width, 1200);
//! ```

use crate::domain::{
    ClosedStyle, OpenState, PaneState, Side, CENTRAL_PANE_MAX_WIDTH, CENTRAL_PANE_MIN_WIDTH,
};
use crate::layout::arbiter::is_pin_blocked;
use serde::Serialize;

/// Display information for one side pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaneView {
    /// Edge the pane is anchored to.
    pub side: Side,

    /// Current open state.
    pub open_state: OpenState,

    /// Expanded width in pixels.
    pub width: u32,

    /// Closed rendering style.
    pub closed_style: ClosedStyle,

    /// Pane is hover-revealed.
    pub is_temporary: bool,

    /// Pane shows its content (temporary or pinned).
    pub is_expanded: bool,

    /// Pixels the pane occupies right now (width, compact bar, or zero).
    pub rendered_width: u32,

    /// The toggle control cannot pin this pane at the current viewport width.
    pub pin_disabled: bool,
}

impl PaneView {
    /// Builds the view of `pane`, using `other` for the pin check.
    #[must_use]
    pub fn compute(side: Side, viewport_width: u32, pane: &PaneState, other: &PaneState) -> Self {
        Self {
            side,
            open_state: pane.open_state,
            width: pane.width,
            closed_style: pane.closed_style,
            is_temporary: pane.is_temporary(),
            is_expanded: pane.is_expanded(),
            rendered_width: pane.footprint(),
            pin_disabled: !pane.is_expanded() && is_pin_blocked(viewport_width, pane, other),
        }
    }

    /// The canonical state this view was computed from.
    #[must_use]
    pub const fn state(&self) -> PaneState {
        PaneState {
            open_state: self.open_state,
            width: self.width,
            closed_style: self.closed_style,
        }
    }
}

/// Complete layout for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutSnapshot {
    /// Last applied viewport width.
    pub viewport_width: u32,

    /// Left pane view.
    pub left: PaneView,

    /// Right pane view.
    pub right: PaneView,

    /// Derived width of the central pane.
    pub central_width: u32,
}

impl LayoutSnapshot {
    /// Computes the snapshot for a pane pair at a viewport width.
    #[must_use]
    pub fn compute(viewport_width: u32, left: &PaneState, right: &PaneState) -> Self {
        Self {
            viewport_width,
            left: PaneView::compute(Side::Left, viewport_width, left, right),
            right: PaneView::compute(Side::Right, viewport_width, right, left),
            central_width: central_pane_width(viewport_width, left, right),
        }
    }

    /// View of one side.
    #[must_use]
    pub const fn pane(&self, side: Side) -> &PaneView {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Viewport width minus both footprints, clamped to the central pane bounds.
#[must_use]
pub fn central_pane_width(viewport_width: u32, left: &PaneState, right: &PaneState) -> u32 {
    viewport_width
        .saturating_sub(left.footprint())
        .saturating_sub(right.footprint())
        .clamp(CENTRAL_PANE_MIN_WIDTH, CENTRAL_PANE_MAX_WIDTH)
}

//! Drag-to-resize for side panes.
//!
//! A drag is captured as a [`DragSession`] on begin and each pointer update is
//! turned into a clamped width. Widths apply live; only the width at drag end is
//! meant to be persisted. Cancelling returns the width the drag started from.

use crate::domain::{clamp_side_pane_width, Side};

/// An in-progress resize drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pane being resized.
    pub side: Side,
    /// Pane width when the drag began.
    pub start_width: u32,
    /// Pointer x when the drag began.
    pub start_x: f64,
    /// Width produced by the latest update.
    pub current_width: u32,
}

impl DragSession {
    /// Width for a pointer at `x`, clamped to the side pane bounds.
    ///
    /// The left pane's handle sits on its right edge, so moving right grows it;
    /// the right pane grows when the pointer moves left.
    #[must_use]
    pub fn width_at(&self, x: f64) -> u32 {
        let sign = match self.side {
            Side::Left => 1.0,
            Side::Right => -1.0,
        };
        // Float-to-int `as` saturates, which is the clamp we want here.
        #[allow(clippy::cast_possible_truncation)]
        let delta = ((x - self.start_x) * sign).round() as i64;
        clamp_side_pane_width(i64::from(self.start_width).saturating_add(delta))
    }
}

/// Tracks at most one resize drag at a time.
#[derive(Debug, Clone, Default)]
pub struct ResizeController {
    active: Option<DragSession>,
}

impl ResizeController {
    /// Creates an idle controller.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// The drag in progress.
    #[must_use]
    pub const fn active(&self) -> Option<&DragSession> {
        self.active.as_ref()
    }

    /// Starts a drag. A drag already in progress is abandoned in place.
    pub fn begin(&mut self, side: Side, x: f64, start_width: u32) {
        if let Some(previous) = self.active {
            tracing::debug!(side = %previous.side, "resize drag superseded");
        }
        tracing::debug!(side = %side, start_width = start_width, start_x = x, "resize drag started");
        self.active = Some(DragSession {
            side,
            start_width,
            start_x: x,
            current_width: start_width,
        });
    }

    /// Moves the drag. Returns the pane and its new width.
    pub fn update(&mut self, x: f64) -> Option<(Side, u32)> {
        let session = self.active.as_mut()?;
        session.current_width = session.width_at(x);
        Some((session.side, session.current_width))
    }

    /// Ends the drag. Returns the pane and its final width.
    pub fn end(&mut self, x: f64) -> Option<(Side, u32)> {
        let session = self.active.take()?;
        let width = session.width_at(x);
        tracing::debug!(side = %session.side, width = width, "resize drag ended");
        Some((session.side, width))
    }

    /// Aborts the drag. Returns the pane and the width to restore.
    pub fn cancel(&mut self) -> Option<(Side, u32)> {
        let session = self.active.take()?;
        tracing::debug!(side = %session.side, "resize drag cancelled");
        Some((session.side, session.start_width))
    }
}

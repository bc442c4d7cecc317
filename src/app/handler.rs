//! Host event dispatch.
//!
//! Hosts that prefer a message-style integration describe what happened as an
//! [`Event`] and pass it to [`handle_event`], which routes it to the matching
//! [`Sidepanes`] call. Events are serde-tagged so they can be scripted as JSON
//! lines (see the `sidepanes` replay binary).
//!
//! # Event Types
//!
//! - **Layout**: `ViewportResized`, `Tick`, `Advance`
//! - **Pointer**: `PointerMoved`, `PointerLeft`, `SetGeometry`
//! - **Commands**: `Open`, `Close`, `Toggle`, `SetWidth`
//! - **Drag**: `DragStart`, `DragMove`, `DragEnd`, `DragCancel`
//!
//! # Example
//!
//! ```rust
//! use sidepanes::app::{handle_event, Event};
//! use sidepanes::domain::{OpenState, Side};
//! use sidepanes::timing::ManualClock;
//! use sidepanes::{Config, SidepanesProvider};
//!
//! let provider = SidepanesProvider::with_clock(Config::default(), 1920, ManualClock::new());
//! let panes = provider.handle();
//!
//! let event: Event = serde_json::from_str(r#"{"type":"toggle","side":"right"}"#).unwrap();
//! assert!(handle_event(&panes, &event)?);
//! assert_eq!(panes.right_pane()?.open_state, OpenState::Pinned);
//! # Ok::<(), sidepanes::SidepanesError>(())
//! ```

use crate::app::provider::Sidepanes;
use crate::domain::error::Result;
use crate::domain::Side;
use crate::interaction::{EdgeGeometry, Point};
use crate::timing::Millis;
use serde::{Deserialize, Serialize};

/// Something the host observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// New viewport width sample.
    ViewportResized {
        /// Width in pixels.
        width: u32,
    },
    /// Pointer position sample.
    PointerMoved {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Pointer left the viewport.
    PointerLeft,
    /// Bounding boxes of one edge changed.
    SetGeometry {
        /// Edge.
        side: Side,
        /// New boxes.
        geometry: EdgeGeometry,
    },
    /// Pin a pane open.
    Open {
        /// Pane.
        side: Side,
    },
    /// Close a pane.
    Close {
        /// Pane.
        side: Side,
    },
    /// Click on a pane's toggle control.
    Toggle {
        /// Pane.
        side: Side,
    },
    /// Set a pane's width.
    SetWidth {
        /// Pane.
        side: Side,
        /// Requested width, clamped.
        width: u32,
    },
    /// Resize handle pressed.
    DragStart {
        /// Pane.
        side: Side,
        /// Pointer x.
        x: f64,
    },
    /// Resize handle moved.
    DragMove {
        /// Pointer x.
        x: f64,
    },
    /// Resize handle released.
    DragEnd {
        /// Pointer x.
        x: f64,
    },
    /// Resize drag aborted.
    DragCancel,
    /// Fire due timers.
    Tick,
    /// Time moved forward by `ms`.
    ///
    /// The handler only ticks; whoever owns the clock advances it before
    /// dispatching this event.
    Advance {
        /// Elapsed milliseconds.
        ms: Millis,
    },
}

/// Routes one event to the provider behind `panes`.
///
/// Returns `true` when the event changed pane state. Pointer, geometry and
/// drag-start events only arm controllers and report `false`.
///
/// # Errors
///
/// Fails with [`OutsideProvider`](crate::SidepanesError::OutsideProvider) or
/// [`Reentrant`](crate::SidepanesError::Reentrant) as the handle methods do.
pub fn handle_event(panes: &Sidepanes, event: &Event) -> Result<bool> {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    match *event {
        Event::ViewportResized { width } => panes.viewport_resized(width),
        Event::PointerMoved { x, y } => panes.pointer_moved(Point::new(x, y)).map(|()| false),
        Event::PointerLeft => panes.pointer_left().map(|()| false),
        Event::SetGeometry { side, geometry } => {
            panes.set_edge_geometry(side, geometry).map(|()| false)
        }
        Event::Open { side } => panes.open_pane(side),
        Event::Close { side } => panes.close_pane(side),
        Event::Toggle { side } => panes.toggle_pane(side),
        Event::SetWidth { side, width } => {
            let before = panes.pane(side)?.width;
            Ok(panes.set_pane_width(side, width)? != before)
        }
        Event::DragStart { side, x } => panes.begin_resize(side, x).map(|_| false),
        Event::DragMove { x } => panes.update_resize(x).map(|w| w.is_some()),
        Event::DragEnd { x } => panes.end_resize(x).map(|w| w.is_some()),
        Event::DragCancel => panes.cancel_resize().map(|w| w.is_some()),
        Event::Tick | Event::Advance { .. } => panes.tick(),
    }
}

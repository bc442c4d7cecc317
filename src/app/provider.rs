//! Provider and context handle.
//!
//! A [`SidepanesProvider`] owns one mounted [`SidepanesCoordinator`] for as long
//! as it lives. Consumers hold cheap [`Sidepanes`] handles obtained from it. A
//! handle keeps no state alive: once the provider is dropped, or for a handle
//! that was never bound, every call fails with
//! [`SidepanesError::OutsideProvider`].
//!
//! # Example
//!
//! ```rust
//! use sidepanes::domain::OpenState;
//! use sidepanes::timing::ManualClock;
//! use sidepanes::{Config, SidepanesProvider};
//!
//! let provider = SidepanesProvider::with_clock(Config::default(), 1920, ManualClock::new());
//! let panes = provider.handle();
//!
//! panes.open_right_pane()?;
//! assert_eq!(panes.right_pane()?.open_state, OpenState::Pinned);
//! # Ok::<(), sidepanes::SidepanesError>(())
//! ```

use crate::app::coordinator::SidepanesCoordinator;
use crate::domain::{Result, Side, SidepanesError};
use crate::interaction::{EdgeGeometry, HoverPhase, Point};
use crate::layout::{LayoutObserver, LayoutSnapshot, PaneView, SubscriptionId};
use crate::timing::{Clock, Millis, SystemClock};
use crate::Config;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Owner of a mounted coordinator.
#[derive(Debug)]
pub struct SidepanesProvider {
    inner: Rc<RefCell<SidepanesCoordinator>>,
}

impl SidepanesProvider {
    /// Mounts with the system clock.
    #[must_use]
    pub fn new(config: Config, viewport_width: u32) -> Self {
        Self::with_clock(config, viewport_width, SystemClock::new())
    }

    /// Mounts with an explicit clock.
    #[must_use]
    pub fn with_clock(config: Config, viewport_width: u32, clock: impl Clock + 'static) -> Self {
        let coordinator = SidepanesCoordinator::mount(config, viewport_width, Box::new(clock));
        Self {
            inner: Rc::new(RefCell::new(coordinator)),
        }
    }

    /// A handle bound to this provider.
    #[must_use]
    pub fn handle(&self) -> Sidepanes {
        Sidepanes {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// Context handle to a [`SidepanesProvider`].
///
/// `Sidepanes::default()` is unbound and behaves like a handle used outside
/// any provider.
#[derive(Debug, Clone, Default)]
pub struct Sidepanes {
    inner: Weak<RefCell<SidepanesCoordinator>>,
}

impl Sidepanes {
    fn read<R>(&self, f: impl FnOnce(&SidepanesCoordinator) -> R) -> Result<R> {
        let inner = self.inner.upgrade().ok_or(SidepanesError::OutsideProvider)?;
        let coordinator = inner.try_borrow().map_err(|_| SidepanesError::Reentrant)?;
        Ok(f(&coordinator))
    }

    fn write<R>(&self, f: impl FnOnce(&mut SidepanesCoordinator) -> R) -> Result<R> {
        let inner = self.inner.upgrade().ok_or(SidepanesError::OutsideProvider)?;
        let mut coordinator = inner.try_borrow_mut().map_err(|_| SidepanesError::Reentrant)?;
        Ok(f(&mut coordinator))
    }

    /// Whether a live provider backs this handle.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Left pane view.
    ///
    /// # Errors
    ///
    /// [`SidepanesError::OutsideProvider`] without a live provider,
    /// [`SidepanesError::Reentrant`] from inside an observer.
    pub fn left_pane(&self) -> Result<PaneView> {
        self.read(SidepanesCoordinator::left_pane)
    }

    /// Right pane view.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn right_pane(&self) -> Result<PaneView> {
        self.read(SidepanesCoordinator::right_pane)
    }

    /// View of either pane.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn pane(&self, side: Side) -> Result<PaneView> {
        self.read(|c| c.pane(side))
    }

    /// Derived central region width.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn central_pane_width(&self) -> Result<u32> {
        self.read(SidepanesCoordinator::central_pane_width)
    }

    /// Full derived layout.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn snapshot(&self) -> Result<LayoutSnapshot> {
        self.read(SidepanesCoordinator::snapshot)
    }

    /// Hover phase of one edge.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn hover_phase(&self, side: Side) -> Result<HoverPhase> {
        self.read(|c| c.hover_phase(side))
    }

    /// Pins the left pane open.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn open_left_pane(&self) -> Result<bool> {
        self.write(SidepanesCoordinator::open_left_pane)
    }

    /// Closes the left pane.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn close_left_pane(&self) -> Result<bool> {
        self.write(SidepanesCoordinator::close_left_pane)
    }

    /// Pins the right pane open.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn open_right_pane(&self) -> Result<bool> {
        self.write(SidepanesCoordinator::open_right_pane)
    }

    /// Closes the right pane.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn close_right_pane(&self) -> Result<bool> {
        self.write(SidepanesCoordinator::close_right_pane)
    }

    /// Pins either pane open.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn open_pane(&self, side: Side) -> Result<bool> {
        self.write(|c| c.open_pane(side))
    }

    /// Closes either pane.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn close_pane(&self, side: Side) -> Result<bool> {
        self.write(|c| c.close_pane(side))
    }

    /// Toggle control click.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn toggle_pane(&self, side: Side) -> Result<bool> {
        self.write(|c| c.toggle_pane(side))
    }

    /// Sets the left pane's width (clamped). Returns the stored width.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn set_left_pane_width(&self, px: u32) -> Result<u32> {
        self.write(|c| c.set_left_pane_width(px))
    }

    /// Sets the right pane's width (clamped). Returns the stored width.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn set_right_pane_width(&self, px: u32) -> Result<u32> {
        self.write(|c| c.set_right_pane_width(px))
    }

    /// Sets either pane's width (clamped).
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn set_pane_width(&self, side: Side, px: u32) -> Result<u32> {
        self.write(|c| c.set_pane_width(side, px))
    }

    /// Reports a viewport width sample.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn viewport_resized(&self, width: u32) -> Result<bool> {
        self.write(|c| c.viewport_resized(width))
    }

    /// Replaces one edge's bounding boxes.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn set_edge_geometry(&self, side: Side, geometry: EdgeGeometry) -> Result<()> {
        self.write(|c| c.set_edge_geometry(side, geometry))
    }

    /// Reports a pointer position.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn pointer_moved(&self, point: Point) -> Result<()> {
        self.write(|c| c.pointer_moved(point))
    }

    /// Reports that the pointer left the viewport.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn pointer_left(&self) -> Result<()> {
        self.write(SidepanesCoordinator::pointer_left)
    }

    /// Starts a resize drag.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn begin_resize(&self, side: Side, x: f64) -> Result<bool> {
        self.write(|c| c.begin_resize(side, x))
    }

    /// Moves the resize drag.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn update_resize(&self, x: f64) -> Result<Option<u32>> {
        self.write(|c| c.update_resize(x))
    }

    /// Ends the resize drag.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn end_resize(&self, x: f64) -> Result<Option<u32>> {
        self.write(|c| c.end_resize(x))
    }

    /// Aborts the resize drag.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn cancel_resize(&self) -> Result<Option<u32>> {
        self.write(SidepanesCoordinator::cancel_resize)
    }

    /// Fires due timers.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn tick(&self) -> Result<bool> {
        self.write(SidepanesCoordinator::tick)
    }

    /// Earliest pending timer deadline.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn next_deadline(&self) -> Result<Option<Millis>> {
        self.read(SidepanesCoordinator::next_deadline)
    }

    /// Registers a layout observer.
    ///
    /// Observers must not call back into a handle; such calls fail with
    /// [`SidepanesError::Reentrant`].
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn subscribe(&self, observer: impl LayoutObserver + 'static) -> Result<SubscriptionId> {
        self.write(|c| c.subscribe(observer))
    }

    /// Removes a layout observer.
    ///
    /// # Errors
    ///
    /// As [`left_pane`](Self::left_pane).
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool> {
        self.write(|c| c.unsubscribe(id))
    }
}

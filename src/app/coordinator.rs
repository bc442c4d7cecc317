//! The composed side pane controller.
//!
//! [`SidepanesCoordinator`] wires the pane store, viewport monitor, both hover
//! controllers, the resize controller and the persistence bridge together. It
//! is the only writer of pane state: host events and timer expiries enter here,
//! get turned into store mutations, and every resulting [`Transition`] is fed
//! back to the hover controllers and persisted.
//!
//! # Event Flow
//!
//! ```text
//! pointer ─→ HoverIntentController ─┐ (intents on tick)
//! toggle/API ───────────────────────┼─→ PaneStateStore ─→ Transition ─┬─→ hover controllers
//! viewport ─→ ViewportMonitor ──────┘        │                        └─→ PersistenceBridge
//! drag ─→ ResizeController ─→ set_width ─────┘
//! ```
//!
//! Hosts normally reach the coordinator through a
//! [`SidepanesProvider`](crate::SidepanesProvider) handle.

use crate::domain::{clamp_side_pane_width, OpenState, PaneConfig, PaneState, Side};
use crate::interaction::{
    EdgeGeometry, HoverIntent, HoverIntentController, HoverPhase, Point, PointerZone,
    ResizeController,
};
use crate::layout::{
    LayoutObserver, LayoutSnapshot, PaneStateStore, PaneView, SubscriptionId, Transition,
    ViewportMonitor,
};
use crate::storage::{PersistedPane, PersistedPanes, PersistenceBridge};
use crate::timing::{Clock, Millis};
use crate::Config;
use std::fmt;

/// Upper bound on timer rounds fired by one [`SidepanesCoordinator::tick`].
const MAX_TIMER_ROUNDS: usize = 32;

/// Owns all side pane state and the controllers acting on it.
pub struct SidepanesCoordinator {
    store: PaneStateStore,
    viewport: ViewportMonitor,
    left_hover: HoverIntentController,
    right_hover: HoverIntentController,
    resize: ResizeController,
    clock: Box<dyn Clock>,
    bridge: PersistenceBridge,
}

impl SidepanesCoordinator {
    /// Mounts the panes.
    ///
    /// Each field of each pane is taken from explicit configuration, then from
    /// persisted storage, then from the built-in defaults. The initial viewport
    /// width is applied right away, without debounce, so panes that do not fit
    /// start closed. That initial arbitration is not persisted.
    #[must_use]
    pub fn mount(config: Config, viewport_width: u32, clock: Box<dyn Clock>) -> Self {
        let _span = tracing::debug_span!("mount", viewport_width = viewport_width).entered();

        let Config {
            persistence,
            default_left_pane,
            default_right_pane,
            timing,
            sensors,
            ..
        } = config;

        let mut bridge = PersistenceBridge::new(persistence);
        let persisted = bridge.load();

        let left = resolve_pane(Side::Left, &default_left_pane, &persisted);
        let right = resolve_pane(Side::Right, &default_right_pane, &persisted);
        tracing::debug!(left = ?left, right = ?right, "initial pane state resolved");

        let mut store = PaneStateStore::new(left, right, viewport_width);
        let closed = store.apply_viewport_width(viewport_width);
        if !closed.is_empty() {
            tracing::debug!(closed = closed.len(), "panes closed to fit initial viewport");
        }

        let hover = timing.hover();
        Self {
            store,
            viewport: ViewportMonitor::new(timing.viewport_debounce_ms),
            left_hover: HoverIntentController::new(Side::Left, sensors.dead_zone(Side::Left), hover),
            right_hover: HoverIntentController::new(
                Side::Right,
                sensors.dead_zone(Side::Right),
                hover,
            ),
            resize: ResizeController::new(),
            clock,
            bridge,
        }
    }

    /// Current time on the injected clock.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    // ---- reads ----

    /// Canonical state of one pane.
    #[must_use]
    pub const fn state(&self, side: Side) -> PaneState {
        self.store.state(side)
    }

    /// View of one pane.
    #[must_use]
    pub fn pane(&self, side: Side) -> PaneView {
        *self.store.snapshot().pane(side)
    }

    /// View of the left pane.
    #[must_use]
    pub fn left_pane(&self) -> PaneView {
        self.pane(Side::Left)
    }

    /// View of the right pane.
    #[must_use]
    pub fn right_pane(&self) -> PaneView {
        self.pane(Side::Right)
    }

    /// Derived width of the central region.
    #[must_use]
    pub fn central_pane_width(&self) -> u32 {
        self.store.snapshot().central_width
    }

    /// Full derived layout.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        self.store.snapshot()
    }

    /// Last applied viewport width.
    #[must_use]
    pub const fn viewport_width(&self) -> u32 {
        self.store.viewport_width()
    }

    /// Hover phase of one edge.
    #[must_use]
    pub fn hover_phase(&self, side: Side) -> HoverPhase {
        self.hover(side).phase(self.store.state(side).open_state)
    }

    /// Last classified sensor zone of one edge.
    #[must_use]
    pub fn pointer_zone(&self, side: Side) -> PointerZone {
        self.hover(side).zone()
    }

    /// Pane being resized, if a drag is in progress.
    #[must_use]
    pub fn resizing(&self) -> Option<Side> {
        self.resize.active().map(|session| session.side)
    }

    // ---- open state ----

    /// Pins one pane open. Arbitration may close the other pane.
    ///
    /// Returns `true` if any pane changed.
    pub fn open_pane(&mut self, side: Side) -> bool {
        let _span = tracing::debug_span!("open_pane", side = %side).entered();
        let now = self.clock.now();
        self.hover_mut(side).cancel_timers();
        self.transition(side, OpenState::Pinned, now)
    }

    /// Closes one pane.
    pub fn close_pane(&mut self, side: Side) -> bool {
        let _span = tracing::debug_span!("close_pane", side = %side).entered();
        let now = self.clock.now();
        self.hover_mut(side).cancel_timers();
        self.transition(side, OpenState::Closed, now)
    }

    /// Pins the left pane open.
    pub fn open_left_pane(&mut self) -> bool {
        self.open_pane(Side::Left)
    }

    /// Closes the left pane.
    pub fn close_left_pane(&mut self) -> bool {
        self.close_pane(Side::Left)
    }

    /// Pins the right pane open.
    pub fn open_right_pane(&mut self) -> bool {
        self.open_pane(Side::Right)
    }

    /// Closes the right pane.
    pub fn close_right_pane(&mut self) -> bool {
        self.close_pane(Side::Right)
    }

    /// Handles a click on a pane's toggle control.
    ///
    /// A closed or temporary pane is pinned, a pinned pane is closed. Pinning
    /// a closed pane whose pin is blocked by the viewport is ignored.
    pub fn toggle_pane(&mut self, side: Side) -> bool {
        let _span = tracing::debug_span!("toggle_pane", side = %side).entered();
        let now = self.clock.now();
        let view = self.pane(side);

        let target = match view.open_state {
            OpenState::Pinned => OpenState::Closed,
            OpenState::Closed | OpenState::Temporary => OpenState::Pinned,
        };
        if view.pin_disabled {
            tracing::debug!(side = %side, "toggle ignored, not enough space to pin");
            return false;
        }

        self.hover_mut(side).cancel_timers();
        self.transition(side, target, now)
    }

    // ---- width ----

    /// Sets one pane's width, clamped to the side pane bounds, and persists it.
    ///
    /// Returns the stored width.
    pub fn set_pane_width(&mut self, side: Side, px: u32) -> u32 {
        let width = self.store.set_width(side, px);
        self.bridge.save(side, &self.store.state(side));
        width
    }

    /// Sets the left pane's width.
    pub fn set_left_pane_width(&mut self, px: u32) -> u32 {
        self.set_pane_width(Side::Left, px)
    }

    /// Sets the right pane's width.
    pub fn set_right_pane_width(&mut self, px: u32) -> u32 {
        self.set_pane_width(Side::Right, px)
    }

    // ---- resize drag ----

    /// Starts a resize drag on an expanded pane.
    ///
    /// Returns `false` (and starts nothing) if the pane is closed.
    pub fn begin_resize(&mut self, side: Side, x: f64) -> bool {
        let state = self.store.state(side);
        if !state.is_expanded() {
            tracing::debug!(side = %side, "resize ignored on closed pane");
            return false;
        }
        self.resize.begin(side, x, state.width);
        true
    }

    /// Moves the drag; the new width applies immediately.
    pub fn update_resize(&mut self, x: f64) -> Option<u32> {
        let (side, width) = self.resize.update(x)?;
        Some(self.store.set_width(side, width))
    }

    /// Ends the drag and persists the final width.
    pub fn end_resize(&mut self, x: f64) -> Option<u32> {
        let (side, width) = self.resize.end(x)?;
        let width = self.store.set_width(side, width);
        self.bridge.save(side, &self.store.state(side));
        Some(width)
    }

    /// Aborts the drag and restores the starting width without persisting.
    pub fn cancel_resize(&mut self) -> Option<u32> {
        let (side, width) = self.resize.cancel()?;
        Some(self.store.set_width(side, width))
    }

    // ---- viewport & pointer ----

    /// Reports a viewport width sample.
    ///
    /// With a zero debounce the width applies immediately; otherwise it
    /// applies on the [`tick`](Self::tick) after the debounce window.
    pub fn viewport_resized(&mut self, width: u32) -> bool {
        let now = self.clock.now();
        match self.viewport.observe(width, now) {
            Some(width) => self.apply_viewport(width, now),
            None => false,
        }
    }

    /// Replaces one edge's bounding boxes.
    pub fn set_edge_geometry(&mut self, side: Side, geometry: EdgeGeometry) {
        self.hover_mut(side).set_geometry(geometry);
    }

    /// Reports a pointer position.
    pub fn pointer_moved(&mut self, point: Point) {
        self.feed_pointer(Some(point));
    }

    /// Reports that the pointer left the viewport.
    pub fn pointer_left(&mut self) {
        self.feed_pointer(None);
    }

    fn feed_pointer(&mut self, point: Option<Point>) {
        let now = self.clock.now();
        tracing::trace!(point = ?point, now = now, "pointer sample");
        for side in Side::ALL {
            let open_state = self.store.state(side).open_state;
            self.hover_mut(side).pointer_moved(point, open_state, now);
        }
    }

    // ---- timers ----

    /// Fires every timer due at the current clock time, in deadline order.
    ///
    /// Each timer fires at its own deadline, so a host that ticks late still
    /// observes the same transitions as one that ticks on time. Returns `true`
    /// if any pane changed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = false;

        for _ in 0..MAX_TIMER_ROUNDS {
            let Some(due) = self.next_deadline().filter(|due| *due <= now) else {
                return changed;
            };
            changed |= self.fire_timers(due);
        }

        tracing::warn!(now = now, "timer rounds exhausted, remaining timers deferred");
        changed
    }

    fn fire_timers(&mut self, at: Millis) -> bool {
        let mut changed = false;

        if let Some(width) = self.viewport.poll(at) {
            changed |= self.apply_viewport(width, at);
        }

        for side in Side::ALL {
            let open_state = self.store.state(side).open_state;
            let target = match self.hover_mut(side).tick(open_state, at) {
                Some(HoverIntent::Reveal) => OpenState::Temporary,
                Some(HoverIntent::Dismiss) => OpenState::Closed,
                None => continue,
            };
            tracing::debug!(side = %side, target = ?target, at = at, "hover timer fired");
            changed |= self.transition(side, target, at);
        }

        changed
    }

    /// Earliest pending timer deadline across the viewport monitor and both
    /// edges. Hosts call [`tick`](Self::tick) once the clock reaches it.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        [
            self.viewport.next_deadline(),
            self.left_hover.next_deadline(),
            self.right_hover.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    // ---- observers ----

    /// Registers a layout observer.
    pub fn subscribe(&mut self, observer: impl LayoutObserver + 'static) -> SubscriptionId {
        self.store.subscribe(observer)
    }

    /// Removes a layout observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    // ---- internals ----

    fn apply_viewport(&mut self, width: u32, now: Millis) -> bool {
        let _span = tracing::debug_span!("apply_viewport", width = width).entered();
        let before = self.store.snapshot();
        let transitions = self.store.apply_viewport_width(width);
        self.after_transitions(&transitions, now);
        before != self.store.snapshot()
    }

    fn transition(&mut self, side: Side, value: OpenState, now: Millis) -> bool {
        let transitions = self.store.set_open_state(side, value);
        self.after_transitions(&transitions, now);
        !transitions.is_empty()
    }

    fn after_transitions(&mut self, transitions: &[Transition], now: Millis) {
        for transition in transitions {
            self.hover_mut(transition.side).on_transition(transition, now);
        }
        // Closed <-> Temporary is hover traffic and persists as nothing new.
        for side in Side::ALL {
            let committed = transitions.iter().any(|t| {
                t.side == side && (t.from == OpenState::Pinned || t.to == OpenState::Pinned)
            });
            if committed {
                self.bridge.save(side, &self.store.state(side));
            }
        }
    }

    const fn hover(&self, side: Side) -> &HoverIntentController {
        match side {
            Side::Left => &self.left_hover,
            Side::Right => &self.right_hover,
        }
    }

    fn hover_mut(&mut self, side: Side) -> &mut HoverIntentController {
        match side {
            Side::Left => &mut self.left_hover,
            Side::Right => &mut self.right_hover,
        }
    }
}

/// Resolves one pane's initial state field by field.
fn resolve_pane(side: Side, config: &PaneConfig, persisted: &PersistedPanes) -> PaneState {
    let defaults = PaneState::default_for(side);
    let stored: Option<PersistedPane> = persisted.get(side);

    let open_state = config
        .open_state
        .or_else(|| stored.map(|p| p.open_state.into()))
        .map_or(defaults.open_state, |state| match state {
            OpenState::Temporary => OpenState::Closed,
            other => other,
        });
    let width = config
        .width
        .or_else(|| stored.map(|p| p.width))
        .map_or(defaults.width, |w| clamp_side_pane_width(i64::from(w)));

    PaneState {
        open_state,
        width,
        closed_style: config.closed_style.unwrap_or(defaults.closed_style),
    }
}

impl fmt::Debug for SidepanesCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidepanesCoordinator")
            .field("store", &self.store)
            .field("viewport", &self.viewport)
            .field("left_hover", &self.left_hover)
            .field("right_hover", &self.right_hover)
            .field("resize", &self.resize)
            .field("bridge", &self.bridge)
            .finish_non_exhaustive()
    }
}

//! Hover-intent detection for one pane edge.
//!
//! [`HoverIntentController`] turns pointer samples into [`HoverIntent`]s. It never
//! touches pane state itself: the coordinator feeds it the pane's current
//! [`OpenState`], applies the intents it returns from [`tick`], and reports every
//! applied transition back through [`on_transition`].
//!
//! # State Machine
//!
//! ```text
//!            trigger zone           open delay              leave pane
//!  Idle/Armed ──────────→ PendingOpen ─────────→ Revealed ────────────→ PendingClose
//!      ↑        (left zone: cancel)     (temporary)   ↑ (re-enter: cancel)   │
//!      │                                              └──────────────────────┤
//!      └──────────────────── leave debounce expired: Closed, cooldown ───────┘
//! ```
//!
//! Only an *entry* into the trigger zone or the toggle arms the open delay.
//! A pointer already resting there when the pane closes (for instance on the
//! toggle it just clicked) has to leave and come back first.
//!
//! A trigger-zone entry while the reopen cooldown is running parks in
//! `Deferred`; when the cooldown ends the open delay starts only if the pointer
//! is still in the trigger zone. A pinned pane ignores the pointer entirely.
//!
//! [`tick`]: HoverIntentController::tick
//! [`on_transition`]: HoverIntentController::on_transition

use crate::domain::{OpenState, Side, LEAVE_DEBOUNCE_MS, OPEN_DELAY_MS, REOPEN_COOLDOWN_MS};
use crate::interaction::geometry::{classify_pointer, DeadZone, EdgeGeometry, Point, PointerZone};
use crate::layout::Transition;
use crate::timing::{Millis, TimerSlot};
use serde::{Deserialize, Serialize};

/// Delays governing hover behavior, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverTiming {
    /// Trigger-zone dwell before reveal.
    pub open_delay_ms: Millis,
    /// Grace period after leaving a temporary pane.
    pub leave_debounce_ms: Millis,
    /// Window after a temporary close during which hover cannot reopen.
    pub reopen_cooldown_ms: Millis,
}

impl Default for HoverTiming {
    fn default() -> Self {
        Self {
            open_delay_ms: OPEN_DELAY_MS,
            leave_debounce_ms: LEAVE_DEBOUNCE_MS,
            reopen_cooldown_ms: REOPEN_COOLDOWN_MS,
        }
    }
}

/// What the controller wants done to its pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverIntent {
    /// Show the pane as `Temporary`.
    Reveal,
    /// Close the temporary pane.
    Dismiss,
}

/// Observable phase of the per-edge state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HoverPhase {
    /// Pointer is nowhere relevant.
    Idle,
    /// Pointer rests in the sensor's dead zone.
    Armed,
    /// Open delay is running.
    PendingOpen,
    /// A trigger arrived during cooldown and waits for it to end.
    Deferred,
    /// Pane is temporary and the pointer is engaged with it.
    Revealed,
    /// Pane is temporary and the leave debounce is running.
    PendingClose,
    /// Pane is pinned; hover is ignored.
    Pinned,
}

/// Per-edge hover sensor state machine.
#[derive(Debug, Clone)]
pub struct HoverIntentController {
    side: Side,
    dead_zone: DeadZone,
    timing: HoverTiming,
    geometry: EdgeGeometry,
    zone: PointerZone,
    over_pane: bool,
    over_toggle: bool,
    wanted_open: bool,
    pending_open: TimerSlot,
    pending_close: TimerSlot,
    deferred_open: TimerSlot,
    last_closed_at: Option<Millis>,
}

impl HoverIntentController {
    /// Creates an idle controller for one edge.
    #[must_use]
    pub const fn new(side: Side, dead_zone: DeadZone, timing: HoverTiming) -> Self {
        Self {
            side,
            dead_zone,
            timing,
            geometry: EdgeGeometry {
                sensor: None,
                pane: None,
                toggle: None,
            },
            zone: PointerZone::Outside,
            over_pane: false,
            over_toggle: false,
            wanted_open: false,
            pending_open: TimerSlot::new(),
            pending_close: TimerSlot::new(),
            deferred_open: TimerSlot::new(),
            last_closed_at: None,
        }
    }

    /// Replaces the edge's bounding boxes. Takes effect on the next sample.
    pub fn set_geometry(&mut self, geometry: EdgeGeometry) {
        self.geometry = geometry;
    }

    /// Last classified sensor zone.
    #[must_use]
    pub const fn zone(&self) -> PointerZone {
        self.zone
    }

    /// When the pane last closed from `Temporary`.
    #[must_use]
    pub const fn last_closed_at(&self) -> Option<Millis> {
        self.last_closed_at
    }

    /// Whether a pointer at the last sample keeps a temporary pane open.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.over_pane || self.over_toggle || self.zone == PointerZone::TriggerZone
    }

    fn wants_open(&self) -> bool {
        self.zone == PointerZone::TriggerZone || self.over_toggle
    }

    fn cooldown_until(&self, now: Millis) -> Option<Millis> {
        let until = self
            .last_closed_at?
            .saturating_add(self.timing.reopen_cooldown_ms);
        (now < until).then_some(until)
    }

    /// Feeds a pointer sample. `None` means the pointer left the viewport.
    pub fn pointer_moved(&mut self, point: Option<Point>, open_state: OpenState, now: Millis) {
        let was_wanting = self.wanted_open;
        self.classify(point);
        self.wanted_open = self.wants_open();
        let entered = self.wanted_open && !was_wanting;

        match open_state {
            OpenState::Pinned => self.cancel_timers(),
            OpenState::Closed => {
                if !self.wanted_open {
                    let cancelled = self.pending_open.cancel() | self.deferred_open.cancel();
                    if cancelled {
                        tracing::trace!(side = %self.side, "hover left trigger zone, open cancelled");
                    }
                } else if entered {
                    if let Some(until) = self.cooldown_until(now) {
                        tracing::debug!(side = %self.side, until = until, "hover during cooldown, deferring");
                        self.deferred_open.schedule_at(until);
                    } else {
                        tracing::trace!(side = %self.side, "hover entered trigger zone");
                        self.pending_open.schedule(now, self.timing.open_delay_ms);
                    }
                }
            }
            OpenState::Temporary => {
                if self.is_engaged() {
                    if self.pending_close.cancel() {
                        tracing::trace!(side = %self.side, "pointer re-engaged, close cancelled");
                    }
                } else if !self.pending_close.is_pending() {
                    tracing::trace!(side = %self.side, "pointer left temporary pane");
                    self.pending_close.schedule(now, self.timing.leave_debounce_ms);
                }
            }
        }
    }

    fn classify(&mut self, point: Option<Point>) {
        let Some(point) = point else {
            self.zone = PointerZone::Outside;
            self.over_pane = false;
            self.over_toggle = false;
            return;
        };

        self.zone = self.geometry.sensor.map_or(PointerZone::Outside, |sensor| {
            classify_pointer(self.side, &sensor, self.dead_zone, point)
        });
        self.over_pane = self.geometry.pane.is_some_and(|r| r.contains(point));
        self.over_toggle = self.geometry.toggle.is_some_and(|r| r.contains(point));
    }

    /// Fires due timers and returns the resulting intent, if any.
    ///
    /// Timers re-check their preconditions when they fire, so a timer whose
    /// reason disappeared without an explicit cancel still does nothing.
    pub fn tick(&mut self, open_state: OpenState, now: Millis) -> Option<HoverIntent> {
        if let Some(cooldown_end) = self.deferred_open.fire_if_due(now) {
            if open_state == OpenState::Closed && self.wants_open() {
                tracing::debug!(side = %self.side, "cooldown over, pointer still in trigger zone");
                self.pending_open
                    .schedule(cooldown_end, self.timing.open_delay_ms);
            } else {
                tracing::trace!(side = %self.side, "cooldown over, deferred hover dropped");
            }
        }

        if self.pending_open.fire_if_due(now).is_some()
            && open_state == OpenState::Closed
            && self.wants_open()
        {
            return Some(HoverIntent::Reveal);
        }

        if self.pending_close.fire_if_due(now).is_some()
            && open_state == OpenState::Temporary
            && !self.is_engaged()
        {
            return Some(HoverIntent::Dismiss);
        }

        None
    }

    /// Records a transition applied to this controller's pane.
    ///
    /// Any transition supersedes pending hover timers. Closing from
    /// `Temporary` starts the reopen cooldown.
    pub fn on_transition(&mut self, transition: &Transition, now: Millis) {
        if transition.side != self.side {
            return;
        }

        self.cancel_timers();
        if transition.from == OpenState::Temporary && transition.to == OpenState::Closed {
            self.last_closed_at = Some(now);
        }
        if transition.to == OpenState::Temporary && !self.is_engaged() {
            self.pending_close.schedule(now, self.timing.leave_debounce_ms);
        }
    }

    /// Cancels every pending timer of this edge.
    pub fn cancel_timers(&mut self) {
        self.pending_open.cancel();
        self.pending_close.cancel();
        self.deferred_open.cancel();
    }

    /// Earliest pending deadline of this edge.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        [
            self.pending_open.due(),
            self.pending_close.due(),
            self.deferred_open.due(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Current phase given the pane's open state.
    #[must_use]
    pub fn phase(&self, open_state: OpenState) -> HoverPhase {
        match open_state {
            OpenState::Pinned => HoverPhase::Pinned,
            OpenState::Temporary if self.pending_close.is_pending() => HoverPhase::PendingClose,
            OpenState::Temporary => HoverPhase::Revealed,
            OpenState::Closed if self.pending_open.is_pending() => HoverPhase::PendingOpen,
            OpenState::Closed if self.deferred_open.is_pending() => HoverPhase::Deferred,
            OpenState::Closed if self.zone == PointerZone::DeadZone => HoverPhase::Armed,
            OpenState::Closed => HoverPhase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::geometry::Rect;

    const SENSOR: Rect = Rect::new(1560.0, 0.0, 40.0, 800.0);
    const PANE: Rect = Rect::new(1280.0, 0.0, 320.0, 800.0);
    const TRIGGER: Point = Point::new(1590.0, 400.0);
    const DEAD: Point = Point::new(1565.0, 400.0);
    const CONTENT: Point = Point::new(600.0, 400.0);
    const INSIDE_PANE: Point = Point::new(1400.0, 400.0);
    const TOGGLE: Rect = Rect::new(1240.0, 8.0, 24.0, 24.0);
    const ON_TOGGLE: Point = Point::new(1250.0, 20.0);

    fn controller() -> HoverIntentController {
        let mut ctl = HoverIntentController::new(
            Side::Right,
            DeadZone { inner: 16.0, outer: 0.0 },
            HoverTiming::default(),
        );
        ctl.set_geometry(EdgeGeometry {
            sensor: Some(SENSOR),
            pane: Some(PANE),
            toggle: Some(TOGGLE),
        });
        ctl
    }

    fn reveal(ctl: &mut HoverIntentController, at: Millis) {
        ctl.pointer_moved(Some(TRIGGER), OpenState::Closed, at);
        assert_eq!(ctl.tick(OpenState::Closed, at + OPEN_DELAY_MS), Some(HoverIntent::Reveal));
        ctl.on_transition(
            &Transition { side: Side::Right, from: OpenState::Closed, to: OpenState::Temporary },
            at + OPEN_DELAY_MS,
        );
    }

    fn dismissed(ctl: &mut HoverIntentController, at: Millis) {
        ctl.on_transition(
            &Transition { side: Side::Right, from: OpenState::Temporary, to: OpenState::Closed },
            at,
        );
    }

    #[test]
    fn trigger_zone_dwell_reveals() {
        let mut ctl = controller();
        ctl.pointer_moved(Some(TRIGGER), OpenState::Closed, 0);
        assert_eq!(ctl.phase(OpenState::Closed), HoverPhase::PendingOpen);
        assert_eq!(ctl.tick(OpenState::Closed, OPEN_DELAY_MS - 1), None);
        assert_eq!(ctl.tick(OpenState::Closed, OPEN_DELAY_MS), Some(HoverIntent::Reveal));
    }

    #[test]
    fn dead_zone_never_arms() {
        let mut ctl = controller();
        ctl.pointer_moved(Some(DEAD), OpenState::Closed, 0);
        assert_eq!(ctl.phase(OpenState::Closed), HoverPhase::Armed);
        assert_eq!(ctl.next_deadline(), None);
        assert_eq!(ctl.tick(OpenState::Closed, 10_000), None);
    }

    #[test]
    fn leaving_before_delay_cancels() {
        let mut ctl = controller();
        ctl.pointer_moved(Some(TRIGGER), OpenState::Closed, 0);
        ctl.pointer_moved(Some(CONTENT), OpenState::Closed, 200);
        assert_eq!(ctl.tick(OpenState::Closed, 10_000), None);
        assert_eq!(ctl.phase(OpenState::Closed), HoverPhase::Idle);
    }

    #[test]
    fn moving_within_trigger_zone_does_not_restart_delay() {
        let mut ctl = controller();
        ctl.pointer_moved(Some(TRIGGER), OpenState::Closed, 0);
        ctl.pointer_moved(Some(Point::new(1595.0, 300.0)), OpenState::Closed, 300);
        assert_eq!(ctl.tick(OpenState::Closed, OPEN_DELAY_MS), Some(HoverIntent::Reveal));
    }

    #[test]
    fn leaving_temporary_pane_closes_after_debounce() {
        let mut ctl = controller();
        reveal(&mut ctl, 0);

        ctl.pointer_moved(Some(INSIDE_PANE), OpenState::Temporary, 600);
        assert_eq!(ctl.phase(OpenState::Temporary), HoverPhase::Revealed);

        ctl.pointer_moved(Some(CONTENT), OpenState::Temporary, 700);
        assert_eq!(ctl.phase(OpenState::Temporary), HoverPhase::PendingClose);
        assert_eq!(ctl.tick(OpenState::Temporary, 799), None);
        assert_eq!(ctl.tick(OpenState::Temporary, 800), Some(HoverIntent::Dismiss));
    }

    #[test]
    fn re_entering_cancels_stale_close() {
        let mut ctl = controller();
        reveal(&mut ctl, 0);

        ctl.pointer_moved(Some(CONTENT), OpenState::Temporary, 700);
        ctl.pointer_moved(Some(INSIDE_PANE), OpenState::Temporary, 750);
        assert_eq!(ctl.tick(OpenState::Temporary, 10_000), None);
        assert_eq!(ctl.phase(OpenState::Temporary), HoverPhase::Revealed);
    }

    #[test]
    fn pinned_pane_ignores_leave() {
        let mut ctl = controller();
        ctl.pointer_moved(Some(INSIDE_PANE), OpenState::Pinned, 0);
        ctl.pointer_moved(Some(CONTENT), OpenState::Pinned, 10);
        ctl.pointer_moved(None, OpenState::Pinned, 20);

        assert_eq!(ctl.next_deadline(), None);
        assert_eq!(ctl.tick(OpenState::Pinned, 10_000), None);
        assert_eq!(ctl.phase(OpenState::Pinned), HoverPhase::Pinned);
    }

    #[test]
    fn cooldown_suppresses_quick_reopen() {
        let mut ctl = controller();
        dismissed(&mut ctl, 1_000);

        ctl.pointer_moved(Some(TRIGGER), OpenState::Closed, 1_100);
        assert_eq!(ctl.phase(OpenState::Closed), HoverPhase::Deferred);

        // Pointer leaves before the cooldown ends: the deferred hover is dropped.
        ctl.pointer_moved(Some(CONTENT), OpenState::Closed, 1_300);
        assert_eq!(ctl.tick(OpenState::Closed, 5_000), None);
        assert_eq!(ctl.next_deadline(), None);
    }

    #[test]
    fn cooldown_re_evaluates_if_pointer_stays() {
        let mut ctl = controller();
        dismissed(&mut ctl, 1_000);

        ctl.pointer_moved(Some(TRIGGER), OpenState::Closed, 1_100);
        assert_eq!(ctl.tick(OpenState::Closed, 1_499), None);

        // Cooldown ends at 1500, the open delay starts from there.
        assert_eq!(ctl.tick(OpenState::Closed, 1_500), None);
        assert_eq!(ctl.phase(OpenState::Closed), HoverPhase::PendingOpen);
        assert_eq!(ctl.tick(OpenState::Closed, 1_500 + OPEN_DELAY_MS), Some(HoverIntent::Reveal));
    }

    #[test]
    fn entering_after_cooldown_opens_normally() {
        let mut ctl = controller();
        dismissed(&mut ctl, 1_000);

        ctl.pointer_moved(Some(TRIGGER), OpenState::Closed, 1_600);
        assert_eq!(ctl.phase(OpenState::Closed), HoverPhase::PendingOpen);
        assert_eq!(ctl.tick(OpenState::Closed, 2_100), Some(HoverIntent::Reveal));
    }

    #[test]
    fn transition_cancels_pending_timers() {
        let mut ctl = controller();
        ctl.pointer_moved(Some(TRIGGER), OpenState::Closed, 0);
        ctl.on_transition(
            &Transition { side: Side::Right, from: OpenState::Closed, to: OpenState::Pinned },
            100,
        );
        assert_eq!(ctl.next_deadline(), None);
        assert_eq!(ctl.tick(OpenState::Pinned, 1_000), None);
    }

    #[test]
    fn other_side_transitions_are_ignored() {
        let mut ctl = controller();
        ctl.pointer_moved(Some(TRIGGER), OpenState::Closed, 0);
        ctl.on_transition(
            &Transition { side: Side::Left, from: OpenState::Pinned, to: OpenState::Closed },
            100,
        );
        assert_eq!(ctl.next_deadline(), Some(OPEN_DELAY_MS));
    }

    #[test]
    fn hovering_toggle_reveals() {
        let mut ctl = controller();
        ctl.pointer_moved(Some(ON_TOGGLE), OpenState::Closed, 0);
        assert_eq!(ctl.phase(OpenState::Closed), HoverPhase::PendingOpen);
        assert_eq!(ctl.tick(OpenState::Closed, OPEN_DELAY_MS), Some(HoverIntent::Reveal));
    }

    #[test]
    fn quick_move_from_toggle_to_content_cancels() {
        let mut ctl = controller();
        ctl.pointer_moved(Some(ON_TOGGLE), OpenState::Closed, 0);
        ctl.pointer_moved(Some(CONTENT), OpenState::Closed, 100);

        assert_eq!(ctl.next_deadline(), None);
        assert_eq!(ctl.tick(OpenState::Closed, 10_000), None);
    }

    #[test]
    fn toggle_keeps_temporary_pane_engaged() {
        let mut ctl = controller();
        reveal(&mut ctl, 0);

        ctl.pointer_moved(Some(ON_TOGGLE), OpenState::Temporary, 600);
        assert_eq!(ctl.phase(OpenState::Temporary), HoverPhase::Revealed);
        assert_eq!(ctl.tick(OpenState::Temporary, 10_000), None);

        ctl.pointer_moved(Some(CONTENT), OpenState::Temporary, 10_000);
        assert_eq!(ctl.phase(OpenState::Temporary), HoverPhase::PendingClose);
    }

    #[test]
    fn closing_under_resting_pointer_needs_a_fresh_entry() {
        let mut ctl = controller();
        ctl.pointer_moved(Some(ON_TOGGLE), OpenState::Pinned, 0);
        ctl.on_transition(
            &Transition { side: Side::Right, from: OpenState::Pinned, to: OpenState::Closed },
            100,
        );

        // Jitter on the toggle that just closed the pane.
        ctl.pointer_moved(Some(Point::new(1251.0, 20.0)), OpenState::Closed, 150);
        assert_eq!(ctl.next_deadline(), None);
        assert_eq!(ctl.tick(OpenState::Closed, 10_000), None);

        ctl.pointer_moved(Some(CONTENT), OpenState::Closed, 10_100);
        ctl.pointer_moved(Some(ON_TOGGLE), OpenState::Closed, 10_200);
        assert_eq!(ctl.phase(OpenState::Closed), HoverPhase::PendingOpen);
        assert_eq!(
            ctl.tick(OpenState::Closed, 10_200 + OPEN_DELAY_MS),
            Some(HoverIntent::Reveal)
        );
    }

    #[test]
    fn resting_in_trigger_zone_does_not_rearm() {
        let mut ctl = controller();
        reveal(&mut ctl, 0);
        // Pane forced closed while the pointer still sits in the trigger zone.
        dismissed(&mut ctl, 600);

        ctl.pointer_moved(Some(Point::new(1591.0, 401.0)), OpenState::Closed, 2_000);
        assert_eq!(ctl.next_deadline(), None);
        assert_eq!(ctl.phase(OpenState::Closed), HoverPhase::Idle);
    }
}

//! End-to-end behavior through the provider handle, driven by a manual clock.

use sidepanes::domain::{
    ClosedStyle, OpenState, PaneConfig, Side, CENTRAL_PANE_MAX_WIDTH, CENTRAL_PANE_MIN_WIDTH,
    DEFAULT_SIDE_PANE_WIDTH, MAX_SIDE_PANE_WIDTH, MIN_SIDE_PANE_WIDTH, OUTSIDE_PROVIDER_MESSAGE,
};
use sidepanes::interaction::{EdgeGeometry, HoverPhase, Point, Rect};
use sidepanes::timing::ManualClock;
use sidepanes::{Config, LayoutSnapshot, Sidepanes, SidepanesError, SidepanesProvider, Timing};
use std::cell::RefCell;
use std::rc::Rc;

/// Just enough for both panes and the central pane at its maximum.
const ROOMY: u32 = DEFAULT_SIDE_PANE_WIDTH * 2 + CENTRAL_PANE_MAX_WIDTH;

struct Harness {
    _provider: SidepanesProvider,
    panes: Sidepanes,
    clock: ManualClock,
}

impl Harness {
    fn new(config: Config, viewport_width: u32) -> Self {
        let clock = ManualClock::new();
        let provider = SidepanesProvider::with_clock(config, viewport_width, clock.clone());
        let panes = provider.handle();
        Self {
            _provider: provider,
            panes,
            clock,
        }
    }

    fn immediate(viewport_width: u32) -> Self {
        Self::new(
            Config {
                timing: Timing {
                    viewport_debounce_ms: 0,
                    ..Timing::default()
                },
                ..Config::default()
            },
            viewport_width,
        )
    }

    fn advance(&self, ms: u64) {
        self.clock.advance(ms);
        self.panes.tick().unwrap();
    }

    /// Right edge geometry for a viewport of `width`: a 40px sensor on the
    /// viewport edge and the 320px pane next to it.
    fn right_edge(&self, width: u32) -> RightEdge {
        let w = f64::from(width);
        let edge = RightEdge {
            trigger: Point::new(w - 10.0, 450.0),
            dead: Point::new(w - 35.0, 450.0),
            inside_pane: Point::new(w - 200.0, 450.0),
            content: Point::new(w / 2.0, 450.0),
        };
        self.panes
            .set_edge_geometry(
                Side::Right,
                EdgeGeometry {
                    sensor: Some(Rect::new(w - 40.0, 0.0, 40.0, 900.0)),
                    pane: Some(Rect::new(w - 320.0, 0.0, 320.0, 900.0)),
                    toggle: None,
                },
            )
            .unwrap();
        edge
    }

    fn right_state(&self) -> OpenState {
        self.panes.right_pane().unwrap().open_state
    }
}

struct RightEdge {
    trigger: Point,
    dead: Point,
    inside_pane: Point,
    content: Point,
}

#[test]
fn initializes_with_default_values() {
    let h = Harness::immediate(ROOMY);

    let left = h.panes.left_pane().unwrap();
    assert_eq!(left.open_state, OpenState::Pinned);
    assert_eq!(left.width, DEFAULT_SIDE_PANE_WIDTH);
    assert_eq!(left.closed_style, ClosedStyle::Compact);

    let right = h.panes.right_pane().unwrap();
    assert_eq!(right.open_state, OpenState::Closed);
    assert_eq!(right.width, DEFAULT_SIDE_PANE_WIDTH);
    assert_eq!(right.closed_style, ClosedStyle::Hidden);
    assert_eq!(right.rendered_width, 0);

    assert_eq!(h.panes.central_pane_width().unwrap(), CENTRAL_PANE_MAX_WIDTH);
}

#[test]
fn opens_and_closes_both_panes_idempotently() {
    let h = Harness::immediate(ROOMY);

    assert!(h.panes.close_left_pane().unwrap());
    assert_eq!(h.panes.left_pane().unwrap().open_state, OpenState::Closed);
    let after_first = h.panes.snapshot().unwrap();
    assert!(!h.panes.close_left_pane().unwrap());
    assert_eq!(h.panes.snapshot().unwrap(), after_first);

    assert!(h.panes.open_left_pane().unwrap());
    assert_eq!(h.panes.left_pane().unwrap().open_state, OpenState::Pinned);

    assert!(h.panes.open_right_pane().unwrap());
    assert_eq!(h.right_state(), OpenState::Pinned);
    assert!(h.panes.close_right_pane().unwrap());
    assert_eq!(h.right_state(), OpenState::Closed);
}

#[test]
fn widths_are_clamped_on_every_write() {
    let h = Harness::immediate(ROOMY);

    assert_eq!(h.panes.set_left_pane_width(MAX_SIDE_PANE_WIDTH + 1).unwrap(), MAX_SIDE_PANE_WIDTH);
    assert_eq!(h.panes.set_right_pane_width(0).unwrap(), MIN_SIDE_PANE_WIDTH);
    assert_eq!(h.panes.left_pane().unwrap().width, MAX_SIDE_PANE_WIDTH);
    assert_eq!(h.panes.right_pane().unwrap().width, MIN_SIDE_PANE_WIDTH);

    let h = Harness::new(
        Config {
            default_right_pane: PaneConfig {
                width: Some(10),
                ..PaneConfig::default()
            },
            ..Config::default()
        },
        ROOMY,
    );
    assert_eq!(h.panes.right_pane().unwrap().width, MIN_SIDE_PANE_WIDTH);
}

#[test]
fn shrinking_to_central_minimum_closes_both_panes() {
    let h = Harness::new(Config::default(), ROOMY);
    h.panes.open_left_pane().unwrap();
    h.panes.open_right_pane().unwrap();

    h.panes.viewport_resized(CENTRAL_PANE_MIN_WIDTH).unwrap();
    assert_eq!(h.right_state(), OpenState::Pinned, "debounced until the window elapses");

    h.advance(100);
    assert_eq!(h.panes.left_pane().unwrap().open_state, OpenState::Closed);
    assert_eq!(h.right_state(), OpenState::Closed);
    assert_eq!(h.panes.central_pane_width().unwrap(), CENTRAL_PANE_MIN_WIDTH);
}

#[test]
fn only_the_last_viewport_sample_is_applied() {
    let h = Harness::new(Config::default(), ROOMY);
    h.panes.open_right_pane().unwrap();

    h.panes.viewport_resized(CENTRAL_PANE_MIN_WIDTH).unwrap();
    h.advance(50);
    h.panes.viewport_resized(ROOMY).unwrap();
    h.advance(100);

    assert_eq!(h.right_state(), OpenState::Pinned);
}

#[test]
fn pinning_closes_the_other_pane_when_space_is_short() {
    let h = Harness::immediate(1000);

    h.panes.open_right_pane().unwrap();
    assert_eq!(h.panes.left_pane().unwrap().open_state, OpenState::Closed);
    assert_eq!(h.right_state(), OpenState::Pinned);

    // Closing never cascades.
    h.panes.close_right_pane().unwrap();
    assert_eq!(h.panes.left_pane().unwrap().open_state, OpenState::Closed);
}

#[test]
fn handle_without_provider_fails_with_configuration_error() {
    let unbound = Sidepanes::default();
    assert!(!unbound.is_bound());

    let err = unbound.right_pane().unwrap_err();
    assert!(matches!(err, SidepanesError::OutsideProvider));
    assert!(err.to_string().contains(OUTSIDE_PROVIDER_MESSAGE));
    assert!(matches!(
        unbound.open_left_pane(),
        Err(SidepanesError::OutsideProvider)
    ));

    let h = Harness::immediate(ROOMY);
    let panes = h.panes.clone();
    drop(h);
    assert!(matches!(panes.left_pane(), Err(SidepanesError::OutsideProvider)));
}

#[test]
fn observers_cannot_reenter_the_provider() {
    let h = Harness::immediate(ROOMY);
    let seen: Rc<RefCell<Vec<LayoutSnapshot>>> = Rc::default();
    let reentry: Rc<RefCell<Option<SidepanesError>>> = Rc::default();

    let inner = h.panes.clone();
    let seen_sink = Rc::clone(&seen);
    let reentry_sink = Rc::clone(&reentry);
    h.panes
        .subscribe(move |snapshot: &LayoutSnapshot| {
            seen_sink.borrow_mut().push(*snapshot);
            if let Err(e) = inner.left_pane() {
                *reentry_sink.borrow_mut() = Some(e);
            }
        })
        .unwrap();

    h.panes.open_right_pane().unwrap();

    assert_eq!(seen.borrow().len(), 1);
    assert!(matches!(*reentry.borrow(), Some(SidepanesError::Reentrant)));
    // The handle works again once the publish is over.
    assert!(h.panes.left_pane().is_ok());
}

#[test]
fn arbitration_and_request_publish_once() {
    let h = Harness::immediate(1000);
    let seen: Rc<RefCell<Vec<LayoutSnapshot>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let id = h
        .panes
        .subscribe(move |snapshot: &LayoutSnapshot| sink.borrow_mut().push(*snapshot))
        .unwrap();

    h.panes.open_right_pane().unwrap();
    {
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].left.open_state, OpenState::Closed);
        assert_eq!(seen[0].right.open_state, OpenState::Pinned);
    }

    assert!(h.panes.unsubscribe(id).unwrap());
    h.panes.close_right_pane().unwrap();
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn hover_reveals_after_delay_and_closes_after_leave_debounce() {
    let h = Harness::immediate(ROOMY);
    let edge = h.right_edge(ROOMY);

    h.panes.pointer_moved(edge.dead).unwrap();
    assert_eq!(h.panes.hover_phase(Side::Right).unwrap(), HoverPhase::Armed);
    assert_eq!(h.panes.next_deadline().unwrap(), None);

    h.panes.pointer_moved(edge.trigger).unwrap();
    h.advance(499);
    assert_eq!(h.right_state(), OpenState::Closed);
    h.advance(1);
    assert_eq!(h.right_state(), OpenState::Temporary);
    assert!(h.panes.right_pane().unwrap().is_temporary);

    // Moving into the pane keeps it open.
    h.panes.pointer_moved(edge.inside_pane).unwrap();
    h.advance(1000);
    assert_eq!(h.right_state(), OpenState::Temporary);

    h.panes.pointer_moved(edge.content).unwrap();
    h.advance(99);
    assert_eq!(h.right_state(), OpenState::Temporary);
    h.advance(1);
    assert_eq!(h.right_state(), OpenState::Closed);
}

#[test]
fn leaving_trigger_zone_before_delay_cancels_open() {
    let h = Harness::immediate(ROOMY);
    let edge = h.right_edge(ROOMY);

    h.panes.pointer_moved(edge.trigger).unwrap();
    h.advance(300);
    h.panes.pointer_moved(edge.dead).unwrap();
    h.advance(1000);

    assert_eq!(h.right_state(), OpenState::Closed);
    assert_eq!(h.panes.next_deadline().unwrap(), None);
}

#[test]
fn reentering_during_leave_debounce_keeps_pane_open() {
    let h = Harness::immediate(ROOMY);
    let edge = h.right_edge(ROOMY);

    h.panes.pointer_moved(edge.trigger).unwrap();
    h.advance(500);
    h.panes.pointer_moved(edge.content).unwrap();
    h.advance(60);
    h.panes.pointer_moved(edge.inside_pane).unwrap();
    h.advance(500);

    assert_eq!(h.right_state(), OpenState::Temporary);
}

#[test]
fn reopen_is_deferred_until_cooldown_ends() {
    let h = Harness::immediate(ROOMY);
    let edge = h.right_edge(ROOMY);

    h.panes.pointer_moved(edge.trigger).unwrap();
    h.advance(500);
    h.panes.pointer_moved(edge.content).unwrap();
    h.advance(100);
    assert_eq!(h.right_state(), OpenState::Closed);

    // Closed at 600: cooldown runs until 1100.
    h.panes.pointer_moved(edge.trigger).unwrap();
    assert_eq!(h.panes.hover_phase(Side::Right).unwrap(), HoverPhase::Deferred);
    h.advance(400);
    assert_eq!(h.right_state(), OpenState::Closed);

    h.advance(100);
    assert_eq!(h.panes.hover_phase(Side::Right).unwrap(), HoverPhase::PendingOpen);
    h.advance(499);
    assert_eq!(h.right_state(), OpenState::Closed);
    h.advance(1);
    assert_eq!(h.right_state(), OpenState::Temporary);
}

#[test]
fn deferred_reopen_is_dropped_if_pointer_left() {
    let h = Harness::immediate(ROOMY);
    let edge = h.right_edge(ROOMY);

    h.panes.pointer_moved(edge.trigger).unwrap();
    h.advance(500);
    h.panes.pointer_left().unwrap();
    h.advance(100);
    assert_eq!(h.right_state(), OpenState::Closed);

    h.panes.pointer_moved(edge.trigger).unwrap();
    h.advance(200);
    h.panes.pointer_moved(edge.content).unwrap();
    h.advance(2000);

    assert_eq!(h.right_state(), OpenState::Closed);
    assert_eq!(h.panes.hover_phase(Side::Right).unwrap(), HoverPhase::Idle);
}

#[test]
fn pinned_pane_ignores_hover() {
    let h = Harness::immediate(ROOMY);
    let edge = h.right_edge(ROOMY);
    h.panes.open_right_pane().unwrap();

    h.panes.pointer_moved(edge.inside_pane).unwrap();
    h.panes.pointer_moved(edge.content).unwrap();
    h.panes.pointer_left().unwrap();
    h.advance(5000);

    assert_eq!(h.right_state(), OpenState::Pinned);
    assert_eq!(h.panes.hover_phase(Side::Right).unwrap(), HoverPhase::Pinned);
}

#[test]
fn toggle_pins_a_temporary_pane_and_arbitrates() {
    let h = Harness::immediate(1000);
    let edge = h.right_edge(1000);

    h.panes.pointer_moved(edge.trigger).unwrap();
    h.advance(500);
    assert_eq!(h.right_state(), OpenState::Temporary);
    // Hover reveal never arbitrates.
    assert_eq!(h.panes.left_pane().unwrap().open_state, OpenState::Pinned);

    assert!(h.panes.toggle_pane(Side::Right).unwrap());
    assert_eq!(h.right_state(), OpenState::Pinned);
    assert_eq!(h.panes.left_pane().unwrap().open_state, OpenState::Closed);

    // Leaving a pinned pane starts nothing.
    h.panes.pointer_left().unwrap();
    assert_eq!(h.panes.next_deadline().unwrap(), None);

    assert!(h.panes.toggle_pane(Side::Right).unwrap());
    assert_eq!(h.right_state(), OpenState::Closed);
}

#[test]
fn viewport_recomputation_demotes_temporary_pane() {
    let h = Harness::new(Config::default(), ROOMY);
    let edge = h.right_edge(ROOMY);

    h.panes.pointer_moved(edge.trigger).unwrap();
    h.advance(500);
    assert_eq!(h.right_state(), OpenState::Temporary);

    h.panes.viewport_resized(ROOMY + 10).unwrap();
    h.advance(100);
    assert_eq!(h.right_state(), OpenState::Closed);
    assert_eq!(h.panes.left_pane().unwrap().open_state, OpenState::Pinned);
}

#[test]
fn left_and_right_timers_are_independent() {
    let h = Harness::immediate(ROOMY);
    let edge = h.right_edge(ROOMY);
    h.panes.close_left_pane().unwrap();
    h.panes
        .set_edge_geometry(
            Side::Left,
            EdgeGeometry {
                sensor: Some(Rect::new(0.0, 0.0, 40.0, 900.0)),
                pane: Some(Rect::new(0.0, 0.0, 320.0, 900.0)),
                toggle: None,
            },
        )
        .unwrap();

    h.panes.pointer_moved(Point::new(5.0, 450.0)).unwrap();
    h.advance(500);
    assert_eq!(h.panes.left_pane().unwrap().open_state, OpenState::Temporary);

    // Crossing to the right edge closes the left pane on its own debounce
    // and arms the right one on its own delay.
    h.panes.pointer_moved(edge.trigger).unwrap();
    h.advance(100);
    assert_eq!(h.panes.left_pane().unwrap().open_state, OpenState::Closed);
    assert_eq!(h.right_state(), OpenState::Closed);
    h.advance(400);
    assert_eq!(h.right_state(), OpenState::Temporary);
}

#[test]
fn drag_resizes_live_within_bounds() {
    let h = Harness::immediate(ROOMY);
    h.panes.open_right_pane().unwrap();

    assert!(h.panes.begin_resize(Side::Right, 1520.0).unwrap());
    // Right pane grows as the pointer moves left.
    assert_eq!(h.panes.update_resize(1400.0).unwrap(), Some(440));
    assert_eq!(h.panes.right_pane().unwrap().width, 440);
    assert_eq!(h.panes.update_resize(0.0).unwrap(), Some(MAX_SIDE_PANE_WIDTH));
    assert_eq!(h.panes.end_resize(1900.0).unwrap(), Some(MIN_SIDE_PANE_WIDTH));
    assert_eq!(h.panes.update_resize(1500.0).unwrap(), None);

    // Resizing never arbitrates.
    assert_eq!(h.panes.left_pane().unwrap().open_state, OpenState::Pinned);
}

fn right_edge_with_toggle(h: &Harness) -> Point {
    let w = f64::from(ROOMY);
    h.panes
        .set_edge_geometry(
            Side::Right,
            EdgeGeometry {
                sensor: Some(Rect::new(w - 40.0, 0.0, 40.0, 900.0)),
                pane: Some(Rect::new(w - 320.0, 0.0, 320.0, 900.0)),
                toggle: Some(Rect::new(w - 360.0, 8.0, 24.0, 24.0)),
            },
        )
        .unwrap();
    Point::new(w - 350.0, 20.0)
}

#[test]
fn closing_from_toggle_stays_closed_while_pointer_rests_on_it() {
    let h = Harness::immediate(ROOMY);
    let on_toggle = right_edge_with_toggle(&h);

    h.panes.open_right_pane().unwrap();
    h.panes.pointer_moved(on_toggle).unwrap();
    assert!(h.panes.toggle_pane(Side::Right).unwrap());
    assert_eq!(h.right_state(), OpenState::Closed);

    h.panes
        .pointer_moved(Point::new(on_toggle.x + 1.0, on_toggle.y))
        .unwrap();
    assert_eq!(h.panes.next_deadline().unwrap(), None);
    h.advance(500);
    assert_eq!(h.right_state(), OpenState::Closed);
}

#[test]
fn hovering_toggle_reveals_and_keeps_pane_open() {
    let h = Harness::immediate(ROOMY);
    let on_toggle = right_edge_with_toggle(&h);
    let content = Point::new(f64::from(ROOMY) / 2.0, 450.0);

    h.panes.pointer_moved(on_toggle).unwrap();
    h.advance(500);
    assert_eq!(h.right_state(), OpenState::Temporary);

    // The toggle counts as part of the pane for the leave debounce.
    h.advance(1000);
    assert_eq!(h.right_state(), OpenState::Temporary);

    h.panes.pointer_moved(content).unwrap();
    h.advance(100);
    assert_eq!(h.right_state(), OpenState::Closed);
}

#[test]
fn quick_move_from_toggle_to_content_does_not_open() {
    let h = Harness::immediate(ROOMY);
    let on_toggle = right_edge_with_toggle(&h);

    h.panes.pointer_moved(on_toggle).unwrap();
    h.advance(100);
    h.panes
        .pointer_moved(Point::new(f64::from(ROOMY) / 2.0, 450.0))
        .unwrap();
    h.advance(1000);

    assert_eq!(h.right_state(), OpenState::Closed);
    assert_eq!(h.panes.hover_phase(Side::Right).unwrap(), HoverPhase::Idle);
}

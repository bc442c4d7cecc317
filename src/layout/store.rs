//! Pane state store: the single source of truth for both panes.
//!
//! [`PaneStateStore`] holds the two [`PaneState`]s and the last applied viewport
//! width. Every mutation is synchronous and immediately visible to subsequent
//! reads. Mutations that claim or release space run an arbitration pass before
//! they are finalized, so one request may also close the *other* pane. Each
//! mutation that changes observable state ends with exactly one publish to the
//! registered [`LayoutObserver`]s.
//!
//! # Example
//!
//! ```rust
//! use sidepanes::domain::{OpenState, PaneState, Side};
//! use sidepanes::layout::PaneStateStore;
//!
//! let mut store = PaneStateStore::new(
//!     PaneState::default_for(Side::Left),
//!     PaneState::default_for(Side::Right),
//!     1000,
//! );
//!
//! // 1000px cannot hold 320 + 320 + 400, so pinning right closes left.
//! let transitions = store.set_open_state(Side::Right, OpenState::Pinned);
//! assert_eq!(transitions.len(), 2);
//! assert_eq!(store.state(Side::Left).open_state, OpenState::Closed);
//! ```

use crate::domain::{clamp_side_pane_width, OpenState, PaneState, Side};
use crate::layout::arbiter::{compute_panes_to_close, has_enough_space, ArbitrationInput};
use crate::layout::view::LayoutSnapshot;
use std::fmt;

/// Receives a snapshot after every mutation that changed the layout.
pub trait LayoutObserver {
    /// Called once per finalized mutation.
    fn layout_changed(&mut self, snapshot: &LayoutSnapshot);
}

impl<F> LayoutObserver for F
where
    F: FnMut(&LayoutSnapshot),
{
    fn layout_changed(&mut self, snapshot: &LayoutSnapshot) {
        self(snapshot);
    }
}

/// Handle returned by [`PaneStateStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// One open-state change applied by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Pane that changed.
    pub side: Side,
    /// State before the change.
    pub from: OpenState,
    /// State after the change.
    pub to: OpenState,
}

/// Holds both pane states and the viewport width.
pub struct PaneStateStore {
    left: PaneState,
    right: PaneState,
    viewport_width: u32,
    observers: Vec<(SubscriptionId, Box<dyn LayoutObserver>)>,
    next_subscription: u64,
}

impl PaneStateStore {
    /// Creates a store from initial pane states.
    ///
    /// Widths are clamped; a `Temporary` initial state is demoted to `Closed`
    /// since hover state never survives a mount. No arbitration runs here.
    #[must_use]
    pub fn new(left: PaneState, right: PaneState, viewport_width: u32) -> Self {
        Self {
            left: Self::sanitize(left),
            right: Self::sanitize(right),
            viewport_width,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    fn sanitize(mut pane: PaneState) -> PaneState {
        pane.width = clamp_side_pane_width(i64::from(pane.width));
        if pane.open_state == OpenState::Temporary {
            pane.open_state = OpenState::Closed;
        }
        pane
    }

    /// Current state of one pane.
    #[must_use]
    pub const fn state(&self, side: Side) -> PaneState {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Last applied viewport width.
    #[must_use]
    pub const fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Derived layout for the current state.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::compute(self.viewport_width, &self.left, &self.right)
    }

    fn state_mut(&mut self, side: Side) -> &mut PaneState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Sets one pane's open state and arbitrates if the change claims or
    /// releases space.
    ///
    /// Only transitions into or out of `Pinned` arbitrate; hover traffic
    /// between `Closed` and `Temporary` never closes the other pane.
    ///
    /// Returns every applied transition, the requested one first. An empty
    /// vector means the pane was already in `value`.
    pub fn set_open_state(&mut self, side: Side, value: OpenState) -> Vec<Transition> {
        let from = self.state(side).open_state;
        if from == value {
            return Vec::new();
        }

        self.state_mut(side).open_state = value;
        let mut transitions = vec![Transition {
            side,
            from,
            to: value,
        }];

        if from == OpenState::Pinned || value == OpenState::Pinned {
            transitions.extend(self.arbitrate(Some(side)));
        }

        tracing::debug!(
            side = %side,
            from = ?from,
            to = ?value,
            transitions = transitions.len(),
            "open state changed"
        );

        self.publish();
        transitions
    }

    /// Sets one pane's width, clamped silently to the side pane bounds.
    ///
    /// Returns the stored width. Never arbitrates.
    pub fn set_width(&mut self, side: Side, px: u32) -> u32 {
        let width = clamp_side_pane_width(i64::from(px));
        let pane = self.state_mut(side);
        if pane.width != width {
            pane.width = width;
            tracing::trace!(side = %side, requested = px, width = width, "width changed");
            self.publish();
        }
        width
    }

    /// Applies a new viewport width.
    ///
    /// Demotes temporary panes to `Closed`, then arbitrates with no specific
    /// pane changed so every open pane closes if space is short.
    pub fn apply_viewport_width(&mut self, viewport_width: u32) -> Vec<Transition> {
        let width_changed = self.viewport_width != viewport_width;
        self.viewport_width = viewport_width;

        let mut transitions = Vec::new();
        for side in Side::ALL {
            let pane = self.state_mut(side);
            if pane.open_state == OpenState::Temporary {
                pane.open_state = OpenState::Closed;
                transitions.push(Transition {
                    side,
                    from: OpenState::Temporary,
                    to: OpenState::Closed,
                });
            }
        }
        transitions.extend(self.arbitrate(None));

        tracing::debug!(
            viewport_width = viewport_width,
            transitions = transitions.len(),
            "viewport width applied"
        );

        if width_changed || !transitions.is_empty() {
            self.publish();
        }
        transitions
    }

    fn arbitrate(&mut self, pane_changed: Option<Side>) -> Vec<Transition> {
        let input = ArbitrationInput {
            enough_space: has_enough_space(self.viewport_width, &self.left, &self.right),
            pane_changed,
            left_pane_open: self.left.is_expanded(),
            right_pane_open: self.right.is_expanded(),
        };
        let decision = compute_panes_to_close(input);
        if decision.is_empty() {
            return Vec::new();
        }

        tracing::debug!(
            pane_changed = ?pane_changed,
            close_left = decision.close_left,
            close_right = decision.close_right,
            viewport_width = self.viewport_width,
            "not enough space, closing panes"
        );

        Side::ALL
            .into_iter()
            .filter(|side| decision.closes(*side))
            .map(|side| {
                let pane = self.state_mut(side);
                let from = pane.open_state;
                pane.open_state = OpenState::Closed;
                Transition {
                    side,
                    from,
                    to: OpenState::Closed,
                }
            })
            .collect()
    }

    /// Registers an observer notified after every finalized mutation.
    pub fn subscribe(&mut self, observer: impl LayoutObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn publish(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, observer) in &mut self.observers {
            observer.layout_changed(&snapshot);
        }
    }
}

impl fmt::Debug for PaneStateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaneStateStore")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("viewport_width", &self.viewport_width)
            .field("observers", &self.observers.len())
            .finish()
    }
}

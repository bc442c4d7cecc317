//! Single-deadline timer slots.
//!
//! A slot holds at most one pending timer. Scheduling replaces (and thereby
//! cancels) whatever was pending, so a superseded timer can never fire late:
//! firing only ever consults the slot's current deadline.

use crate::timing::clock::Millis;

/// Identity of one scheduled timer, unique within its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    id: TimerId,
    due: Millis,
}

/// One cancellable timer position.
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    pending: Option<Pending>,
    generation: u64,
}

impl TimerSlot {
    /// Creates an idle slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            generation: 0,
        }
    }

    /// Arms the slot to fire at `now + delay`, replacing any pending timer.
    pub fn schedule(&mut self, now: Millis, delay: Millis) -> TimerId {
        self.schedule_at(now.saturating_add(delay))
    }

    /// Arms the slot to fire at an absolute time, replacing any pending timer.
    pub fn schedule_at(&mut self, due: Millis) -> TimerId {
        self.generation += 1;
        let id = TimerId(self.generation);
        self.pending = Some(Pending { id, due });
        id
    }

    /// Cancels the pending timer. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a timer is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending timer.
    #[must_use]
    pub fn due(&self) -> Option<Millis> {
        self.pending.map(|p| p.due)
    }

    /// Identity of the pending timer.
    #[must_use]
    pub fn id(&self) -> Option<TimerId> {
        self.pending.map(|p| p.id)
    }

    /// Fires the pending timer if its deadline has passed.
    ///
    /// Returns the deadline it was scheduled for, so callers can timestamp the
    /// resulting transition deterministically.
    pub fn fire_if_due(&mut self, now: Millis) -> Option<Millis> {
        match self.pending {
            Some(p) if p.due <= now => {
                self.pending = None;
                Some(p.due)
            }
            _ => None,
        }
    }
}

//! Injectable clocks.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Milliseconds on a clock's own monotonic timeline.
pub type Millis = u64;

/// Source of the current time.
pub trait Clock {
    /// Milliseconds elapsed since the clock's origin.
    fn now(&self) -> Millis;
}

/// Monotonic wall clock anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Starts a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(Millis::MAX)
    }
}

/// Manually advanced clock for deterministic tests and event replay.
///
/// Clones share the same timeline, so a test can keep one clone and hand the
/// other to the coordinator.
///
/// ```
/// use sidepanes::timing::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let shared = clock.clone();
/// clock.advance(250);
/// assert_eq!(shared.now(), 250);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Millis>>,
}

impl ManualClock {
    /// Starts a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward.
    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Jumps to an absolute time. Going backwards is ignored.
    pub fn set(&self, ms: Millis) {
        if ms > self.now.get() {
            self.now.set(ms);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}

//! Debounced viewport width observation.
//!
//! Hosts report every resize sample; only the latest one survives the trailing
//! debounce window. A zero debounce applies samples immediately.

use crate::timing::{Millis, TimerSlot};

/// Trailing-debounce filter for viewport width samples.
#[derive(Debug, Clone, Default)]
pub struct ViewportMonitor {
    debounce_ms: Millis,
    pending_width: Option<u32>,
    timer: TimerSlot,
}

impl ViewportMonitor {
    /// Creates a monitor with the given trailing debounce.
    #[must_use]
    pub const fn new(debounce_ms: Millis) -> Self {
        Self {
            debounce_ms,
            pending_width: None,
            timer: TimerSlot::new(),
        }
    }

    /// Records a width sample.
    ///
    /// Returns the width right away when the debounce is zero; otherwise
    /// (re)arms the debounce timer and returns `None`.
    pub fn observe(&mut self, width: u32, now: Millis) -> Option<u32> {
        if self.debounce_ms == 0 {
            self.pending_width = None;
            self.timer.cancel();
            return Some(width);
        }

        tracing::trace!(width = width, "viewport sample debounced");
        self.pending_width = Some(width);
        self.timer.schedule(now, self.debounce_ms);
        None
    }

    /// Returns the settled width once the debounce window has elapsed.
    pub fn poll(&mut self, now: Millis) -> Option<u32> {
        self.timer.fire_if_due(now)?;
        self.pending_width.take()
    }

    /// Drops any pending sample.
    pub fn cancel(&mut self) {
        self.pending_width = None;
        self.timer.cancel();
    }

    /// Deadline of the pending sample.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timer.due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_sample_survives() {
        let mut monitor = ViewportMonitor::new(100);
        assert_eq!(monitor.observe(1200, 0), None);
        assert_eq!(monitor.observe(1100, 40), None);
        assert_eq!(monitor.observe(900, 80), None);

        assert_eq!(monitor.poll(150), None);
        assert_eq!(monitor.next_deadline(), Some(180));
        assert_eq!(monitor.poll(180), Some(900));
        assert_eq!(monitor.poll(400), None);
    }

    #[test]
    fn zero_debounce_is_immediate() {
        let mut monitor = ViewportMonitor::new(0);
        assert_eq!(monitor.observe(640, 0), Some(640));
        assert_eq!(monitor.next_deadline(), None);
    }
}

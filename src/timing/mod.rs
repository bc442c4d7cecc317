//! Time sources and cancellable timers.
//!
//! Every delay in the crate (hover open delay, leave debounce, reopen cooldown,
//! viewport debounce) is modeled as a [`TimerSlot`] holding at most one pending
//! deadline. Nothing spawns threads or sleeps: the host calls
//! [`SidepanesCoordinator::tick`](crate::SidepanesCoordinator::tick) and due
//! slots fire against the injected [`Clock`].
//!
//! - [`clock`]: `Clock` trait, monotonic `SystemClock`, test `ManualClock`
//! - [`timer`]: `TimerSlot` with replace-on-schedule semantics

pub mod clock;
pub mod timer;

pub use clock::{Clock, ManualClock, Millis, SystemClock};
pub use timer::{TimerId, TimerSlot};

//! Clocks and cancelable deadlines
//!
//! Every timer in the crate reads time through a [`Clock`] and is driven by
//! the owner calling `tick()`. Nothing spawns threads or tasks, so a
//! [`ManualClock`] gives tests full control over when deadlines pass.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic time, measured from an arbitrary origin
pub trait Clock {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;
}

/// Wall-clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the current instant
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
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock
///
/// Clones share the same underlying time, so a test can hand one clone to a
/// controller and keep another to move time forward.
///
/// # Examples
/// ```
/// use peekr::timing::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let shared = clock.clone();
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(shared.now(), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock at time zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Move time forward by a number of milliseconds
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.elapsed.get()
    }
}

/// A single restartable deadline
///
/// Restarting replaces the pending deadline; cancelling drops it. A deadline
/// fires at most once per restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debounce {
    /// Create an idle timer with the given delay
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Configured delay
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule (or reschedule) the deadline `delay` after `now`
    pub fn restart(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is scheduled
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the deadline, if one is scheduled
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_sub(now))
    }

    /// Consume the deadline if it has passed
    ///
    /// Returns `true` exactly once per scheduled deadline.
    pub fn fire_if_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

//! Time sources for timed matches.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock.
///
/// Reads return a fixed base plus an offset. The offset moves when
/// `advance` is called and, if a tick is set, by `tick` after every read.
/// Clones share the same offset, so a test can hold one handle while the
/// match owns another.
#[derive(Clone, Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Rc<Cell<Duration>>,
    tick: Duration,
}

impl ManualClock {
    /// A clock that only moves when advanced.
    pub fn new() -> Self {
        Self::ticking(Duration::ZERO)
    }

    /// A clock that moves forward by `tick` on every read.
    pub fn ticking(tick: Duration) -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
            tick,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Time elapsed since the clock was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let now = self.base + self.offset.get();
        self.advance(self.tick);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_manual_clock_advance_is_shared() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        let start = clock.now();

        handle.advance(Duration::from_secs(30));

        assert_eq!(clock.now() - start, Duration::from_secs(30));
        assert_eq!(clock.now() - start, Duration::from_secs(30));
    }

    #[test]
    fn test_ticking_clock() {
        let clock = ManualClock::ticking(Duration::from_secs(10));
        let t0 = clock.now();
        let t1 = clock.now();
        let t2 = clock.now();

        assert_eq!(t1 - t0, Duration::from_secs(10));
        assert_eq!(t2 - t0, Duration::from_secs(20));
        assert_eq!(clock.elapsed(), Duration::from_secs(30));
    }
}

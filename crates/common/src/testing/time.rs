//! Manually advanced clock

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::time::Clock;

/// Clock that only moves when told to
///
/// Clones share the same elapsed time, so a clone handed to a token store
/// can be advanced from the test body.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use gameshelf_common::testing::MockClock;
/// use gameshelf_common::Clock;
///
/// let clock = MockClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_secs(3300));
/// assert_eq!(clock.now().duration_since(start), Duration::from_secs(3300));
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    start: Instant,
    elapsed: Arc<Mutex<Duration>>,
}

impl MockClock {
    /// Create a clock frozen at the current instant
    pub fn new() -> Self {
        Self { start: Instant::now(), elapsed: Arc::new(Mutex::new(Duration::ZERO)) }
    }

    /// Simulate `duration` passing
    pub fn advance(&self, duration: Duration) {
        *self.elapsed.lock() += duration;
    }

    /// Total simulated time since creation
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock()
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        self.start + *self.elapsed.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn does_not_move_on_its_own() {
        let clock = MockClock::new();
        let first = clock.now();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.now(), first);
    }

    #[test]
    fn clones_share_elapsed_time() {
        let clock = MockClock::new();
        let handle = clock.clone();
        handle.advance(Duration::from_secs(10));
        assert_eq!(clock.elapsed(), Duration::from_secs(10));
    }
}

//! Time abstraction for testability
//!
//! Expiry checks go through [`Clock`] instead of calling `Instant::now()`
//! directly, so token lifetimes measured in hours can be exercised in tests
//! without waiting. Use [`SystemClock`] in production; a manually advanced
//! clock lives in `testing::MockClock`.

use std::time::Instant;

/// Source of monotonic time
pub trait Clock: Send + Sync {
    /// Current monotonic instant
    fn now(&self) -> Instant;
}

/// Real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}

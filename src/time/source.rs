//! Wall-clock sources.
//!
//! The clock algebra never reads the system time itself; callers pass a
//! reading in, usually taken from one of these sources.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::Timestamp;

/// Supplies the current wall-clock time in milliseconds since the epoch.
pub trait WallClock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Production source backed by `SystemTime`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> Timestamp {
        let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            // System clock set before 1970.
            Err(e) => i64::try_from(e.duration().as_millis()).map_or(i64::MIN, |m| -m),
        };
        Timestamp(millis)
    }
}

/// Manually driven source for tests and simulations.
#[derive(Debug, Default)]
pub struct FixedClock(AtomicI64);

impl FixedClock {
    pub fn new(at: Timestamp) -> Self {
        FixedClock(AtomicI64::new(at.0))
    }

    pub fn set(&self, at: Timestamp) {
        self.0.store(at.0, Ordering::SeqCst);
    }

    /// Moves the clock by `delta_millis`, which may be negative.
    pub fn advance(&self, delta_millis: i64) -> Timestamp {
        let prev = self.0.fetch_add(delta_millis, Ordering::SeqCst);
        Timestamp(prev.wrapping_add(delta_millis))
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.0.load(Ordering::SeqCst))
    }
}

impl<W: WallClock + ?Sized> WallClock for &W {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<W: WallClock + ?Sized> WallClock for std::sync::Arc<W> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

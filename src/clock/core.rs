//!
//! Clock algebra: the two state transitions of a hybrid logical clock.
//!
//! Both transitions are pure. They take the node's current clock plus an
//! observed wall-clock reading and return a validated candidate. On error the
//! caller keeps its previous clock.

use crate::error::ClockError;
use crate::primitives::HybridLogicalClock;
use crate::types::{Timestamp, MAX_COUNTER};

impl HybridLogicalClock {
    /// Advances the clock for a locally generated event.
    ///
    /// Call exactly once per local event and stamp the event with the result.
    ///
    /// # Arguments
    /// * `now` - The observed wall-clock reading.
    /// * `max_clock_drift_ms` - Largest tolerated distance between the result and `now`.
    ///
    /// # Returns
    /// The new clock, or a `ClockError` if validation fails.
    pub fn local_tick(&self, now: Timestamp, max_clock_drift_ms: u64) -> Result<Self, ClockError> {
        let candidate = if now > self.timestamp() {
            // Counter is carried forward unchanged on this branch.
            self.with(now, self.counter())
        } else {
            self.with(self.timestamp(), self.counter().saturating_add(1))
        };
        validate(candidate, now, max_clock_drift_ms)
    }

    /// Folds a remote clock, received alongside an inbound event, into this one.
    ///
    /// The result becomes the new local clock and the logical timestamp under
    /// which the remote event is applied. It always keeps the local node id.
    ///
    /// # Arguments
    /// * `remote` - The clock attached to the inbound event.
    /// * `now` - The observed wall-clock reading.
    /// * `max_clock_drift_ms` - Largest tolerated distance between the result and `now`.
    pub fn remote_merge(
        &self,
        remote: &HybridLogicalClock,
        now: Timestamp,
        max_clock_drift_ms: u64,
    ) -> Result<Self, ClockError> {
        if self.node() == remote.node() {
            return Err(ClockError::DuplicateNode(self.node().clone()));
        }

        let local_ts = self.timestamp();
        let remote_ts = remote.timestamp();

        let candidate = if now > local_ts && now > remote_ts {
            self.with(now, 0)
        } else if local_ts == remote_ts {
            self.with(local_ts, self.counter().max(remote.counter()).saturating_add(1))
        } else if local_ts > remote_ts {
            self.with(local_ts, self.counter().saturating_add(1))
        } else {
            self.with(remote_ts, remote.counter().saturating_add(1))
        };
        validate(candidate, now, max_clock_drift_ms)
    }
}

/// Checks a candidate clock for counter overflow, then for drift from `now`.
fn validate(
    candidate: HybridLogicalClock,
    now: Timestamp,
    max_clock_drift_ms: u64,
) -> Result<HybridLogicalClock, ClockError> {
    if candidate.counter() > MAX_COUNTER {
        return Err(ClockError::CausalityOverflow);
    }
    if candidate.timestamp().abs_diff(now) > max_clock_drift_ms {
        return Err(ClockError::ClockDrift { candidate: candidate.timestamp(), now });
    }
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeId, DEFAULT_MAX_CLOCK_DRIFT_MS};

    const DRIFT: u64 = DEFAULT_MAX_CLOCK_DRIFT_MS;
    const NOW: Timestamp = Timestamp(1_700_000_000_000);

    fn local_node() -> NodeId {
        "aaaaaaaaaaaaaaaa".parse().unwrap()
    }

    fn remote_node() -> NodeId {
        "bbbbbbbbbbbbbbbb".parse().unwrap()
    }

    fn at(ms: i64) -> Timestamp {
        Timestamp(NOW.0 + ms)
    }

    #[test]
    fn test_tick_advances_to_wall_clock() {
        let local = HybridLogicalClock::new(at(-60_000), local_node(), 0);
        let ticked = local.local_tick(NOW, DRIFT).unwrap();
        assert_eq!(ticked.timestamp(), NOW);
        assert_eq!(ticked.counter(), 0);
    }

    #[test]
    fn test_tick_carries_counter_when_wall_clock_advances() {
        let local = HybridLogicalClock::new(at(-10), local_node(), 7);
        let ticked = local.local_tick(NOW, DRIFT).unwrap();
        assert_eq!(ticked.timestamp(), NOW);
        assert_eq!(ticked.counter(), 7);
    }

    #[test]
    fn test_tick_increments_counter_when_wall_clock_stalls() {
        let local = HybridLogicalClock::new(at(60_000), local_node(), 0);
        let ticked = local.local_tick(NOW, DRIFT).unwrap();
        assert_eq!(ticked.timestamp(), at(60_000));
        assert_eq!(ticked.counter(), 1);

        let same = HybridLogicalClock::new(NOW, local_node(), 4);
        assert_eq!(same.local_tick(NOW, DRIFT).unwrap().counter(), 5);
    }

    #[test]
    fn test_tick_rejects_drifted_clock() {
        let local = HybridLogicalClock::new(at(60_001), local_node(), 0);
        assert_eq!(
            local.local_tick(NOW, DRIFT),
            Err(ClockError::ClockDrift { candidate: at(60_001), now: NOW })
        );
    }

    #[test]
    fn test_tick_overflow_boundary() {
        let at_limit = HybridLogicalClock::new(NOW, local_node(), MAX_COUNTER - 1);
        assert_eq!(at_limit.local_tick(NOW, DRIFT).unwrap().counter(), MAX_COUNTER);

        let over = HybridLogicalClock::new(NOW, local_node(), MAX_COUNTER);
        assert_eq!(over.local_tick(NOW, DRIFT), Err(ClockError::CausalityOverflow));

        let saturated = HybridLogicalClock::new(NOW, local_node(), u32::MAX);
        assert_eq!(saturated.local_tick(NOW, DRIFT), Err(ClockError::CausalityOverflow));
    }

    #[test]
    fn test_merge_rejects_duplicate_node() {
        let local = HybridLogicalClock::new(NOW, local_node(), 0);
        let remote = HybridLogicalClock::new(NOW, local_node(), 0);
        assert_eq!(
            local.remote_merge(&remote, NOW, DRIFT),
            Err(ClockError::DuplicateNode(local_node()))
        );
    }

    #[test]
    fn test_merge_rejects_remote_drift() {
        let local = HybridLogicalClock::new(NOW, local_node(), 0);
        let remote = HybridLogicalClock::new(at(60 * 60 * 1000), remote_node(), 0);
        assert_eq!(
            local.remote_merge(&remote, NOW, DRIFT),
            Err(ClockError::ClockDrift { candidate: remote.timestamp(), now: NOW })
        );
    }

    #[test]
    fn test_merge_rejects_overflowing_remote_counter() {
        let local = HybridLogicalClock::new(NOW, local_node(), 0);
        let remote = HybridLogicalClock::new(NOW, remote_node(), MAX_COUNTER + 1);
        assert_eq!(local.remote_merge(&remote, NOW, DRIFT), Err(ClockError::CausalityOverflow));
    }

    #[test]
    fn test_merge_both_behind_wall_clock_resets_counter() {
        let local = HybridLogicalClock::new(at(-3_600_000), local_node(), 1);
        let remote = HybridLogicalClock::new(at(-3_600_000), remote_node(), 3);
        let merged = local.remote_merge(&remote, NOW, DRIFT).unwrap();
        assert_eq!(merged, HybridLogicalClock::new(NOW, local_node(), 0));
    }

    #[test]
    fn test_merge_equal_timestamps_takes_max_counter() {
        let local = HybridLogicalClock::new(NOW, local_node(), 1);
        let remote = HybridLogicalClock::new(NOW, remote_node(), 3);
        let merged = local.remote_merge(&remote, NOW, DRIFT).unwrap();
        assert_eq!(merged, HybridLogicalClock::new(NOW, local_node(), 4));
    }

    #[test]
    fn test_merge_remote_in_past_increments_local_counter() {
        let local = HybridLogicalClock::new(at(10), local_node(), 1);
        let remote = HybridLogicalClock::new(at(-3_600_000), remote_node(), 3);
        let merged = local.remote_merge(&remote, NOW, DRIFT).unwrap();
        assert_eq!(merged, HybridLogicalClock::new(at(10), local_node(), 2));
    }

    #[test]
    fn test_merge_remote_in_future_adopts_remote() {
        let local = HybridLogicalClock::new(NOW, local_node(), 1);
        let remote = HybridLogicalClock::new(at(59_000), remote_node(), 3);
        let merged = local.remote_merge(&remote, NOW, DRIFT).unwrap();
        assert_eq!(merged, HybridLogicalClock::new(at(59_000), local_node(), 4));
    }

    #[test]
    fn test_merge_drift_boundary() {
        let local = HybridLogicalClock::new(NOW, local_node(), 0);
        let edge = HybridLogicalClock::new(at(DRIFT as i64), remote_node(), 0);
        assert!(local.remote_merge(&edge, NOW, DRIFT).is_ok());

        let past_edge = HybridLogicalClock::new(at(DRIFT as i64 + 1), remote_node(), 0);
        assert!(matches!(
            local.remote_merge(&past_edge, NOW, DRIFT),
            Err(ClockError::ClockDrift { .. })
        ));
    }

    #[test]
    fn test_failed_merge_leaves_input_untouched() {
        let local = HybridLogicalClock::new(NOW, local_node(), 2);
        let snapshot = local.clone();
        let remote = HybridLogicalClock::new(at(3_600_000), remote_node(), 0);
        assert!(local.remote_merge(&remote, NOW, DRIFT).is_err());
        assert_eq!(local, snapshot);
    }
}

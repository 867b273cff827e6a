//! Caller-held slot for a node's current clock.
//!
//! `LocalClock` owns the node's clock behind a mutex together with the wall
//! clock it reads from. Each `tick`/`merge` reads the slot, runs the pure
//! transition and commits the result under a single lock, so concurrent event
//! producers on one node stay serialized. Failed candidates are never stored.

use parking_lot::Mutex;

use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::primitives::HybridLogicalClock;
use crate::time::WallClock;

#[derive(Debug)]
pub struct LocalClock<W: WallClock> {
    current: Mutex<HybridLogicalClock>,
    wall: W,
    config: ClockConfig,
}

impl<W: WallClock> LocalClock<W> {
    /// Starts a new node: fresh node id, timestamp from `wall`, counter 0.
    pub fn new(wall: W, config: ClockConfig) -> Self {
        let initial = HybridLogicalClock::now_on(&wall);
        Self::resume(initial, wall, config)
    }

    /// Resumes from a previously held (e.g. persisted) clock.
    pub fn resume(clock: HybridLogicalClock, wall: W, config: ClockConfig) -> Self {
        LocalClock { current: Mutex::new(clock), wall, config }
    }

    /// Snapshot of the current clock.
    pub fn current(&self) -> HybridLogicalClock {
        self.current.lock().clone()
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Stamps a new local event.
    pub fn tick(&self) -> Result<HybridLogicalClock, ClockError> {
        let mut current = self.current.lock();
        let now = self.wall.now();
        let next = current.local_tick(now, self.config.max_clock_drift_ms).inspect_err(|e| {
            tracing::warn!(node = %current.node(), %now, error = %e, "Local tick rejected");
        })?;
        tracing::debug!(node = %next.node(), clock = %next, "Local tick");
        *current = next.clone();
        Ok(next)
    }

    /// Folds in the clock of an inbound remote event and returns the clock
    /// under which that event should be applied.
    pub fn merge(&self, remote: &HybridLogicalClock) -> Result<HybridLogicalClock, ClockError> {
        let mut current = self.current.lock();
        let now = self.wall.now();
        let next = current
            .remote_merge(remote, now, self.config.max_clock_drift_ms)
            .inspect_err(|e| {
                tracing::warn!(
                    node = %current.node(),
                    remote = %remote,
                    %now,
                    error = %e,
                    "Remote clock rejected"
                );
            })?;
        tracing::debug!(node = %next.node(), remote = %remote, clock = %next, "Merged remote clock");
        *current = next.clone();
        Ok(next)
    }

    /// Consumes the slot, returning the last committed clock.
    pub fn into_inner(self) -> HybridLogicalClock {
        self.current.into_inner()
    }
}

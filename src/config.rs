//! Tunables for a node's clock.

use crate::types::DEFAULT_MAX_CLOCK_DRIFT_MS;

/// Clock settings, deserializable from the host application's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Largest tolerated distance, in milliseconds, between a new clock value
    /// and the wall clock. Guards against remote peers dragging the local
    /// clock far into the future or past.
    pub max_clock_drift_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig { max_clock_drift_ms: DEFAULT_MAX_CLOCK_DRIFT_MS }
    }
}

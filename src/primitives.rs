use std::cmp::Ordering;

use crate::time::{SystemClock, WallClock};
use crate::types::{Counter, NodeId, Timestamp};

// --- Hybrid Logical Clock ---------------------------------------------------

/// A hybrid logical clock value: wall-clock component, causality counter and
/// the identity of the node that owns it.
///
/// Values are immutable. `local_tick` and `remote_merge` (see `crate::clock`)
/// return new clocks; the caller decides whether to keep them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HybridLogicalClock {
    timestamp: Timestamp,
    node: NodeId,
    counter: Counter,
}

impl HybridLogicalClock {
    pub fn new(timestamp: Timestamp, node: NodeId, counter: Counter) -> Self {
        HybridLogicalClock { timestamp, node, counter }
    }

    /// A fresh clock for a new node, read from the given wall clock.
    pub fn now_on<W: WallClock + ?Sized>(wall: &W) -> Self {
        Self::new(wall.now(), NodeId::mint(), 0)
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn node(&self) -> &NodeId {
        &self.node
    }

    pub fn counter(&self) -> Counter {
        self.counter
    }

    /// Copy of this clock with a different timestamp and counter; the node
    /// identity is always preserved.
    pub(crate) fn with(&self, timestamp: Timestamp, counter: Counter) -> Self {
        Self::new(timestamp, self.node.clone(), counter)
    }
}

impl Default for HybridLogicalClock {
    /// `(now, freshly minted node, 0)`.
    fn default() -> Self {
        Self::now_on(&SystemClock)
    }
}

impl Ord for HybridLogicalClock {
    /// Timestamp first, then counter, then node id. Total as long as node ids
    /// are unique across the compared clocks.
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then(self.counter.cmp(&other.counter))
            .then_with(|| self.node.as_str().cmp(other.node.as_str()))
    }
}

impl PartialOrd for HybridLogicalClock {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

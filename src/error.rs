//!
//! Defines error types for the clock algebra, the canonical codec and the
//! persistence layer. The three taxonomies are disjoint on purpose: callers
//! branch on clock errors when accepting events, on decode errors when parsing
//! input, and on store errors when touching storage.

use crate::types::{NodeId, Timestamp};

/// Errors produced by `local_tick` and `remote_merge`. None of them affect the
/// clock the caller already holds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// The remote clock carries the local node's own identity.
    #[error("Remote clock carries the local node id {0}")]
    DuplicateNode(NodeId),
    /// The candidate clock is further from the wall clock than the allowed drift.
    #[error("Clock drift exceeded: candidate {candidate} vs wall clock {now}")]
    ClockDrift { candidate: Timestamp, now: Timestamp },
    /// The causality counter no longer fits the canonical encoding.
    #[error("Causality counter overflow")]
    CausalityOverflow,
}

/// Errors produced when decoding a canonical clock string. Each variant echoes
/// the original input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Failed to decode timestamp from {0:?}")]
    TimestampDecodeFailure(String),
    #[error("Failed to decode counter from {0:?}")]
    CounterDecodeFailure(String),
    #[error("Failed to decode node id from {0:?}")]
    NodeDecodeFailure(String),
}

/// Errors produced when parsing a standalone node identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeIdError {
    #[error("Node id must be 16 characters, got {0}")]
    InvalidLength(usize),
    #[error("Node id contains non-hex character {0:?}")]
    InvalidCharacter(char),
}

/// Errors surfaced by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage collaborator failed (permissions, disk, ...).
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The persisted bytes are not valid UTF-8.
    #[error("Persisted clock is not valid UTF-8")]
    NotUtf8,
    /// The persisted string is not a canonical clock encoding.
    #[error("Persisted clock is corrupt: {0}")]
    Corrupt(#[from] DecodeError),
}

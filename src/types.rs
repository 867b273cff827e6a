//! Shared scalar types for the clock: wall-clock timestamps, node identities
//! and the counter bound imposed by the canonical encoding.

use std::fmt;
use std::str::FromStr;

use rand_core::{OsRng, RngCore};
use uuid::Uuid;

use crate::error::NodeIdError;

/// Causality counter carried by every clock.
pub type Counter = u32;

/// Largest counter value accepted by validation: 36^5.
///
/// The canonical encoding renders the counter as five base-36 digits, so this
/// bound is tied to the wire format and must not be changed independently.
pub const MAX_COUNTER: Counter = 36u32.pow(5);

/// Default bound on the distance between a clock and the observed wall clock.
pub const DEFAULT_MAX_CLOCK_DRIFT_MS: u64 = 60 * 1000;

/// Width of a node identifier in characters.
pub const NODE_ID_LEN: usize = 16;

/// Milliseconds since the Unix epoch. Negative values are pre-epoch and are
/// not treated specially.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const fn from_millis(epoch_millis: i64) -> Self {
        Timestamp(epoch_millis)
    }

    pub const fn epoch_millis(&self) -> i64 {
        self.0
    }

    /// Absolute distance to `other` in milliseconds. Never overflows.
    pub const fn abs_diff(&self, other: Timestamp) -> u64 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(epoch_millis: i64) -> Self {
        Timestamp(epoch_millis)
    }
}

/// Identity of a node taking part in a causal domain.
///
/// Always 16 ASCII hex digits. Doubles as the final ordering tie-breaker and
/// as the duplicate-detection key during merges, so two live nodes must never
/// share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Mints a fresh identifier from 128 bits of OS randomness.
    ///
    /// No collision check is possible here; uniqueness across the domain is
    /// enforced at merge time.
    pub fn mint() -> Self {
        let mut bytes = [0u8; 16];
        OsRng.fill_bytes(&mut bytes);
        Self::from_uuid(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Derives an identifier from an existing UUID by keeping the trailing 16
    /// characters of its hyphen-free hex form.
    pub fn from_uuid(uuid: Uuid) -> Self {
        let simple = uuid.simple().to_string();
        NodeId(simple[simple.len() - NODE_ID_LEN..].to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for NodeId {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(NodeIdError::InvalidCharacter(c));
        }
        if s.len() != NODE_ID_LEN {
            return Err(NodeIdError::InvalidLength(s.len()));
        }
        Ok(NodeId(s.to_owned()))
    }
}

impl TryFrom<String> for NodeId {
    type Error = NodeIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NodeId> for String {
    fn from(node: NodeId) -> Self {
        node.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for NodeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NodeId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

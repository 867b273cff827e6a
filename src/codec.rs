//! Canonical text encoding of a clock: `<timestamp>:<counter>:<node>`.
//!
//! The timestamp is zero-padded to 15 decimal digits and the counter to 5
//! lowercase base-36 digits, so that plain string comparison of two encodings
//! agrees with clock ordering. This string is the only interchange format,
//! used both on the wire and on disk.

use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;
use crate::primitives::HybridLogicalClock;
use crate::types::{Counter, NodeId, Timestamp};

const TIMESTAMP_WIDTH: usize = 15;
const COUNTER_WIDTH: usize = 5;
const SEPARATOR: char = ':';

/// Encodes `clock` into its canonical string form.
pub fn encode(clock: &HybridLogicalClock) -> String {
    format!(
        "{:0tw$}{sep}{:0>cw$}{sep}{}",
        clock.timestamp().epoch_millis(),
        to_base36(clock.counter()),
        clock.node(),
        tw = TIMESTAMP_WIDTH,
        cw = COUNTER_WIDTH,
        sep = SEPARATOR,
    )
}

/// Decodes a canonical clock string.
///
/// Input with fewer than three fields is rejected as a timestamp failure.
/// Any text after a third separator stays in the node field and fails there.
pub fn decode(encoded: &str) -> Result<HybridLogicalClock, DecodeError> {
    let mut parts = encoded.splitn(3, SEPARATOR);
    let (Some(ts), Some(counter), Some(node)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(DecodeError::TimestampDecodeFailure(encoded.to_owned()));
    };

    let timestamp = ts
        .parse::<i64>()
        .map_err(|_| DecodeError::TimestampDecodeFailure(encoded.to_owned()))?;
    let counter = from_base36(counter)
        .ok_or_else(|| DecodeError::CounterDecodeFailure(encoded.to_owned()))?;
    let node = node
        .parse::<NodeId>()
        .map_err(|_| DecodeError::NodeDecodeFailure(encoded.to_owned()))?;

    Ok(HybridLogicalClock::new(Timestamp(timestamp), node, counter))
}

fn to_base36(mut value: Counter) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::with_capacity(COUNTER_WIDTH + 1);
    while value > 0 {
        // `from_digit` never fails for a radix-36 remainder.
        digits.push(char::from_digit(value % 36, 36).unwrap_or('0'));
        value /= 36;
    }
    digits.iter().rev().collect()
}

fn from_base36(digits: &str) -> Option<Counter> {
    // `from_str_radix` would also accept a leading sign.
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Counter::from_str_radix(digits, 36).ok()
}

impl fmt::Display for HybridLogicalClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for HybridLogicalClock {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl serde::Serialize for HybridLogicalClock {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for HybridLogicalClock {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        decode(&raw).map_err(serde::de::Error::custom)
    }
}

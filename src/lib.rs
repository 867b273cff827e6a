#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! hlc-core is a Hybrid Logical Clock for distributed nodes.
//!
//! A clock is an immutable `(timestamp, counter, node)` triple with a strict
//! total order. Nodes advance it with [`HybridLogicalClock::local_tick`] for
//! local events and [`HybridLogicalClock::remote_merge`] for inbound remote
//! events; both validate the result against counter overflow and wall-clock
//! drift. Clocks travel between nodes and to disk in a canonical,
//! lexicographically sortable string form (see [`codec`]).
//!
//! The crate holds no global state. Callers own the node's current clock,
//! either directly or through the mutex-guarded [`LocalClock`] slot.
//!
//! References:
//! - <https://cse.buffalo.edu/tech-reports/2014-04.pdf>
//! - <https://jaredforsyth.com/posts/hybrid-logical-clocks/>

// Module for shared scalar types (Timestamp, NodeId, counter bound).
pub mod types;

// Module for the clock value type and its ordering.
pub mod primitives;

// Re-export the clock type for easier access at the crate root.
pub use primitives::HybridLogicalClock;

// Module for the tick/merge algebra and the caller-held slot.
pub mod clock;

pub use clock::LocalClock;

// Module for the canonical string encoding.
pub mod codec;

// Module for clock configuration.
pub mod config;

pub use config::ClockConfig;

// Module for error types.
pub mod error;

pub use error::{ClockError, DecodeError, NodeIdError, StoreError};

// Module for wall-clock sources.
pub mod time;

// Module for persistence.
pub mod storage;

pub use types::{Counter, NodeId, Timestamp, DEFAULT_MAX_CLOCK_DRIFT_MS, MAX_COUNTER};

#[cfg(feature = "test-utils")]
pub mod testing;

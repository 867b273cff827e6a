pub mod core;
pub mod local;

// Re-export the slot type so callers can use `crate::clock::LocalClock`.
pub use local::LocalClock;

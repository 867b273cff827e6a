//! Wall-clock time sources feeding the hybrid logical clock.

pub mod source;

// Re-export for convenience
pub use source::*;

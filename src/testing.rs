//! Helpers for integration tests, enabled by the `test-utils` feature.

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly `tracing` subscriber honouring `RUST_LOG`.
/// Safe to call from every test; only the first call takes effect.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

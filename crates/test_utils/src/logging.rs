//! Test Logging
//!
//! Installs a `tracing` subscriber for test runs so rule-level events are
//! visible with `RUST_LOG=domain_rating=trace cargo test -- --nocapture`.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initializes the test tracing subscriber
///
/// Safe to call from every test; only the first call installs anything.
/// The filter comes from `RUST_LOG` and defaults to `warn`.
pub fn init_test_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}

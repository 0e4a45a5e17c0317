//! Shared helpers for the demo binaries.

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered through `RUST_LOG`, defaulting to
/// `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

//! Tracing setup.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - show debug messages everywhere
//! - `RUST_LOG=kitchen=trace` - trace for the kitchen crates only
//! - Default: `info,kitchen=debug,sqlx=warn`

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,kitchen=debug,sqlx=warn";

/// Installs the global fmt subscriber. Calling it again is a no-op, so tests
/// and binaries can both call it freely.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

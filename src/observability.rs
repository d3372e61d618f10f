//! Structured logging setup

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::Result;

/// Install the JSON-formatted tracing subscriber
///
/// The configured log level seeds the filter; a malformed directive falls
/// back to `info`. Re-initialization is a no-op, which keeps test binaries
/// that call this from several places happy.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter =
        EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().json().with_env_filter(filter).try_init();

    tracing::info!(service = %config.service.name, "tracing initialized");

    Ok(())
}

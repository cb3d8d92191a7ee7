//! Subscriber setup for the `ember` binary.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, reload};

use crate::config::DEFAULT_LOG_LEVEL;

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Install the global subscriber. Runs before the config is read so
/// migrations and store setup are logged; until [`apply_configured_level`]
/// runs the filter is `RUST_LOG` or [`DEFAULT_LOG_LEVEL`].
pub fn init(json: bool) -> FilterHandle {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let (filter, handle) = reload::Layer::new(filter);
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt.json()).init();
    } else {
        registry.with(fmt).init();
    }
    handle
}

/// Switch to the configured level. `RUST_LOG` keeps precedence.
pub fn apply_configured_level(handle: &FilterHandle, level: &str) -> eyre::Result<()> {
    if std::env::var_os("RUST_LOG").is_some() {
        return Ok(());
    }
    handle.reload(EnvFilter::new(level))?;
    tracing::debug!(level, "applied configured log level");
    Ok(())
}

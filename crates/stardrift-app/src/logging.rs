//! Tracing subscriber setup for the Stardrift binary.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here captures those records too.

use stardrift_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the config's `debug.log_level`
/// is used, falling back to `info`.
pub fn init_logging(config: &Config) {
    let filter_str = if config.debug.log_level.is_empty() {
        "info".to_string()
    } else {
        config.debug.log_level.clone()
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

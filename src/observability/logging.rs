//! Structured logging initialization.
//!
//! JSON lines in production so each entry is a self-contained record; a
//! human-readable formatter when the debug flag is set. `RUST_LOG` always
//! wins over the configured level.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Initialize the global tracing subscriber from the resolved configuration.
///
/// Call once at startup, before the first log event.
pub fn init(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "edge_pulse={level},tower_http={level}",
            level = config.log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.debug {
        registry.with(tracing_subscriber::fmt::layer()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    }
}

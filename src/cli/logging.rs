//! tracing subscriber setup for the binary

use tracing_subscriber::EnvFilter;

use crate::core::config::LoggingConfig;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise debug mode logs this crate at debug
/// level and everything else uses the configured filter.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .try_init();
}

fn default_directives(config: &LoggingConfig) -> String {
    if config.debug {
        format!("{},aisle=debug", config.filter)
    } else {
        config.filter.clone()
    }
}

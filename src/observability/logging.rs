//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the binary
//! - Resolve the log level from environment and config
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level
//! - Logs go to stderr so stdout stays a clean JSON payload

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Build the filter: `RUST_LOG` if set, otherwise the configured level for this crate.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(config).into())
}

fn default_directive(config: &ObservabilityConfig) -> String {
    format!(
        "gateway_transcoder={}",
        config.log_level.to_ascii_lowercase()
    )
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(config: &ObservabilityConfig) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        let config = ObservabilityConfig {
            log_level: "WARN".into(),
        };
        assert_eq!(default_directive(&config), "gateway_transcoder=warn");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let config = ObservabilityConfig::default();
        init_logging(&config);
        init_logging(&config);
    }
}

//! Tracing subscriber setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::DomainConfig;
use crate::error::{DomainError, Result};

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over the configured filter. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init(config: &DomainConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter).map_err(|e| {
            DomainError::Config(format!("invalid log filter '{}': {}", config.log_filter, e))
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.log_json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = DomainConfig::default();
        assert!(init(&config).is_ok());
        assert!(init(&config).is_ok());
    }

    #[test]
    fn test_rejects_malformed_filter() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }

        let config = DomainConfig {
            log_filter: "post_domain=notalevel".to_string(),
            ..DomainConfig::default()
        };

        assert!(matches!(init(&config), Err(DomainError::Config(_))));
    }
}

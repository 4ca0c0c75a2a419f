//! Configuration for the post domain
//!
//! Values are read from `POST_DOMAIN_*` environment variables, optionally
//! seeded from a `.env` file.

use serde::{Deserialize, Serialize};

use crate::content::Content;
use crate::error::{DomainError, Result};

pub const ENV_PREFIX: &str = "POST_DOMAIN_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// `EnvFilter` directive for log output
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,

    /// Reject invalid bodies at construction instead of at validation
    #[serde(default)]
    pub strict_construction: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_json: false,
            strict_construction: false,
        }
    }
}

impl DomainConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine
        let _ = dotenv::dotenv();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::prefixed(ENV_PREFIX).from_iter::<_, Self>(vars)?;
        Ok(config)
    }

    /// Build a post body following the configured construction discipline.
    pub fn build_content(&self, text: Option<String>) -> Result<Content> {
        match (self.strict_construction, text) {
            (true, Some(text)) => Content::try_new(text),
            (true, None) => Err(DomainError::Validation {
                violations: Content::new(None).violations(),
            }),
            (false, text) => Ok(Content::new(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DomainConfig::from_vars(vars(&[("UNRELATED", "1")])).unwrap();
        assert_eq!(config, DomainConfig::default());
    }

    #[test]
    fn test_reads_prefixed_vars() {
        let config = DomainConfig::from_vars(vars(&[
            ("POST_DOMAIN_LOG_FILTER", "debug,post_domain=trace"),
            ("POST_DOMAIN_LOG_JSON", "true"),
            ("POST_DOMAIN_STRICT_CONSTRUCTION", "true"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "debug,post_domain=trace");
        assert!(config.log_json);
        assert!(config.strict_construction);
    }

    #[test]
    fn test_invalid_bool_is_config_error() {
        let err = DomainConfig::from_vars(vars(&[("POST_DOMAIN_LOG_JSON", "maybe")])).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn test_lenient_construction_accepts_anything() {
        let config = DomainConfig::default();
        let content = config.build_content(None).unwrap();
        assert_eq!(content.content(), None);
    }

    #[test]
    fn test_strict_construction_rejects_missing_body() {
        let config = DomainConfig {
            strict_construction: true,
            ..DomainConfig::default()
        };

        let err = config.build_content(None).unwrap_err();
        assert_eq!(err.violations()[0].message, "본문을 입력해주세요");
        assert!(config.build_content(Some("본문".to_string())).is_ok());
    }
}

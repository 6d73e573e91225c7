//! Astrology engine configuration

use serde::Deserialize;
use std::time::Duration;

use super::ai::is_http_url;
use super::error::ValidationError;

/// Astrology engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Engine service base URL; sample charts are served when unset
    pub base_url: Option<String>,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl EngineConfig {
    /// Configured URL, treating an empty value as unset
    pub fn url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|u| !u.is_empty())
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = self.url() {
            if !is_http_url(url) {
                return Err(ValidationError::InvalidUrl("engine"));
            }
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults_to_unset() {
        let config = EngineConfig::default();
        assert_eq!(config.url(), None);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_url_is_unset() {
        let config = EngineConfig {
            base_url: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.url(), None);
    }

    #[test]
    fn test_validation_rejects_bad_url() {
        let config = EngineConfig {
            base_url: Some("engine:8000".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidUrl("engine")));
    }
}

//! Dashboard configuration
//!
//! Defines all configurable parameters for the dashboard including the
//! backend connection, polling interval, and the settings file location.

use std::path::PathBuf;
use std::time::Duration;

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL (e.g., "http://localhost:8080")
    pub backend_url: String,

    /// How often to refresh dashboard data while that section is active
    pub poll_interval: Duration,

    /// Path of the persisted settings file
    pub settings_path: PathBuf,

    /// Maximum number of activity log entries kept in memory
    pub log_capacity: usize,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(backend_url: String, settings_path: PathBuf) -> Self {
        Self {
            backend_url,
            poll_interval: Duration::from_secs(5),
            settings_path,
            log_capacity: 1000,
        }
    }

    /// Default location of the settings file, under the user data directory
    pub fn default_settings_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("beacon")
            .join("settings.json")
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.backend_url.is_empty() {
            anyhow::bail!("backend_url cannot be empty");
        }

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            anyhow::bail!("backend_url must start with http:// or https://");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.log_capacity == 0 {
            anyhow::bail!("log_capacity must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            "http://localhost:8080".to_string(),
            Self::default_settings_path(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.log_capacity, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Invalid URL should fail
        config.backend_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.backend_url = "http://localhost:8080".to_string();
        assert!(config.validate().is_ok());

        // Zero poll interval should fail
        config.poll_interval = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }
}

use super::{LoggingConfig, keys::KeyBindingsConfig};
use crate::content;
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration.
///
/// Every field is optional: the site must start with zero setup. Values
/// layer in the usual order: defaults, then the optional `hlal.toml`,
/// then `HLAL__`-style environment overrides.
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Design-system id to start on (overridden by `--theme`).
    theme: Option<String>,
    /// Call-to-action link override.
    cta_url: Option<String>,

    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    poll_timeout_ms: Option<u64>,
    tick_interval_millis: Option<u64>,

    #[serde(default)]
    keys: KeyBindingsConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn cta_url(&self) -> &str {
        self.cta_url.as_deref().unwrap_or(content::CTA_URL)
    }

    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.crossterm_input_listener_interval_ms.unwrap_or(20))
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(5)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms.unwrap_or(10))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_millis.unwrap_or(250))
    }

    pub fn keys(&self) -> &KeyBindingsConfig {
        &self.keys
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cta_url_falls_back_to_builtin_link() {
        let config = AppConfig::default();
        assert_eq!(config.cta_url(), content::CTA_URL);
    }

    #[test]
    fn test_timing_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.poll_timeout(), Duration::from_millis(10));
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
    }
}

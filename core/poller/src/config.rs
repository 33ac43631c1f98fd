use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Retry and time budgets of a poller, plus the delay between attempts.
///
/// ```toml
/// max_retries = 5
/// timeout = "25s"
/// interval = "3s"
/// ```
///
/// Every key is optional. A missing `max_retries` or `timeout` means the budget is unlimited,
/// and a missing `interval` means the next attempt is scheduled on the next tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PollerConfig {
    /// Maximum number of times the operation may be invoked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,

    /// Wall-clock budget, measured from the moment polling starts.
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,

    /// Delay between the end of one attempt and the start of the next.
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
}

impl PollerConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse poller config")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("failed to serialize poller config")
    }

    /// Load the config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read poller config from {}", path.display()))?;
        Self::from_toml(&raw)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_config_is_unlimited() {
        let config = PollerConfig::from_toml("").unwrap();
        assert_eq!(config, PollerConfig::default());
        assert_eq!(config.max_retries, None);
        assert_eq!(config.timeout, None);
        assert_eq!(config.interval, Duration::ZERO);
    }

    #[test]
    fn test_parse_humantime_durations() {
        let config = PollerConfig::from_toml(
            r#"
            max_retries = 5
            timeout = "25s"
            interval = "3000ms"
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            PollerConfig {
                max_retries: Some(5),
                timeout: Some(Duration::from_secs(25)),
                interval: Duration::from_millis(3000),
            }
        );
    }

    #[test]
    fn test_to_toml_and_back() {
        let config = PollerConfig {
            max_retries: None,
            timeout: Some(Duration::from_secs(90)),
            interval: Duration::from_millis(250),
        };

        let raw = config.to_toml().unwrap();
        assert!(!raw.contains("max_retries"));
        assert_eq!(PollerConfig::from_toml(&raw).unwrap(), config);
    }

    #[test]
    fn test_invalid_duration_is_rejected() {
        let result = PollerConfig::from_toml(r#"timeout = "soon""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("poller.toml");
        std::fs::write(&path, "max_retries = 3\ninterval = \"1s\"\n").unwrap();

        let config = PollerConfig::load(&path).unwrap();
        assert_eq!(config.max_retries, Some(3));
        assert_eq!(config.timeout, None);
        assert_eq!(config.interval, Duration::from_secs(1));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let error = PollerConfig::load(&temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(error.to_string().contains("failed to read poller config"));
    }
}

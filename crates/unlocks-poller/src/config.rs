//! Configuration for the poller.
//!
//! All configuration is loaded from environment variables, and every
//! variable is optional. With nothing set the poller hits the reference
//! endpoint twice back to back using the HTTP client's default timeout.

use std::time::Duration;

use crate::error::PollerError;

/// Endpoint polled when `UNLOCKS_SOURCE_URL` is unset.
pub const DEFAULT_SOURCE_URL: &str = "https://base.media108.ru/training/sample/";

/// Complete poller configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    /// URL fetched by both polls.
    pub source_url: String,
    /// Pause between the first and second poll.
    pub poll_interval: Duration,
    /// Per-request timeout. `None` keeps the client default.
    pub fetch_timeout: Option<Duration>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_owned(),
            poll_interval: Duration::ZERO,
            fetch_timeout: None,
        }
    }
}

impl PollerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `UNLOCKS_SOURCE_URL` -- endpoint to poll (default [`DEFAULT_SOURCE_URL`])
    /// - `UNLOCKS_POLL_INTERVAL_MS` -- pause between the polls in milliseconds (default 0)
    /// - `UNLOCKS_FETCH_TIMEOUT_MS` -- per-request timeout in milliseconds (default: none)
    pub fn from_env() -> Result<Self, PollerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PollerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source_url = lookup("UNLOCKS_SOURCE_URL")
            .map_or_else(|| DEFAULT_SOURCE_URL.to_owned(), |url| url.trim().to_owned());
        reqwest::Url::parse(&source_url)
            .map_err(|e| PollerError::Config(format!("invalid UNLOCKS_SOURCE_URL {source_url:?}: {e}")))?;

        let poll_interval = lookup("UNLOCKS_POLL_INTERVAL_MS")
            .map(|raw| parse_millis("UNLOCKS_POLL_INTERVAL_MS", &raw))
            .transpose()?
            .unwrap_or(Duration::ZERO);

        let fetch_timeout = lookup("UNLOCKS_FETCH_TIMEOUT_MS")
            .map(|raw| parse_millis("UNLOCKS_FETCH_TIMEOUT_MS", &raw))
            .transpose()?;

        Ok(Self {
            source_url,
            poll_interval,
            fetch_timeout,
        })
    }
}

/// Parse a millisecond count into a [`Duration`].
fn parse_millis(name: &str, raw: &str) -> Result<Duration, PollerError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| PollerError::Config(format!("invalid {name}: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::BTreeMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<PollerConfig, PollerError> {
        let vars: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        PollerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_match_reference_run() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, PollerConfig::default());
        assert_eq!(config.source_url, "https://base.media108.ru/training/sample/");
        assert_eq!(config.poll_interval, Duration::ZERO);
        assert_eq!(config.fetch_timeout, None);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("UNLOCKS_SOURCE_URL", " http://127.0.0.1:8080/sample/ "),
            ("UNLOCKS_POLL_INTERVAL_MS", "250"),
            ("UNLOCKS_FETCH_TIMEOUT_MS", "3000"),
        ])
        .unwrap();
        assert_eq!(config.source_url, "http://127.0.0.1:8080/sample/");
        assert_eq!(config.poll_interval, Duration::from_millis(250));
        assert_eq!(config.fetch_timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let err = config_from(&[("UNLOCKS_POLL_INTERVAL_MS", "soon")]).unwrap_err();
        assert!(matches!(err, PollerError::Config(ref msg) if msg.contains("UNLOCKS_POLL_INTERVAL_MS")));

        let err = config_from(&[("UNLOCKS_FETCH_TIMEOUT_MS", "-1")]).unwrap_err();
        assert!(matches!(err, PollerError::Config(_)));

        let err = config_from(&[("UNLOCKS_SOURCE_URL", "not a url")]).unwrap_err();
        assert!(err.to_string().starts_with("config error: invalid UNLOCKS_SOURCE_URL"));
    }
}

use std::time::Duration;

use crate::consts::*;
use crate::error::{ApiError, Result};

lazy_static::lazy_static! {
    /// Base URL override read from `KULE_API_BASE_URL`
    pub static ref BASE_URL: Option<String> = std::env::var(BASE_URL_ENV).ok()
        .filter(|url| !url.trim().is_empty());

    /// Requests timeout override in seconds read from `KULE_API_REQUESTS_TIMEOUT`
    pub static ref REQUESTS_TIMEOUT: Option<Duration> = std::env::var(REQUESTS_TIMEOUT_ENV).ok()
        .and_then(|timeout| parse_timeout(&timeout));

    /// Read from `KULE_API_ACCEPT_INVALID_CERTS`
    pub static ref ACCEPT_INVALID_CERTS: bool = std::env::var(ACCEPT_INVALID_CERTS_ENV)
        .map(|value| parse_flag(&value))
        .unwrap_or(false);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host of the remote API, without trailing slash
    pub base_url: String,

    /// `None` leaves requests without a timeout
    pub timeout: Option<Duration>,

    /// Skip TLS certificate verification. Off unless explicitly enabled
    pub accept_invalid_certs: bool
}

impl Default for ClientConfig {
    #[inline]
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            accept_invalid_certs: false
        }
    }
}

impl ClientConfig {
    /// Default config with environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_overrides(BASE_URL.clone(), *REQUESTS_TIMEOUT, *ACCEPT_INVALID_CERTS)
    }

    /// Apply environment-style overrides. Missing base URL and timeout keep current values
    pub fn with_overrides(mut self, base_url: Option<String>, timeout: Option<Duration>, accept_invalid_certs: bool) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }

        if timeout.is_some() {
            self.timeout = timeout;
        }

        self.accept_invalid_certs = accept_invalid_certs;

        self
    }

    #[inline]
    pub fn with_base_url(mut self, base_url: impl ToString) -> Self {
        self.base_url = base_url.to_string();

        self
    }

    #[inline]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;

        self
    }

    #[inline]
    pub fn with_accept_invalid_certs(mut self, accept_invalid_certs: bool) -> Self {
        self.accept_invalid_certs = accept_invalid_certs;

        self
    }

    /// Check the base URL and strip trailing slashes from it
    pub fn validated(mut self) -> Result<Self> {
        let base_url = self.base_url.trim().trim_end_matches('/');

        if base_url.is_empty() {
            return Err(ApiError::Config(String::from("base URL is empty")));
        }

        let host = base_url.strip_prefix("http://")
            .or_else(|| base_url.strip_prefix("https://"));

        match host {
            Some(host) if !host.is_empty() => (),
            _ => return Err(ApiError::Config(format!("base URL must be http(s) with a host: {base_url}")))
        }

        self.base_url = base_url.to_string();

        Ok(self)
    }
}

fn parse_timeout(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_verifies_tls() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::default()
            .with_overrides(Some(String::from("https://mirror.test")), Some(Duration::from_secs(10)), true);

        assert_eq!(config.base_url, "https://mirror.test");
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert!(config.accept_invalid_certs);

        let config = ClientConfig::default()
            .with_overrides(None, None, false);

        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_from_env_matches_overrides() {
        let expected = ClientConfig::default()
            .with_overrides(BASE_URL.clone(), *REQUESTS_TIMEOUT, *ACCEPT_INVALID_CERTS);

        assert_eq!(ClientConfig::from_env(), expected);
    }

    #[test]
    fn test_validated_trims_slashes() {
        let config = ClientConfig::default()
            .with_base_url("https://example.com//")
            .validated()
            .unwrap();

        assert_eq!(config.base_url, "https://example.com");
    }

    #[test]
    fn test_validated_rejects_bad_urls() {
        for url in ["", "   ", "/", "example.com", "ftp://example.com", "http://"] {
            let result = ClientConfig::default()
                .with_base_url(url)
                .validated();

            assert!(matches!(result, Err(ApiError::Config(_))), "{url}");
        }
    }

    #[test]
    fn test_parse_env_values() {
        assert_eq!(parse_timeout("15"), Some(Duration::from_secs(15)));
        assert_eq!(parse_timeout(" 3 "), Some(Duration::from_secs(3)));
        assert_eq!(parse_timeout("0"), None);
        assert_eq!(parse_timeout("soon"), None);

        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }
}

//! Client configuration

use crate::ClientResult;

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable overriding the API base URL (the only one read)
pub const API_URL_ENV: &str = "MARKETPLACE_API_URL";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the marketplace API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL without trailing slash (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds, never zero
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read configuration from the environment.
    ///
    /// Loads `.env` when present, then reads `MARKETPLACE_API_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(API_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::new(base_url)
    }

    /// Set the request timeout. Zero would fail every request, so it keeps the default.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = if seconds == 0 { DEFAULT_TIMEOUT_SECS } else { seconds };
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<super::HttpMarketClient> {
        super::HttpMarketClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_override_trims_trailing_slash() {
        let config =
            ClientConfig::from_lookup(lookup(&[(API_URL_ENV, "https://api.example.com/")]));
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_blank_override_falls_back_to_default() {
        let config = ClientConfig::from_lookup(lookup(&[(API_URL_ENV, "  ")]));
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_only_api_url_is_read_from_environment() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("MARKETPLACE_TIMEOUT_SECS", "0"),
            ("MARKETPLACE_USER_ID", "7"),
        ]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_zero_timeout_keeps_default() {
        assert_eq!(ClientConfig::default().with_timeout(0).timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(ClientConfig::default().with_timeout(5).timeout, 5);
    }
}

// ABOUTME: Process configuration - the SerpApi key plus optional endpoint settings.
// ABOUTME: Resolved once at startup and passed explicitly to the client and tools.

use std::time::Duration;

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "SERPAPI_API_KEY";
pub const BASE_URL_VAR: &str = "SERPAPI_BASE_URL";
pub const TIMEOUT_VAR: &str = "SERPAPI_TIMEOUT_SECS";

/// Default SerpApi endpoint.
pub const DEFAULT_BASE_URL: &str = "https://serpapi.com";

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// SerpApi key, sent as the `api_key` query parameter.
    pub api_key: String,

    /// Base URL of the search API, without a trailing slash.
    pub base_url: String,

    /// Request timeout. `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Create a configuration for the given key with default endpoint settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Point the client at a different base URL (a mock server, a proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set an explicit request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load `.env` (if present) and resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; real variables always take precedence.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);

        if let Some(url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                name: TIMEOUT_VAR.to_string(),
                message: format!("{}", e),
            })?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    name: TIMEOUT_VAR.to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

// Keep the key out of debug output and logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ABOUTME: SerpApi HTTP client and the SearchBackend trait tools depend on.
// ABOUTME: One GET per call; non-success statuses come back as SearchError::Status.

use async_trait::async_trait;
use serde_json::Value;

use super::{API_KEY_PARAM, SearchParams};
use crate::config::Config;
use crate::error::SearchError;

/// Path of the search endpoint, relative to the configured base URL.
pub const SEARCH_PATH: &str = "/search";

/// Anything that can execute a SerpApi-style search.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run one search with fully-built parameters and return the decoded payload.
    async fn search(&self, params: &SearchParams) -> Result<Value, SearchError>;
}

/// Client for the hosted SerpApi service.
pub struct SerpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl SerpApiClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("serpapi-mcp/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Create with a custom reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the search endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }
}

/// Encode parameters as query pairs.
///
/// Strings go out verbatim, nulls are dropped, and everything else uses its
/// compact JSON text. `output` is always forced to `json`.
pub fn query_pairs(params: &SearchParams) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .filter(|(key, _)| key.as_str() != "output")
        .filter_map(|(key, value)| {
            let encoded = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((key.clone(), encoded))
        })
        .collect();
    pairs.push(("output".to_string(), "json".to_string()));
    pairs
}

#[async_trait]
impl SearchBackend for SerpApiClient {
    async fn search(&self, params: &SearchParams) -> Result<Value, SearchError> {
        let query = query_pairs(params);

        let engine = params
            .get("engine")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("");
        let keys: Vec<&str> = query
            .iter()
            .map(|(key, _)| key.as_str())
            .filter(|key| *key != API_KEY_PARAM)
            .collect();
        tracing::debug!(
            engine,
            params = ?keys,
            "sending search request"
        );

        // Errors would otherwise carry the request URL, api_key included.
        let response = self
            .client
            .get(self.endpoint())
            .query(&query)
            .send()
            .await
            .map_err(|e| SearchError::Request(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Request(e.without_url()))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "search request failed");
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

// ABOUTME: SearchTool - generic SerpApi web search exposed as the `search` tool.
// ABOUTME: Defaults to the google_light engine and formats organic results.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::serpapi::{
    SearchBackend, SearchOutcome, SearchParams, format_organic_results, search_params,
};
use crate::tool::{Tool, ToolResult};

/// Tool for engine-agnostic web searches.
pub struct SearchTool {
    backend: Arc<dyn SearchBackend>,
    api_key: String,
}

impl SearchTool {
    /// Create a new SearchTool using the configured key.
    pub fn new(config: &Config, backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            api_key: config.api_key.clone(),
        }
    }

    /// Run a search with caller-supplied engine parameters.
    pub async fn search(&self, params: SearchParams) -> SearchOutcome {
        let request = search_params(&self.api_key, params);

        match self.backend.search(&request).await {
            Ok(data) => format_organic_results(&data),
            Err(e) => {
                tracing::warn!(error = %e, "search request failed");
                SearchOutcome::from(e)
            }
        }
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "Perform a web search using SerpApi. Takes a dictionary of engine-specific \
         parameters (e.g. {\"q\": \"Coffee\", \"engine\": \"google_light\", \"location\": \"Austin, TX\"}) \
         and returns formatted search results or an error message."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "params": {
                    "type": "object",
                    "description": "Engine-specific parameters, e.g. {\"q\": \"Coffee\", \"location\": \"Austin, TX\"}. The engine defaults to google_light.",
                    "additionalProperties": true,
                    "default": {}
                }
            }
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize, Default)]
        struct Params {
            #[serde(default)]
            params: Option<SearchParams>,
        }

        let params: Params = if params.is_null() {
            Params::default()
        } else {
            serde_json::from_value(params)?
        };

        let outcome = self.search(params.params.unwrap_or_default()).await;
        Ok(outcome.into())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::SearchError;
    use crate::tools::testing::FakeBackend;

    fn tool(backend: Arc<FakeBackend>) -> SearchTool {
        SearchTool::new(&Config::new("configured-key"), backend)
    }

    #[tokio::test]
    async fn test_execute_formats_results() {
        let backend = Arc::new(FakeBackend::responding(json!({
            "organic_results": [
                {"title": "A", "link": "https://a.example", "snippet": "first"},
                {"title": "B", "link": "https://b.example", "snippet": "second"}
            ]
        })));

        let result = tool(backend.clone())
            .execute(json!({"params": {"q": "Coffee", "location": "Austin, TX"}}))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(result.content.matches("Title:").count(), 2);
        assert!(result.content.contains("Title: A\nLink: https://a.example\nSnippet: first\n\nTitle: B"));

        let sent = backend.last_request().unwrap();
        assert_eq!(sent["engine"], "google_light");
        assert_eq!(sent["q"], "Coffee");
        assert_eq!(sent["location"], "Austin, TX");
        assert_eq!(sent["api_key"], "configured-key");
    }

    #[tokio::test]
    async fn test_execute_without_arguments() {
        let backend = Arc::new(FakeBackend::responding(json!({"organic_results": []})));

        let result = tool(backend.clone()).execute(json!({})).await.unwrap();
        assert_eq!(result.content, "No organic results found");
        assert!(!result.is_error);

        let result = tool(backend.clone()).execute(serde_json::Value::Null).await.unwrap();
        assert_eq!(result.content, "No organic results found");
        assert_eq!(backend.request_count(), 2);
    }

    #[tokio::test]
    async fn test_execute_caller_cannot_replace_key() {
        let backend = Arc::new(FakeBackend::responding(json!({})));

        tool(backend.clone())
            .execute(json!({"params": {"api_key": "other", "engine": "google"}}))
            .await
            .unwrap();

        let sent = backend.last_request().unwrap();
        assert_eq!(sent["api_key"], "configured-key");
        assert_eq!(sent["engine"], "google");
    }

    #[tokio::test]
    async fn test_execute_maps_unauthorized() {
        let backend = Arc::new(FakeBackend::failing(|| SearchError::Status {
            status: 401,
            body: "{\"error\": \"Invalid API key\"}".to_string(),
        }));

        let result = tool(backend).execute(json!({"params": {"q": "x"}})).await.unwrap();

        assert!(result.is_error);
        assert_eq!(
            result.content,
            "Error: Invalid API key. Please check your SERPAPI_API_KEY."
        );
    }

    #[tokio::test]
    async fn test_execute_rejects_non_object_params() {
        let backend = Arc::new(FakeBackend::responding(json!({})));
        let result = tool(backend.clone()).execute(json!({"params": "q=coffee"})).await;

        assert!(result.is_err());
        assert_eq!(backend.request_count(), 0);
    }
}

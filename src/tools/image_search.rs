// ABOUTME: ImageSearchTool - Google Images search through SerpApi.
// ABOUTME: Handles count clamping, start-offset paging, and related searches.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::serpapi::{ImageSearchRequest, SearchBackend, SearchOutcome, format_image_results};
use crate::tool::{Tool, ToolResult};

/// Tool for image searches.
pub struct ImageSearchTool {
    backend: Arc<dyn SearchBackend>,
    api_key: String,
}

impl ImageSearchTool {
    /// Create a new ImageSearchTool using the configured key.
    pub fn new(config: &Config, backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            api_key: config.api_key.clone(),
        }
    }

    /// Run an image search.
    pub async fn image_search(&self, request: &ImageSearchRequest) -> SearchOutcome {
        let params = request.to_params(&self.api_key);

        match self.backend.search(&params).await {
            Ok(data) => format_image_results(&data, request.effective_count()),
            Err(e) => {
                tracing::warn!(error = %e, "image search request failed");
                SearchOutcome::from(e)
            }
        }
    }
}

#[async_trait]
impl Tool for ImageSearchTool {
    fn name(&self) -> &str {
        "image_search"
    }

    fn description(&self) -> &str {
        "Search for images using SerpApi's Google Images engine. Returns titles, sources, \
         image URLs and thumbnails, plus related searches when available."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query for images"
                },
                "count": {
                    "type": "integer",
                    "description": "Number of image results to return (1-10, default 5)",
                    "default": 5
                },
                "start": {
                    "type": "integer",
                    "description": "Pagination start index (default 1)",
                    "default": 1
                },
                "params": {
                    "type": "object",
                    "description": "Optional additional parameters for the search",
                    "additionalProperties": true
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let request: ImageSearchRequest = serde_json::from_value(params)?;
        Ok(self.image_search(&request).await.into())
    }
}

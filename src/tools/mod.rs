// ABOUTME: The SerpApi-backed tools this server exposes.
// ABOUTME: `search` for generic web search, `image_search` for Google Images.

mod image_search;
mod search;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

pub use image_search::ImageSearchTool;
pub use search::SearchTool;

use crate::config::Config;
use crate::serpapi::SearchBackend;
use crate::tool::Registry;

/// Register both search tools, sharing one backend.
pub async fn register_search_tools(
    registry: &Registry,
    config: &Config,
    backend: Arc<dyn SearchBackend>,
) {
    registry.register(SearchTool::new(config, backend.clone())).await;
    registry.register(ImageSearchTool::new(config, backend)).await;
}

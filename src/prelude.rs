// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use serpapi_mcp::prelude::*;` to get started quickly.

pub use crate::config::Config;
pub use crate::error::{ConfigError, McpError, SearchError};
pub use crate::mcp::{
    McpContentBlock, McpRequest, McpResponse, McpRpcError, McpServer, McpToolInfo, McpToolResult,
    serve, serve_stdio,
};
pub use crate::serpapi::{
    ImageSearchRequest, SearchBackend, SearchOutcome, SearchParams, SerpApiClient,
};
pub use crate::tool::{Registry, Tool, ToolResult};
pub use crate::tools::{ImageSearchTool, SearchTool, register_search_tools};

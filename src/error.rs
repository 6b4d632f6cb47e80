// ABOUTME: Defines all error types for serpapi-mcp using thiserror.
// ABOUTME: Each concern (config, search, MCP serving) has its own error enum.

/// Errors resolving configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SERPAPI_API_KEY not found in environment variables. Please set it in the .env file.")]
    MissingApiKey,

    #[error("Invalid value for {name}: {message}")]
    Invalid { name: String, message: String },
}

/// Errors from a single call to the remote search API.
///
/// Display strings are what ends up after `"Error: "` in a tool result, so
/// transport and decode failures render their source description as-is.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("{status} - {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors from the MCP serve loop.
#[derive(Debug, thiserror::Error)]
pub enum McpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),
}

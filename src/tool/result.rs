// ABOUTME: Defines the ToolResult type - the plain-text outcome of a tool call
// ABOUTME: plus an error flag, convertible into an MCP tools/call result.

use crate::mcp::{McpContentBlock, McpToolResult};

/// Result of a tool execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// The output content.
    pub content: String,

    /// Whether this result represents an error.
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful text result.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    /// Create an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: message.into(),
            is_error: true,
        }
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::text("")
    }
}

impl From<ToolResult> for McpToolResult {
    fn from(result: ToolResult) -> Self {
        Self {
            content: vec![McpContentBlock::Text {
                text: result.content,
            }],
            is_error: result.is_error,
        }
    }
}

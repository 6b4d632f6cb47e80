// ABOUTME: Tests for ToolResult - constructors, defaults, MCP conversion.
// ABOUTME: Verifies the text survives conversion unchanged.

use super::*;
use crate::mcp::{McpContentBlock, McpToolResult};

#[test]
fn test_text_result() {
    let result = ToolResult::text("Title: Rust");
    assert_eq!(result.content, "Title: Rust");
    assert!(!result.is_error);
}

#[test]
fn test_error_result() {
    let result = ToolResult::error("Error: boom");
    assert_eq!(result.content, "Error: boom");
    assert!(result.is_error);
}

#[test]
fn test_default() {
    let result = ToolResult::default();
    assert_eq!(result.content, "");
    assert!(!result.is_error);
}

#[test]
fn test_into_mcp_result() {
    let mcp: McpToolResult = ToolResult::error("Error: 500 - oops").into();

    assert!(mcp.is_error);
    assert_eq!(mcp.content.len(), 1);
    match &mcp.content[0] {
        McpContentBlock::Text { text } => assert_eq!(text, "Error: 500 - oops"),
    }

    let json = serde_json::to_value(&mcp).unwrap();
    assert_eq!(json["content"][0]["type"], "text");
    assert_eq!(json["isError"], true);
}

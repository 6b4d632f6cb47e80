// ABOUTME: Tests for McpServer - method dispatch and JSON-RPC error handling.
// ABOUTME: Drives the server with decoded requests and raw lines.

use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::config::Config;
use crate::tool::{Registry, Tool, ToolResult};
use crate::tools::register_search_tools;
use crate::tools::testing::FakeBackend;

/// A tool that always rejects its arguments.
struct StrictTool;

#[async_trait::async_trait]
impl Tool for StrictTool {
    fn name(&self) -> &str {
        "strict"
    }

    fn description(&self) -> &str {
        "Rejects everything"
    }

    fn schema(&self) -> serde_json::Value {
        json!({"type": "object"})
    }

    async fn execute(&self, _params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        Err(anyhow::anyhow!("missing field `query`"))
    }
}

async fn search_server(data: serde_json::Value) -> McpServer {
    let registry = Registry::new();
    let backend = Arc::new(FakeBackend::responding(data));
    register_search_tools(&registry, &Config::new("key"), backend).await;
    McpServer::new(registry)
}

fn result_of(response: Option<McpResponse>) -> serde_json::Value {
    let response = response.expect("expected a response");
    assert!(response.error.is_none(), "unexpected error: {:?}", response.error);
    response.result.expect("expected a result")
}

fn error_of(response: Option<McpResponse>) -> McpRpcError {
    response
        .expect("expected a response")
        .error
        .expect("expected an error")
}

#[tokio::test]
async fn test_initialize() {
    let server = search_server(json!({})).await;
    let request = McpRequest::new(
        1,
        "initialize",
        Some(json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "host", "version": "0.1"}
        })),
    );

    let result = result_of(server.handle(request).await);

    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "SerpApi MCP Server");
    assert!(result["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_initialize_without_params() {
    let server = search_server(json!({})).await;

    let result = result_of(server.handle(McpRequest::new(1, "initialize", None)).await);

    assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
}

#[tokio::test]
async fn test_notification_gets_no_response() {
    let server = search_server(json!({})).await;
    let request = McpRequest::notification("notifications/initialized", None);

    assert!(server.handle(request).await.is_none());
}

#[tokio::test]
async fn test_ping() {
    let server = search_server(json!({})).await;
    let result = result_of(server.handle(McpRequest::new("p-1", "ping", None)).await);
    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn test_tools_list_exposes_exactly_two_tools() {
    let server = search_server(json!({})).await;

    let result = result_of(server.handle(McpRequest::new(2, "tools/list", None)).await);
    let tools = result["tools"].as_array().unwrap();

    assert_eq!(tools.len(), 2);
    assert_eq!(tools[0]["name"], "image_search");
    assert_eq!(tools[1]["name"], "search");
    assert_eq!(tools[0]["inputSchema"]["required"], json!(["query"]));
    assert!(tools[1]["inputSchema"]["properties"]["params"].is_object());
    assert!(!tools[1]["description"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_tools_call_search() {
    let server = search_server(json!({
        "organic_results": [{"title": "T", "link": "L", "snippet": "S"}]
    }))
    .await;
    let request = McpRequest::new(
        3,
        "tools/call",
        Some(json!({"name": "search", "arguments": {"params": {"q": "Coffee"}}})),
    );

    let result = result_of(server.handle(request).await);

    assert_eq!(result["content"][0]["type"], "text");
    assert_eq!(result["content"][0]["text"], "Title: T\nLink: L\nSnippet: S");
    assert_eq!(result["isError"], false);
}

#[tokio::test]
async fn test_tools_call_without_arguments() {
    let server = search_server(json!({})).await;
    let request = McpRequest::new(4, "tools/call", Some(json!({"name": "search"})));

    let result = result_of(server.handle(request).await);

    assert_eq!(result["content"][0]["text"], "No organic results found");
}

#[tokio::test]
async fn test_tools_call_unknown_tool() {
    let server = search_server(json!({})).await;
    let request = McpRequest::new(5, "tools/call", Some(json!({"name": "web_fetch"})));

    let error = error_of(server.handle(request).await);

    assert_eq!(error.code, error_codes::INVALID_PARAMS);
    assert!(error.message.contains("web_fetch"));
}

#[tokio::test]
async fn test_tools_call_missing_params() {
    let server = search_server(json!({})).await;

    let error = error_of(server.handle(McpRequest::new(6, "tools/call", None)).await);

    assert_eq!(error.code, error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_tool_error_becomes_error_result() {
    let registry = Registry::new();
    registry.register(StrictTool).await;
    let server = McpServer::new(registry);
    let request = McpRequest::new(7, "tools/call", Some(json!({"name": "strict"})));

    let result = result_of(server.handle(request).await);

    assert_eq!(result["isError"], true);
    assert_eq!(result["content"][0]["text"], "Error: missing field `query`");
}

#[tokio::test]
async fn test_unknown_method() {
    let server = search_server(json!({})).await;

    let error = error_of(server.handle(McpRequest::new(8, "resources/list", None)).await);

    assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_handle_line_parse_error() {
    let server = search_server(json!({})).await;

    let response = server.handle_line("{not json").await.unwrap();

    assert!(response.id.is_null());
    assert_eq!(response.error.unwrap().code, error_codes::PARSE_ERROR);
}

#[tokio::test]
async fn test_handle_line_invalid_request_keeps_id() {
    let server = search_server(json!({})).await;

    let response = server.handle_line(r#"{"jsonrpc": "2.0", "id": 9}"#).await.unwrap();

    assert_eq!(response.id, json!(9));
    assert_eq!(response.error.unwrap().code, error_codes::INVALID_REQUEST);
}

#[tokio::test]
async fn test_wrong_jsonrpc_version() {
    let server = search_server(json!({})).await;

    let response = server
        .handle_line(r#"{"jsonrpc": "1.0", "id": 10, "method": "ping"}"#)
        .await
        .unwrap();

    assert_eq!(response.error.unwrap().code, error_codes::INVALID_REQUEST);
}

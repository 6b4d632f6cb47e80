// ABOUTME: MCP server - dispatches JSON-RPC methods to the tool registry.
// ABOUTME: Handles initialize, ping, tools/list, and tools/call.

use serde_json::Value;

use super::{
    JSONRPC_VERSION, McpImplementationInfo, McpInitializeParams, McpInitializeResult,
    McpRequest, McpResponse, McpRpcError, McpServerCapabilities, McpToolCallParams,
    McpToolResult, McpToolsListResult, PROTOCOL_VERSION,
};
use crate::tool::{Registry, ToolResult};

/// Name reported in the initialize handshake.
pub const SERVER_NAME: &str = "SerpApi MCP Server";

/// Stateless request handler over a tool registry.
pub struct McpServer {
    registry: Registry,
    info: McpImplementationInfo,
}

impl McpServer {
    /// Create a server exposing the tools in `registry`.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            info: McpImplementationInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Handle one raw line from the transport.
    pub async fn handle_line(&self, line: &str) -> Option<McpResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                return Some(McpResponse::failure(
                    Value::Null,
                    McpRpcError::parse_error(e),
                ));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<McpRequest>(value) {
            Ok(request) => self.handle(request).await,
            Err(e) => Some(McpResponse::failure(id, McpRpcError::invalid_request(e))),
        }
    }

    /// Handle a decoded request. Notifications yield `None`.
    pub async fn handle(&self, request: McpRequest) -> Option<McpResponse> {
        if request.is_notification() {
            tracing::debug!(method = %request.method, "notification received");
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        if request.jsonrpc != JSONRPC_VERSION {
            return Some(McpResponse::failure(
                id,
                McpRpcError::invalid_request(format!("unsupported jsonrpc {}", request.jsonrpc)),
            ));
        }

        let result = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => self.list_tools().await,
            "tools/call" => self.call_tool(request.params).await,
            other => Err(McpRpcError::method_not_found(other)),
        };

        Some(match result {
            Ok(value) => McpResponse::success(id, value),
            Err(error) => McpResponse::failure(id, error),
        })
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, McpRpcError> {
        let params: McpInitializeParams = match params {
            Some(p) => serde_json::from_value(p).map_err(McpRpcError::invalid_params)?,
            None => McpInitializeParams::default(),
        };

        if let Some(client) = &params.client_info {
            tracing::info!(client = %client.name, version = %client.version, "client connected");
        }

        let result = McpInitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| PROTOCOL_VERSION.to_string()),
            capabilities: McpServerCapabilities {
                tools: Some(serde_json::json!({})),
            },
            server_info: self.info.clone(),
        };

        serde_json::to_value(result).map_err(McpRpcError::internal_error)
    }

    async fn list_tools(&self) -> Result<Value, McpRpcError> {
        let result = McpToolsListResult {
            tools: self.registry.to_mcp_tools().await,
        };
        serde_json::to_value(result).map_err(McpRpcError::internal_error)
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, McpRpcError> {
        let params: McpToolCallParams = params
            .ok_or_else(|| McpRpcError::invalid_params("missing tools/call params"))
            .and_then(|p| serde_json::from_value(p).map_err(McpRpcError::invalid_params))?;

        let tool = self
            .registry
            .get(&params.name)
            .await
            .ok_or_else(|| McpRpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

        tracing::debug!(tool = %params.name, "calling tool");
        let arguments = params.arguments.unwrap_or_else(|| serde_json::json!({}));

        let result = match tool.execute(arguments).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(tool = %params.name, error = %e, "tool call failed");
                ToolResult::error(format!("Error: {}", e))
            }
        };

        serde_json::to_value(McpToolResult::from(result)).map_err(McpRpcError::internal_error)
    }
}

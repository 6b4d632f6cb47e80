// ABOUTME: Defines the Tool trait - the unit of capability the MCP server exposes.
// ABOUTME: Tools have a name, description, schema, and async execute method.

use async_trait::async_trait;

use super::ToolResult;

/// A tool that can be discovered and invoked by a tool host.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the calling model.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments.
    ///
    /// Failures of the underlying work belong in the returned `ToolResult`;
    /// `Err` is reserved for arguments the tool cannot make sense of.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error>;
}

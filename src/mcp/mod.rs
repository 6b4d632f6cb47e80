// ABOUTME: MCP module - Model Context Protocol server implementation.
// ABOUTME: Exposes the tool registry to a host over JSON-RPC on stdio.

mod server;
mod transport;
mod types;

pub use server::{McpServer, SERVER_NAME};
pub use transport::{serve, serve_stdio};
pub use types::*;

#[cfg(test)]
mod server_test;

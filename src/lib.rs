// ABOUTME: Root module for serpapi-mcp - SerpApi search tools served over MCP.
// ABOUTME: Re-exports all public types from submodules.

pub mod config;
pub mod error;
pub mod mcp;
pub mod prelude;
pub mod serpapi;
pub mod tool;
pub mod tools;

pub use config::Config;

// ABOUTME: Tool module - defines tools, results, and the registry.
// ABOUTME: Core abstraction behind the MCP tools/list and tools/call methods.

mod registry;
mod result;
mod traits;

pub use registry::*;
pub use result::*;
pub use traits::*;

#[cfg(test)]
mod result_test;

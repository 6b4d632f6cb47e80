// ABOUTME: SerpApi module - remote search client, request building, and formatting.
// ABOUTME: Everything between a tool's arguments and its rendered text lives here.

mod client;
mod format;
mod outcome;
mod params;

pub use client::*;
pub use format::*;
pub use outcome::*;
pub use params::*;

/// Engine-specific query parameters: a flat mapping of names to JSON values.
pub type SearchParams = serde_json::Map<String, serde_json::Value>;

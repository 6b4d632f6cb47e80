// ABOUTME: SearchOutcome - the tagged result of one tool call before rendering.
// ABOUTME: Both success and every failure mode collapse to plain text at the boundary.

use std::fmt;

use crate::error::SearchError;
use crate::tool::ToolResult;

pub const RATE_LIMITED_MESSAGE: &str = "Error: Rate limit exceeded. Please try again later.";
pub const UNAUTHORIZED_MESSAGE: &str = "Error: Invalid API key. Please check your SERPAPI_API_KEY.";

/// Outcome of a search tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Formatted results.
    Results(String),

    /// No matching results; carries the tool's informational message.
    Empty(&'static str),

    /// HTTP 429 from the remote API.
    RateLimited,

    /// HTTP 401 from the remote API.
    Unauthorized,

    /// Any other non-success HTTP status.
    HttpError { status: u16, body: String },

    /// A success status whose payload carries an `error` field.
    ApplicationError(String),

    /// Transport, decode, or other uncategorized failure.
    Failure(String),
}

impl SearchOutcome {
    /// Whether this outcome represents a failed call.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Results(_) | Self::Empty(_))
    }

    /// Render to the tool's plain-text return value.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Results(text) => f.write_str(text),
            Self::Empty(message) => f.write_str(message),
            Self::RateLimited => f.write_str(RATE_LIMITED_MESSAGE),
            Self::Unauthorized => f.write_str(UNAUTHORIZED_MESSAGE),
            Self::HttpError { status, body } => write!(f, "Error: {} - {}", status, body),
            Self::ApplicationError(message) => write!(f, "Error: {}", message),
            Self::Failure(message) => write!(f, "Error: {}", message),
        }
    }
}

impl From<SearchError> for SearchOutcome {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Status { status: 429, .. } => Self::RateLimited,
            SearchError::Status { status: 401, .. } => Self::Unauthorized,
            SearchError::Status { status, body } => Self::HttpError { status, body },
            other => Self::Failure(other.to_string()),
        }
    }
}

impl From<SearchOutcome> for ToolResult {
    fn from(outcome: SearchOutcome) -> Self {
        if outcome.is_failure() {
            ToolResult::error(outcome.render())
        } else {
            ToolResult::text(outcome.render())
        }
    }
}

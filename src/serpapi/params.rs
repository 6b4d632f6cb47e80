// ABOUTME: Builds the effective request parameters for both search tools.
// ABOUTME: Applies engine defaults, image pagination, and api_key injection.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::SearchParams;

pub const API_KEY_PARAM: &str = "api_key";
pub const DEFAULT_ENGINE: &str = "google_light";
pub const IMAGE_ENGINE: &str = "google_images";

pub const DEFAULT_IMAGE_COUNT: i64 = 5;
pub const MAX_IMAGE_COUNT: i64 = 10;
pub const DEFAULT_START: i64 = 1;

/// Image results per remote page, used to turn a start offset into `ijn`.
const IMAGE_PAGE_SIZE: i64 = 10;

/// Effective parameters for a generic search.
///
/// Starts from `engine=google_light`, overlays the caller's entries (which may
/// replace `engine`), then sets `api_key` to the configured key.
pub fn search_params(api_key: &str, params: SearchParams) -> SearchParams {
    let mut effective = SearchParams::new();
    effective.insert("engine".to_string(), Value::from(DEFAULT_ENGINE));
    overlay(&mut effective, params);
    effective.insert(API_KEY_PARAM.to_string(), Value::from(api_key));
    effective
}

/// Clamp a requested image count into `1..=10`.
pub fn clamp_count(count: i64) -> i64 {
    count.clamp(1, MAX_IMAGE_COUNT)
}

/// Zero-based remote page index for a 1-based start offset.
pub fn page_index(start: i64) -> i64 {
    (start.max(1) - 1).div_euclid(IMAGE_PAGE_SIZE)
}

/// Arguments of an image search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageSearchRequest {
    pub query: String,

    #[serde(default, deserialize_with = "lenient_int")]
    pub count: Option<i64>,

    #[serde(default, deserialize_with = "lenient_int")]
    pub start: Option<i64>,

    #[serde(default)]
    pub params: Option<SearchParams>,
}

impl ImageSearchRequest {
    /// Create a request for a query with default count and start.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Set the requested number of results.
    pub fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the 1-based start offset.
    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Set additional engine parameters.
    pub fn params(mut self, params: SearchParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Number of results requested from the API and kept when formatting.
    pub fn effective_count(&self) -> usize {
        // clamp_count guarantees 1..=10
        clamp_count(self.count.unwrap_or(DEFAULT_IMAGE_COUNT)) as usize
    }

    /// Remote page index derived from the start offset.
    pub fn page_index(&self) -> i64 {
        page_index(self.start.unwrap_or(DEFAULT_START))
    }

    /// Effective parameters for this image search.
    ///
    /// Fixed `engine`, `q`, `ijn` and `num` come first; extra caller params
    /// overlay them; `api_key` is always the configured key.
    pub fn to_params(&self, api_key: &str) -> SearchParams {
        let mut effective = SearchParams::new();
        effective.insert("engine".to_string(), Value::from(IMAGE_ENGINE));
        effective.insert("q".to_string(), Value::from(self.query.as_str()));
        effective.insert("ijn".to_string(), Value::from(self.page_index()));
        effective.insert("num".to_string(), Value::from(self.effective_count()));
        if let Some(extra) = &self.params {
            overlay(&mut effective, extra.clone());
        }
        effective.insert(API_KEY_PARAM.to_string(), Value::from(api_key));
        effective
    }
}

fn overlay(target: &mut SearchParams, params: SearchParams) {
    for (key, value) in params {
        if key == API_KEY_PARAM {
            tracing::warn!("ignoring caller-supplied api_key parameter");
            continue;
        }
        target.insert(key, value);
    }
}

/// Accept integers the way loosely-typed tool hosts send them: `5`, `5.0`, `"5"`.
/// Null means "use the default"; fractional or non-numeric values are rejected.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        Some(_) => None,
    };

    parsed
        .map(Some)
        .ok_or_else(|| D::Error::custom("expected an integer"))
}

fn integral(f: f64) -> Option<i64> {
    // Bounds keep the cast exact.
    if f.is_finite() && f.fract() == 0.0 && f.abs() <= 9_007_199_254_740_992.0 {
        Some(f as i64)
    } else {
        None
    }
}

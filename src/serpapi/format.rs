// ABOUTME: Turns SerpApi JSON payloads into the plain-text blocks tools return.
// ABOUTME: Organic results for web search; images plus related searches for images.

use serde_json::Value;

use super::SearchOutcome;

pub const NO_ORGANIC_RESULTS: &str = "No organic results found";
pub const NO_IMAGE_RESULTS: &str = "No image results found for your query.";

const MAX_RELATED_SEARCHES: usize = 5;

/// Format the `organic_results` of a web search response.
pub fn format_organic_results(data: &Value) -> SearchOutcome {
    let blocks: Vec<String> = entries(data, "organic_results")
        .iter()
        .map(|result| {
            format!(
                "Title: {}\nLink: {}\nSnippet: {}",
                field(result, "title", "No title"),
                field(result, "link", "No link"),
                field(result, "snippet", "No snippet"),
            )
        })
        .collect();

    if blocks.is_empty() {
        SearchOutcome::Empty(NO_ORGANIC_RESULTS)
    } else {
        SearchOutcome::Results(blocks.join("\n\n"))
    }
}

/// Format an image search response, keeping at most `count` images.
///
/// A top-level `error` field wins over everything else in the payload.
pub fn format_image_results(data: &Value, count: usize) -> SearchOutcome {
    if let Some(error) = data.get("error") {
        return SearchOutcome::ApplicationError(display_value(error));
    }

    let images = entries(data, "images_results");
    if images.is_empty() {
        return SearchOutcome::Empty(NO_IMAGE_RESULTS);
    }

    let mut blocks: Vec<String> = images
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, image)| {
            format!(
                "[{}] Title: {}\nSource: {}\nImage URL: {}\nThumbnail: {}",
                i + 1,
                field(image, "title", "No title"),
                field(image, "source", "Unknown"),
                field(image, "original", ""),
                field(image, "thumbnail", ""),
            )
        })
        .collect();

    let related = entries(data, "related_searches");
    if !related.is_empty() {
        let queries: Vec<String> = related
            .iter()
            .take(MAX_RELATED_SEARCHES)
            .map(|item| field(item, "query", ""))
            .collect();
        blocks.push(format!("Related Searches: {}", queries.join(", ")));
    }

    SearchOutcome::Results(blocks.join("\n\n"))
}

/// The array stored under `key`, or an empty slice when absent or not an array.
fn entries<'a>(data: &'a Value, key: &str) -> &'a [Value] {
    data.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// A field of a result entry, or `fallback` when missing or null.
fn field(entry: &Value, key: &str, fallback: &str) -> String {
    match entry.get(key) {
        None | Some(Value::Null) => fallback.to_string(),
        Some(value) => display_value(value),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

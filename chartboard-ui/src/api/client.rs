//! HTTP API Client
//!
//! Fetches the raw chart datasets from the chart-data API.

use chartboard::charts::{reshape, ChartPayload, Dataset};
use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Local storage key overriding the API base URL
pub const API_BASE_KEY: &str = "chartboard_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten());

    normalize_base(stored.as_deref())
}

/// Fall back to the default for missing or blank values and drop trailing slashes
pub fn normalize_base(stored: Option<&str>) -> String {
    let url = match stored.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_BASE,
    };
    url.trim_end_matches('/').to_string()
}

/// Fetch one dataset and reshape it for its chart.
///
/// Network errors, non-2xx statuses and malformed bodies all come back as
/// `Err` with a diagnostic description.
pub async fn fetch_dataset(dataset: Dataset) -> Result<ChartPayload, String> {
    let url = dataset.url(&get_api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("API error {}: {}", response.status(), body));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    reshape(dataset, body).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_default() {
        assert_eq!(normalize_base(None), "http://127.0.0.1:8000");
        assert_eq!(normalize_base(Some("   ")), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_normalize_base_trims_trailing_slash() {
        assert_eq!(normalize_base(Some("http://api.local:9000/")), "http://api.local:9000");
        assert_eq!(normalize_base(Some("http://api.local:9000")), "http://api.local:9000");
    }
}

//! Chart-Data API Client
//!
//! The [`ChartSource`] seam between the dashboard view and the network, and
//! its reqwest implementation.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::charts::{Dataset, TransformError};

/// Default base origin of the chart-data API
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Something that can produce the raw JSON body of a dataset
#[async_trait]
pub trait ChartSource: Send + Sync + 'static {
    async fn fetch(&self, dataset: Dataset) -> Result<serde_json::Value, FetchError>;
}

/// Plain unauthenticated GET client for the four chart endpoints.
///
/// No timeout, no retries: a request that never answers never settles.
#[derive(Debug, Clone)]
pub struct HttpChartClient {
    client: Client,
    base_url: String,
}

impl HttpChartClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("chartboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ChartSource for HttpChartClient {
    async fn fetch(&self, dataset: Dataset) -> Result<serde_json::Value, FetchError> {
        let url = dataset.url(&self.base_url);
        tracing::debug!(dataset = %dataset, url = %url, "Fetching chart data");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Transform(TransformError::Decode(e.to_string())))
    }
}

/// Why a dataset fetch failed.
///
/// The variants only matter for diagnostics; every one of them surfaces to
/// the user as the dataset's fixed error message.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Transform(#[from] TransformError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpChartClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.to_string(), "API error 503: down");

        let err = FetchError::from(TransformError::Decode("missing field `data`".to_string()));
        assert_eq!(err.to_string(), "Malformed payload: missing field `data`");
    }
}

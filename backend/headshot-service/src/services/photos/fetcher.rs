//! Image fetcher with season fallback
//!
//! Newer season folders are preferred but older ones are accepted silently,
//! so photo freshness is best-effort by design.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::error::{AppError, Result};

/// Fetches raw headshot bytes from the image host
pub struct ImageFetcher {
    http: Client,
}

impl ImageFetcher {
    /// Create a fetcher whose per-attempt timeout is `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http })
    }

    /// Fetch the first URL that answers with a success status.
    ///
    /// Any failure (timeout, non-2xx, transport error) means "try the next
    /// candidate"; causes are not distinguished. Each URL is attempted at
    /// most once, and only after the whole list is exhausted does the call
    /// fail.
    pub async fn fetch_first(&self, urls: &[String]) -> Result<Bytes> {
        for url in urls {
            match self.try_fetch(url).await {
                Ok(bytes) => {
                    debug!(url = %url, size = bytes.len(), "Image fetched");
                    return Ok(bytes);
                }
                Err(reason) => {
                    debug!(url = %url, reason = %reason, "Candidate failed, trying next");
                }
            }
        }

        Err(AppError::NotFound(
            "no image found in any season folder".to_string(),
        ))
    }

    async fn try_fetch(&self, url: &str) -> std::result::Result<Bytes, String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("status {}", response.status()));
        }

        response.bytes().await.map_err(|e| e.to_string())
    }
}

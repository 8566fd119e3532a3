use reqwest::Client;
use tracing::debug;

use crate::api::error::ApiError;
use crate::scenario::types::HistoryEntry;

pub struct HistoryClient {
    client: Client,
    base_url: String,
}

impl HistoryClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::MissingBaseUrl);
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Fetch one page of past comparisons. Stateless: callers own any
    /// paging, each call is independent.
    pub async fn list(&self, limit: u32, offset: u32) -> Result<Vec<HistoryEntry>, ApiError> {
        let url = format!("{}/api/v1/compare/history", self.base_url);
        debug!("GET {} limit={} offset={}", url, limit, offset);

        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

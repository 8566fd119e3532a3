use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::api::error::ApiError;
use crate::scenario::types::{ComparisonResult, DateWindow, ScenarioRequest};

pub struct CompareClient {
    client: Client,
    base_url: String,
}

impl CompareClient {
    /// Fails synchronously when the base URL is missing, so a deployment
    /// mistake never shows up disguised as a network failure.
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

    /// Submit one validated scenario for comparison. Single POST, no retry.
    pub async fn submit(
        &self,
        request: &ScenarioRequest,
        window: &DateWindow,
    ) -> Result<ComparisonResult, ApiError> {
        let url = format!("{}/api/v1/compare", self.base_url);
        debug!("POST {} window {}..{}", url, window.start, window.end);

        let response = self
            .client
            .post(&url)
            .query(&query_pairs(window))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// `odds_date` is omitted entirely when not provided, never sent empty.
fn query_pairs(window: &DateWindow) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("start", window.start.clone()),
        ("end", window.end.clone()),
    ];
    if let Some(odds_date) = &window.odds_date {
        pairs.push(("odds_date", odds_date.clone()));
    }
    pairs
}

/// Extract a display message from a failure body. Structured `detail` wins,
/// then a plain JSON string body, then the raw text, then a generic message.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => text,
        Ok(value) => match value.get("detail") {
            Some(detail) => detail.to_string(),
            None => "Compare request failed".to_string(),
        },
        Err(_) => {
            if body.trim().is_empty() {
                "Compare request failed".to_string()
            } else {
                body.to_string()
            }
        }
    }
}

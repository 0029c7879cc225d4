//! reqwest-based client for the suggestion backend

use std::time::Duration;

use super::{
    ApiError, EXPORT_FAILED, EXPORT_PATH, FETCH_FAILED, KEYWORDS_PATH, SuggestionApi,
};
use crate::model::{ErrorBody, ExportRequest, KeywordRequest, SearchResponse};

#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client for `base_url`. No timeout is applied unless given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl SuggestionApi for HttpApiClient {
    async fn fetch_suggestions(&self, keyword: &str) -> Result<SearchResponse, ApiError> {
        let response = self
            .client
            .post(self.endpoint(KEYWORDS_PATH))
            .json(&KeywordRequest { keyword })
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                message: error_message(&body, FETCH_FAILED),
            });
        }

        serde_json::from_str::<SearchResponse>(&body)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn export_csv(&self, suggestions: &[String]) -> Result<Vec<u8>, ApiError> {
        let response = self
            .client
            .post(self.endpoint(EXPORT_PATH))
            .json(&ExportRequest { suggestions })
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The export endpoint's error body is not shown to the user
            return Err(ApiError::Status {
                code: status.as_u16(),
                message: EXPORT_FAILED.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// The `error` field of a JSON error body, or `fallback`
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;

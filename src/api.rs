//! Backend API: the two endpoints, their client, and the worker thread that
//! runs requests off the UI thread.

mod client;
mod worker;

pub use client::HttpApiClient;
pub use worker::{ApiChannel, ApiRequest, ApiResponse, spawn_worker};

use std::future::Future;

use thiserror::Error;

use crate::model::SearchResponse;

/// Path of the suggestion endpoint
pub const KEYWORDS_PATH: &str = "/api/keywords";
/// Path of the CSV export endpoint
pub const EXPORT_PATH: &str = "/api/export-csv";
/// File name for downloaded exports
pub const EXPORT_FILE_NAME: &str = "keyword_suggestions.csv";

pub const FETCH_FAILED: &str = "Failed to fetch suggestions";
pub const EXPORT_FAILED: &str = "Failed to export CSV";

/// Errors that can occur while talking to the backend
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Could not build the HTTP client
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the body's `error` field or the
    /// generic fallback.
    #[error("{message}")]
    Status { code: u16, message: String },

    /// 2xx response whose body could not be decoded
    #[error("Failed to fetch suggestions")]
    InvalidResponse(String),
}

/// The backend seam. `HttpApiClient` is the real implementation; tests
/// substitute their own.
pub trait SuggestionApi: Send + Sync + 'static {
    fn fetch_suggestions(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<SearchResponse, ApiError>> + Send;

    fn export_csv(
        &self,
        suggestions: &[String],
    ) -> impl Future<Output = Result<Vec<u8>, ApiError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_shows_message_verbatim() {
        let err = ApiError::Status {
            code: 400,
            message: "No suggestions found for this keyword".to_string(),
        };
        assert_eq!(err.to_string(), "No suggestions found for this keyword");
    }

    #[test]
    fn test_invalid_response_uses_generic_message() {
        let err = ApiError::InvalidResponse("expected value at line 1".to_string());
        assert_eq!(err.to_string(), FETCH_FAILED);
    }

    #[test]
    fn test_network_error_display() {
        let err = ApiError::Network("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}

//! Search data model
//!
//! Wire types for the suggestion endpoints and the immutable `SearchResult`
//! that the views render from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/keywords`
#[derive(Debug, Serialize)]
pub struct KeywordRequest<'a> {
    pub keyword: &'a str,
}

/// Body of `POST /api/export-csv`
#[derive(Debug, Serialize)]
pub struct ExportRequest<'a> {
    pub suggestions: &'a [String],
}

/// Error body carried by non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Success body of `POST /api/keywords`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub suggestions: Vec<String>,
    /// Kept raw so a malformed payload degrades to the fallback classifier
    /// instead of failing the whole search.
    #[serde(default)]
    pub categorized: Option<serde_json::Value>,
}

/// Per-category count and percentage as computed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CategoryMetric {
    pub count: u64,
    pub percentage: f64,
}

/// The `metrics` object: a grand total plus one entry per category name
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryMetrics {
    pub total: u64,
    #[serde(flatten)]
    pub by_category: BTreeMap<String, CategoryMetric>,
}

/// Server-side categorization of a suggestion list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategorizedPayload {
    pub categories: BTreeMap<String, Vec<String>>,
    pub metrics: CategoryMetrics,
}

impl CategorizedPayload {
    /// Decode the optional `categorized` field.
    ///
    /// Returns `None` unless both `categories` and `metrics` are present and
    /// decodable.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match serde_json::from_value::<CategorizedPayload>(value.clone()) {
            Ok(payload) => Some(payload),
            Err(e) => {
                log::debug!("Ignoring malformed categorized payload: {}", e);
                None
            }
        }
    }

    pub fn metric(&self, category: &str) -> Option<CategoryMetric> {
        self.metrics.by_category.get(category).copied()
    }

    pub fn bucket(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// One completed search. Replaced wholesale by the next successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    keyword: String,
    suggestions: Vec<String>,
    categorized: Option<CategorizedPayload>,
}

impl SearchResult {
    pub fn new(
        keyword: impl Into<String>,
        suggestions: Vec<String>,
        categorized: Option<CategorizedPayload>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            suggestions,
            categorized,
        }
    }

    pub fn from_response(keyword: impl Into<String>, response: SearchResponse) -> Self {
        let categorized = response
            .categorized
            .as_ref()
            .and_then(CategorizedPayload::from_value);
        Self::new(keyword, response.suggestions, categorized)
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn categorized(&self) -> Option<&CategorizedPayload> {
        self.categorized.as_ref()
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;

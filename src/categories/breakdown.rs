//! Category breakdown view model
//!
//! Builds what the category surface shows for one search: either the
//! enhanced dashboard (metric cards plus accordion sections) from the
//! backend's categorized payload, or the fallback question groups.

use crate::model::{CategorizedPayload, SearchResult};
use crate::text::literal_text;

use super::classifier::QuestionGroups;
use super::metadata::{CATEGORY_METADATA, CategoryMetadata, display_label, metadata_for};

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryBreakdown {
    Questions(QuestionGroups),
    Enhanced(EnhancedBreakdown),
}

impl CategoryBreakdown {
    pub fn from_result(result: &SearchResult) -> Self {
        match result.categorized() {
            Some(payload) => CategoryBreakdown::Enhanced(EnhancedBreakdown::from_payload(payload)),
            None => {
                let literal: Vec<String> =
                    result.suggestions().iter().map(|s| literal_text(s)).collect();
                CategoryBreakdown::Questions(QuestionGroups::group(&literal))
            }
        }
    }

    pub fn is_enhanced(&self) -> bool {
        matches!(self, CategoryBreakdown::Enhanced(_))
    }
}

/// Dashboard card, figures exactly as the backend sent them
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub name: String,
    pub label: String,
    pub metadata: CategoryMetadata,
    pub count: u64,
    pub percentage: f64,
}

/// One collapsible section
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    pub name: String,
    pub label: String,
    pub metadata: CategoryMetadata,
    pub suggestions: Vec<String>,
    /// Recomputed from the bucket size and `metrics.total`
    pub share: f64,
}

impl CategorySection {
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnhancedBreakdown {
    pub total: u64,
    pub cards: Vec<MetricCard>,
    pub sections: Vec<CategorySection>,
}

impl EnhancedBreakdown {
    pub fn from_payload(payload: &CategorizedPayload) -> Self {
        let total = payload.metrics.total;

        let cards = category_order(payload)
            .into_iter()
            .map(|name| {
                let metric = payload.metric(&name);
                MetricCard {
                    label: display_label(&name),
                    metadata: metadata_for(&name),
                    count: metric.map(|m| m.count).unwrap_or(0),
                    percentage: metric.map(|m| m.percentage).unwrap_or(0.0),
                    name,
                }
            })
            .collect();

        let sections = category_order(payload)
            .into_iter()
            .map(|name| {
                let bucket = payload.bucket(&name);
                CategorySection {
                    label: display_label(&name),
                    metadata: metadata_for(&name),
                    suggestions: bucket.iter().map(|s| literal_text(s)).collect(),
                    share: local_percentage(bucket.len(), total),
                    name,
                }
            })
            .collect();

        Self {
            total,
            cards,
            sections,
        }
    }
}

/// Metadata table order first, then categories only the payload knows
fn category_order(payload: &CategorizedPayload) -> Vec<String> {
    let mut names: Vec<String> = CATEGORY_METADATA.iter().map(|m| m.name.to_string()).collect();

    let extra = payload
        .categories
        .keys()
        .chain(payload.metrics.by_category.keys());
    for name in extra {
        if !names.iter().any(|n| n == name) {
            names.push(name.clone());
        }
    }
    names
}

/// `count / total * 100` rounded to one decimal, 0.0 for an empty total
pub fn local_percentage(count: usize, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "breakdown_tests.rs"]
mod breakdown_tests;

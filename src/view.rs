//! Results renderer
//!
//! `display_all` fans one `SearchResult` out to the three result surfaces
//! through the `ViewTemplate` trait. The terminal UI, the plain-text print
//! mode and the tests each provide their own template.

mod plain;
mod terminal;
mod terminal_render;

pub use plain::PlainTemplate;
pub use terminal::TerminalTemplate;
pub use terminal_render::CategoryLines;

use thiserror::Error;

use crate::categories::CategoryBreakdown;
use crate::model::SearchResult;
use crate::text::literal_text;

/// The template has nowhere to put the requested surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("view template is missing the {0} container")]
pub struct RenderGuard(pub &'static str);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based position in the backend order
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableModel {
    pub rows: Vec<TableRow>,
}

impl TableModel {
    pub fn from_suggestions(suggestions: &[String]) -> Self {
        let rows = suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| TableRow {
                index: i + 1,
                text: literal_text(s),
            })
            .collect();
        Self { rows }
    }
}

/// Keyword in the middle, one branch per suggestion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeModel {
    pub center: String,
    pub branches: Vec<String>,
}

impl TreeModel {
    pub fn from_result(result: &SearchResult) -> Self {
        Self {
            center: literal_text(result.keyword()),
            branches: result.suggestions().iter().map(|s| literal_text(s)).collect(),
        }
    }
}

/// Surfaces a concrete UI binding provides to the renderer
pub trait ViewTemplate {
    fn render_table(&mut self, table: &TableModel);

    fn render_tree(&mut self, tree: &TreeModel);

    fn render_categories(&mut self, breakdown: &CategoryBreakdown) -> Result<(), RenderGuard>;

    fn set_result_count(&mut self, count: usize);
}

/// Render every surface for `result`
pub fn display_all<T: ViewTemplate + ?Sized>(result: &SearchResult, template: &mut T) {
    template.render_table(&TableModel::from_suggestions(result.suggestions()));
    template.render_tree(&TreeModel::from_result(result));

    let breakdown = CategoryBreakdown::from_result(result);
    if let Err(guard) = template.render_categories(&breakdown) {
        log::warn!("Skipping category view: {}", guard);
    }

    template.set_result_count(result.len());
}

#[cfg(test)]
#[path = "view/renderer_tests.rs"]
mod renderer_tests;

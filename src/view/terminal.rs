//! Terminal binding of the view template
//!
//! Holds the last models handed over by the renderer; `terminal_render`
//! turns them into lines for the active tab on every frame.

use super::{RenderGuard, TableModel, TreeModel, ViewTemplate};
use crate::categories::{AccordionState, CategoryBreakdown};

#[derive(Debug, Default)]
pub struct TerminalTemplate {
    pub table: TableModel,
    pub tree: TreeModel,
    pub categories: Option<CategoryBreakdown>,
    pub accordion: AccordionState,
    pub result_count: usize,
}

impl TerminalTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accordion sections exist only for the enhanced breakdown
    pub fn has_accordions(&self) -> bool {
        matches!(&self.categories, Some(CategoryBreakdown::Enhanced(_)))
    }
}

impl ViewTemplate for TerminalTemplate {
    fn render_table(&mut self, table: &TableModel) {
        self.table = table.clone();
    }

    fn render_tree(&mut self, tree: &TreeModel) {
        self.tree = tree.clone();
    }

    fn render_categories(&mut self, breakdown: &CategoryBreakdown) -> Result<(), RenderGuard> {
        let sections = match breakdown {
            CategoryBreakdown::Enhanced(enhanced) => enhanced.sections.len(),
            CategoryBreakdown::Questions(_) => 0,
        };
        self.accordion.reset(sections);
        self.categories = Some(breakdown.clone());
        Ok(())
    }

    fn set_result_count(&mut self, count: usize) {
        self.result_count = count;
    }
}

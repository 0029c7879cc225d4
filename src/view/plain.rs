//! Plain-text template used by `--print`

use std::fmt::Write as _;

use super::{RenderGuard, TableModel, TreeModel, ViewTemplate};
use crate::categories::CategoryBreakdown;

/// Accumulates the three surfaces as text sections
#[derive(Debug, Default)]
pub struct PlainTemplate {
    table: String,
    tree: String,
    categories: String,
    count: usize,
}

impl PlainTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_output(self) -> String {
        let mut out = format!("Results: {}\n\n", self.count);
        for section in [self.table, self.tree, self.categories] {
            if !section.is_empty() {
                out.push_str(&section);
                out.push('\n');
            }
        }
        out
    }
}

impl ViewTemplate for PlainTemplate {
    fn render_table(&mut self, table: &TableModel) {
        self.table.clear();
        self.table.push_str("# Table\n");
        let width = table.rows.len().to_string().len();
        for row in &table.rows {
            let _ = writeln!(self.table, "{:>width$}  {}", row.index, row.text, width = width);
        }
    }

    fn render_tree(&mut self, tree: &TreeModel) {
        self.tree.clear();
        let _ = writeln!(self.tree, "# Tree\n● {}", tree.center);
        let last = tree.branches.len().saturating_sub(1);
        for (i, branch) in tree.branches.iter().enumerate() {
            let connector = if i == last { "└──" } else { "├──" };
            let _ = writeln!(self.tree, "{} {}", connector, branch);
        }
    }

    fn render_categories(&mut self, breakdown: &CategoryBreakdown) -> Result<(), RenderGuard> {
        self.categories.clear();
        match breakdown {
            CategoryBreakdown::Questions(groups) => {
                self.categories.push_str("# Questions\n");
                for (word, items) in groups.iter() {
                    let _ = writeln!(self.categories, "{} ({})", word.title(), items.len());
                    for item in items {
                        let _ = writeln!(self.categories, "  - {}", item);
                    }
                }
            }
            CategoryBreakdown::Enhanced(enhanced) => {
                let _ = writeln!(self.categories, "# Categories (total {})", enhanced.total);
                for card in &enhanced.cards {
                    let _ = writeln!(
                        self.categories,
                        "{} {}: {} ({:.1}%)",
                        card.metadata.icon, card.label, card.count, card.percentage
                    );
                }
                for section in &enhanced.sections {
                    let _ = writeln!(
                        self.categories,
                        "\n{} {} [{:.1}%]",
                        section.metadata.icon, section.label, section.share
                    );
                    if section.is_empty() {
                        self.categories.push_str("  (no suggestions in this category)\n");
                    }
                    for item in &section.suggestions {
                        let _ = writeln!(self.categories, "  - {}", item);
                    }
                }
            }
        }
        Ok(())
    }

    fn set_result_count(&mut self, count: usize) {
        self.count = count;
    }
}

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::TerminalTemplate;
use crate::categories::{CategoryBreakdown, EnhancedBreakdown, QuestionGroups};
use crate::text::truncate_to_width;

const CARD_WIDTH: usize = 30;
const BAR_CELLS: usize = 10;
const EMPTY_SECTION: &str = "No suggestions in this category";

/// Category lines plus the line index of the selected accordion header
pub struct CategoryLines {
    pub lines: Vec<Line<'static>>,
    pub selected_line: Option<usize>,
}

impl TerminalTemplate {
    pub fn table_lines(&self, width: u16) -> Vec<Line<'static>> {
        let index_width = self.table.rows.len().to_string().len().max(1);
        let text_width = (width as usize).saturating_sub(index_width + 3);

        let mut lines = vec![Line::from(Span::styled(
            format!("{:>w$}  Keyword Suggestion", "#", w = index_width),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))];

        lines.extend(self.table.rows.iter().map(|row| {
            Line::from(vec![
                Span::styled(
                    format!("{:>w$}  ", row.index, w = index_width),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(truncate_to_width(&row.text, text_width)),
            ])
        }));
        lines
    }

    pub fn tree_lines(&self, width: u16) -> Vec<Line<'static>> {
        let text_width = (width as usize).saturating_sub(6);

        let mut lines = vec![Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Cyan)),
            Span::styled(
                self.tree.center.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ])];

        let last = self.tree.branches.len().saturating_sub(1);
        lines.extend(self.tree.branches.iter().enumerate().map(|(i, branch)| {
            let connector = if i == last { "└── " } else { "├── " };
            Line::from(vec![
                Span::styled(connector, Style::default().fg(Color::DarkGray)),
                Span::raw(truncate_to_width(branch, text_width)),
            ])
        }));
        lines
    }

    pub fn category_lines(&self, width: u16, cursor_visible: bool) -> CategoryLines {
        match &self.categories {
            None => CategoryLines {
                lines: Vec::new(),
                selected_line: None,
            },
            Some(CategoryBreakdown::Questions(groups)) => CategoryLines {
                lines: question_lines(groups, width),
                selected_line: None,
            },
            Some(CategoryBreakdown::Enhanced(enhanced)) => {
                self.enhanced_lines(enhanced, width, cursor_visible)
            }
        }
    }

    fn enhanced_lines(
        &self,
        enhanced: &EnhancedBreakdown,
        width: u16,
        cursor_visible: bool,
    ) -> CategoryLines {
        let mut lines = dashboard_lines(enhanced, width);
        lines.push(Line::default());

        let item_width = (width as usize).saturating_sub(6);
        let mut selected_line = None;

        for (i, section) in enhanced.sections.iter().enumerate() {
            let expanded = self.accordion.is_expanded(i);
            let selected = i == self.accordion.selected();
            if selected {
                selected_line = Some(lines.len());
            }

            let arrow = if expanded { "▼" } else { "▶" };
            let color = section.metadata.terminal_color();
            let mut header_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            if selected && cursor_visible {
                header_style = header_style.add_modifier(Modifier::REVERSED);
            }

            lines.push(Line::from(vec![
                Span::styled(
                    format!(
                        "{} {} {} ({})",
                        arrow,
                        section.metadata.icon,
                        section.label,
                        section.suggestions.len()
                    ),
                    header_style,
                ),
                Span::raw("  "),
                Span::styled(mini_bar(section.share), Style::default().fg(color)),
                Span::styled(
                    format!(" {:.1}%", section.share),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));

            if !expanded {
                continue;
            }
            if section.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", EMPTY_SECTION),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
            for item in &section.suggestions {
                lines.push(Line::from(format!(
                    "    • {}",
                    truncate_to_width(item, item_width)
                )));
            }
        }

        CategoryLines {
            lines,
            selected_line,
        }
    }
}

/// Metric cards laid out in as many columns as fit
fn dashboard_lines(enhanced: &EnhancedBreakdown, width: u16) -> Vec<Line<'static>> {
    let per_row = ((width as usize) / CARD_WIDTH).max(1);
    let mut lines = vec![Line::from(Span::styled(
        format!("Total suggestions: {}", enhanced.total),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for chunk in enhanced.cards.chunks(per_row) {
        let spans: Vec<Span<'static>> = chunk
            .iter()
            .map(|card| {
                let text = format!(
                    "{} {} {} · {:.1}%",
                    card.metadata.icon, card.label, card.count, card.percentage
                );
                let text = truncate_to_width(&text, CARD_WIDTH - 2);
                let pad = CARD_WIDTH.saturating_sub(text.width());
                Span::styled(
                    format!("{}{}", text, " ".repeat(pad)),
                    Style::default().fg(card.metadata.terminal_color()),
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines
}

fn question_lines(groups: &QuestionGroups, width: u16) -> Vec<Line<'static>> {
    let item_width = (width as usize).saturating_sub(6);
    let mut lines = Vec::new();

    for (word, items) in groups.iter() {
        let header_style = if items.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(
            format!("{} questions ({})", word.title(), items.len()),
            header_style,
        )));

        if items.is_empty() {
            lines.push(Line::from(Span::styled(
                "    (none)",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for item in items {
            lines.push(Line::from(format!(
                "    • {}",
                truncate_to_width(item, item_width)
            )));
        }
    }
    lines
}

fn mini_bar(share: f64) -> String {
    let filled = ((share / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

#[cfg(test)]
#[path = "terminal_render_tests.rs"]
mod terminal_render_tests;

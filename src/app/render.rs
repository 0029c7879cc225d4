use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use super::state::{Action, App, Focus};
use super::view_tab::ViewTab;
use crate::help::help_popup_render;
use crate::text::literal_text;

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
const PLACEHOLDER: &str = "Enter a keyword and press Enter to see suggestions";
const NO_QUESTIONS: &str = "No categories to show";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_input(frame, layout[0]);
        self.render_action_bar(frame, layout[1]);
        self.render_tabs(frame, layout[2]);
        self.render_body(frame, layout[3]);
        self.render_status_line(frame, layout[4]);

        if self.help.visible {
            help_popup_render::render_popup(&mut self.help, frame);
        }
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::InputField {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        self.input.set_border_color(border_color);
        frame.render_widget(&self.input.textarea, area);
    }

    fn render_action_bar(&self, frame: &mut Frame, area: Rect) {
        let now = Instant::now();
        let search_label = if self.search.is_submit_enabled() {
            Action::Search.label()
        } else {
            "Searching…"
        };
        let search_style = if self.search.is_submit_enabled() {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray).bg(Color::Black)
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", search_label), search_style),
            Span::raw(" "),
            self.action_button(Action::Copy, now),
            Span::raw(" "),
            self.action_button(Action::Export, now),
        ];

        if self.results_visible {
            spans.push(Span::styled(
                format!("   Results: {}", self.result_count()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles = ViewTab::ALL
            .iter()
            .map(|tab| format!("{} {}", tab.index() + 1, tab.title()));
        let tabs = Tabs::new(titles)
            .select(self.view.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        frame.render_widget(tabs, area);
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::ResultsPane {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.view.title()))
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);

        if self.search.is_loading() {
            let frame_index = (self.frame_count / 2) as usize % SPINNER_FRAMES.len();
            let spinner = SPINNER_FRAMES[frame_index];
            let loading = Paragraph::new(Line::from(Span::styled(
                format!("{} Loading suggestions…", spinner),
                Style::default().fg(Color::Yellow),
            )))
            .block(block);
            frame.render_widget(loading, area);
            return;
        }

        if !self.results_visible {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let lines = match self.view {
            ViewTab::Table => self.template.table_lines(inner.width),
            ViewTab::Tree => self.template.tree_lines(inner.width),
            ViewTab::Questions => {
                let cursor_visible = self.focus == Focus::ResultsPane;
                let categories = self.template.category_lines(inner.width, cursor_visible);
                self.scroll
                    .update_bounds(categories.lines.len() as u32, inner.height);
                if cursor_visible && let Some(line) = categories.selected_line {
                    self.scroll.ensure_visible(line as u32);
                }
                categories.lines
            }
        };

        let lines = if lines.is_empty() {
            vec![Line::from(Span::styled(
                NO_QUESTIONS,
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            lines
        };

        self.scroll.update_bounds(lines.len() as u32, inner.height);
        let body = Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll.offset, 0));
        frame.render_widget(body, area);
    }

    fn action_button(&self, action: Action, now: Instant) -> Span<'static> {
        let style = if self.feedback.is_active_at(action, now) {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };
        Span::styled(format!(" {} ", self.feedback.label_at(action, now)), style)
    }

    /// Error slot, or a key hint when there is no error
    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let line = match self.errors.message() {
            Some(message) => Line::from(Span::styled(
                format!(" ✗ {}", literal_text(message)),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                " F1: help | Enter: search | Tab: view | Ctrl+Y: copy | Ctrl+E: export",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

/// Keyword input field state
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_block(keyword_block(Color::DarkGray));

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Enter a keyword, e.g. coffee");

        Self { textarea }
    }

    /// Current raw keyword text
    pub fn keyword(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Replace the field contents
    pub fn set_keyword(&mut self, keyword: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(single_line(keyword));
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.textarea.set_block(keyword_block(color));
    }

    /// Insert pasted text at the cursor, flattened to one line
    pub fn paste(&mut self, text: &str) {
        self.textarea.insert_str(single_line(text));
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn keyword_block(border_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(" Keyword ")
        .border_style(Style::default().fg(border_color))
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{App, Focus};
use super::view_tab::ViewTab;
use crate::clipboard::clipboard_events::copy_suggestions;
use crate::export::request_export;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    pub fn handle_paste_event(&mut self, text: String) {
        if self.focus == Focus::InputField {
            self.input.paste(&text);
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::ResultsPane => self.handle_results_pane_key(key),
        }
    }

    /// Keys that work regardless of focus. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Help blocks everything else while open
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => self.help.close(),
                KeyCode::Char('c') if ctrl => self.should_quit = true,
                KeyCode::Char('j') | KeyCode::Down => self.help.scroll.scroll_down(1),
                KeyCode::Char('k') | KeyCode::Up => self.help.scroll.scroll_up(1),
                _ => {}
            }
            return true;
        }

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('y') if ctrl => {
                copy_suggestions(self);
            }
            KeyCode::Char('e') if ctrl => {
                request_export(self);
            }
            KeyCode::F(1) => self.help.toggle(),
            KeyCode::Tab => self.select_view(self.view.next()),
            KeyCode::BackTab => self.toggle_focus(),
            _ => return false,
        }
        true
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::InputField => Focus::ResultsPane,
            Focus::ResultsPane => Focus::InputField,
        };
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Esc => self.focus = Focus::ResultsPane,
            _ => {
                self.input.textarea.input(key);
            }
        }
    }

    fn handle_results_pane_key(&mut self, key: KeyEvent) {
        let accordions = self.view == ViewTab::Questions && self.template.has_accordions();

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('i') | KeyCode::Char('/') => self.focus = Focus::InputField,
            KeyCode::Char('y') => {
                copy_suggestions(self);
            }
            KeyCode::Char('e') => {
                request_export(self);
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = (c as usize) - ('1' as usize);
                if let Some(view) = ViewTab::from_index(index) {
                    self.select_view(view);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.select_view(self.view.prev()),
            KeyCode::Right | KeyCode::Char('l') => self.select_view(self.view.next()),
            KeyCode::Down | KeyCode::Char('j') if accordions => {
                self.template.accordion.select_next()
            }
            KeyCode::Up | KeyCode::Char('k') if accordions => self.template.accordion.select_prev(),
            KeyCode::Enter | KeyCode::Char(' ') if accordions => {
                self.template.accordion.toggle_selected()
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll.scroll_up(1),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.scroll.jump_to_bottom(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;

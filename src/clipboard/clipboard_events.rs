use crate::app::{Action, App};

/// Header line of the clipboard text
pub const CLIPBOARD_HEADER: &str = "Keyword Suggestion";

const NOTHING_TO_COPY: &str = "No suggestions to copy";
const COPY_FAILED: &str = "Failed to copy to clipboard";

/// Header line followed by one suggestion per line
pub fn clipboard_text(suggestions: &[String]) -> String {
    let mut text = String::from(CLIPBOARD_HEADER);
    for suggestion in suggestions {
        text.push('\n');
        text.push_str(suggestion);
    }
    text
}

/// Copy the current suggestion list. Returns true when the clipboard was written.
pub fn copy_suggestions(app: &mut App) -> bool {
    let text = match &app.result {
        Some(result) if !result.is_empty() => clipboard_text(result.suggestions()),
        _ => {
            app.errors.show(NOTHING_TO_COPY);
            return false;
        }
    };

    match app.clipboard.write_text(&text) {
        Ok(()) => {
            app.feedback.trigger(Action::Copy);
            true
        }
        Err(e) => {
            log::warn!("Clipboard write failed: {}", e);
            app.errors.show(COPY_FAILED);
            false
        }
    }
}

#[cfg(test)]
#[path = "clipboard_events_tests.rs"]
mod clipboard_events_tests;

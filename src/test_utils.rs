#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::mpsc::{self, Sender};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::api::{ApiChannel, ApiRequest, ApiResponse};
    use crate::app::App;
    use crate::clipboard::{ClipboardError, ClipboardResult, ClipboardWriter};
    use crate::config::Config;
    use crate::model::SearchResult;

    /// Worker-side channel ends, held by the test in place of a worker
    pub struct TestChannels {
        pub request_rx: UnboundedReceiver<ApiRequest>,
        pub response_tx: Sender<ApiResponse>,
    }

    pub fn test_app() -> (App, TestChannels) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut app = App::new(&Config::default(), ApiChannel::new(request_tx, response_rx));
        app.clipboard = Box::new(RecordingClipboard::default());

        (
            app,
            TestChannels {
                request_rx,
                response_tx,
            },
        )
    }

    /// App already showing a plain result for "coffee"
    pub fn app_with_result(suggestions: &[&str]) -> (App, TestChannels) {
        let (mut app, channels) = test_app();
        let suggestions = suggestions.iter().map(|s| s.to_string()).collect();
        app.show_result(SearchResult::new("coffee", suggestions, None));
        (app, channels)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Clipboard that records writes instead of touching the system
    #[derive(Clone, Default)]
    pub struct RecordingClipboard {
        writes: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl RecordingClipboard {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn writes(&self) -> Vec<String> {
            self.writes.borrow().clone()
        }
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> ClipboardResult {
            if self.fail {
                return Err(ClipboardError::SystemUnavailable);
            }
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }
}

//! Clipboard backend selection and the writer seam used by the copy action

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

/// Result type for clipboard operations
pub type ClipboardResult = Result<(), ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// System clipboard is not available
    #[error("system clipboard unavailable")]
    SystemUnavailable,
    /// Error writing to clipboard
    #[error("clipboard write failed")]
    WriteError,
}

/// Anything that can receive clipboard text
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> ClipboardResult;
}

/// Writes through the configured backend
#[derive(Debug, Clone, Copy)]
pub struct BackendWriter {
    pub backend: ClipboardBackend,
}

impl BackendWriter {
    pub fn new(backend: ClipboardBackend) -> Self {
        Self { backend }
    }
}

impl ClipboardWriter for BackendWriter {
    fn write_text(&mut self, text: &str) -> ClipboardResult {
        copy_to_clipboard(text, self.backend)
    }
}

/// Copy text to clipboard using the specified backend
///
/// - `System`: Uses only the OS clipboard API (via arboard)
/// - `Osc52`: Uses only OSC 52 escape sequences
/// - `Auto`: Tries system clipboard first, falls back to OSC 52 if unavailable
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            log::debug!("System clipboard failed ({}), using OSC 52", e);
            osc52::copy(text)
        }),
    }
}

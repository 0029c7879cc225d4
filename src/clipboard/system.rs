//! Native clipboard through arboard

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

/// Fails with `SystemUnavailable` when there is no display server to talk to
pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|e| {
        log::debug!("System clipboard unavailable: {}", e);
        ClipboardError::SystemUnavailable
    })?;

    clipboard.set_text(text).map_err(|e| {
        log::debug!("System clipboard write failed: {}", e);
        ClipboardError::WriteError
    })
}

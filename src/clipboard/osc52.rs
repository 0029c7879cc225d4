//! OSC 52 clipboard backend
//!
//! Asks the terminal emulator to set the clipboard. Works over SSH and in
//! terminals without a display server, as long as the emulator honours OSC 52.

use std::io::{self, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::backend::{ClipboardError, ClipboardResult};

const OSC52_PREFIX: &str = "\x1b]52;c;";
const BEL: char = '\x07';

pub fn copy(text: &str) -> ClipboardResult {
    write_sequence(&mut io::stdout(), text)
}

/// Write the escape sequence for `text` to `out` and flush it
pub fn write_sequence<W: Write>(out: &mut W, text: &str) -> ClipboardResult {
    out.write_all(encode_osc52(text).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| {
            log::debug!("OSC 52 write failed: {}", e);
            ClipboardError::WriteError
        })
}

pub fn encode_osc52(text: &str) -> String {
    format!("{}{}{}", OSC52_PREFIX, STANDARD.encode(text), BEL)
}

#[cfg(test)]
#[path = "osc52_tests.rs"]
mod osc52_tests;

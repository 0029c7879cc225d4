//! Clipboard support: system clipboard, OSC 52, and the copy action

pub mod backend;
pub mod clipboard_events;
mod osc52;
mod system;

pub use backend::{BackendWriter, ClipboardError, ClipboardResult, ClipboardWriter, copy_to_clipboard};

//! CSV export action
//!
//! Posts the current suggestions to the backend and saves the returned
//! bytes as `keyword_suggestions.csv` in the export directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::api::{ApiRequest, EXPORT_FAILED, EXPORT_FILE_NAME};
use crate::app::{Action, App};
use crate::error::KwError;

const NOTHING_TO_EXPORT: &str = "No suggestions to export";

/// Write the downloaded CSV into `dir`, replacing any previous export
pub fn save_csv(dir: &Path, bytes: &[u8]) -> Result<PathBuf, KwError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Queue an export of the current list. Returns true when a request was sent.
pub fn request_export(app: &mut App) -> bool {
    let suggestions = match &app.result {
        Some(result) if !result.is_empty() => result.suggestions().to_vec(),
        _ => {
            app.errors.show(NOTHING_TO_EXPORT);
            return false;
        }
    };

    if !app.api.send(ApiRequest::Export { suggestions }) {
        app.errors.show(EXPORT_FAILED);
        return false;
    }
    true
}

/// Apply a finished export download
pub fn complete_export(app: &mut App, bytes: &[u8]) {
    match save_csv(&app.export_dir, bytes) {
        Ok(path) => {
            log::debug!("Exported CSV to {}", path.display());
            app.feedback.trigger(Action::Export);
        }
        Err(e) => {
            log::warn!("Saving export failed: {}", e);
            app.errors.show(EXPORT_FAILED);
        }
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;

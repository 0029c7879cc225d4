//! File logging
//!
//! The terminal belongs to the UI, so log lines go to
//! `<cache dir>/kwsuggest/kwsuggest.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::error::KwError;

pub const LOG_FILE_NAME: &str = "kwsuggest.log";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("kwsuggest").join(LOG_FILE_NAME))
}

/// Start logging at debug level. `RUST_LOG` overrides the level.
pub fn init(path: PathBuf) -> Result<(), KwError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::new()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| KwError::Io(std::io::Error::other(e)))?;

    log::info!("Logging to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_ends_with_file_name() {
        if let Some(path) = log_path() {
            assert!(path.ends_with("kwsuggest/kwsuggest.log"));
        }
    }
}

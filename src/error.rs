use thiserror::Error;

/// Application level errors for kwsuggest
#[derive(Debug, Error)]
pub enum KwError {
    #[error("Please enter a keyword")]
    EmptyKeyword,

    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("{0}")]
    Api(#[from] crate::api::ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trim the raw input and reject empty or whitespace-only keywords
pub fn validate_keyword(raw: &str) -> Result<String, KwError> {
    let keyword = raw.trim();
    if keyword.is_empty() {
        return Err(KwError::EmptyKeyword);
    }
    Ok(keyword.to_string())
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

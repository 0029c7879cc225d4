//! Non-interactive `--print` mode: one fetch, rendered as plain text

use crate::api::SuggestionApi;
use crate::error::{KwError, validate_keyword};
use crate::model::SearchResult;
use crate::text::literal_text;
use crate::view::{PlainTemplate, display_all};

/// Validate, fetch once and render every surface as text.
///
/// A blank keyword fails before any request is made.
pub async fn render_plain<A: SuggestionApi>(api: &A, raw_keyword: &str) -> Result<String, KwError> {
    let keyword = validate_keyword(raw_keyword)?;
    log::debug!("Fetching suggestions for {:?}", keyword);

    let response = api.fetch_suggestions(&keyword).await?;
    let result = SearchResult::from_response(keyword, response);

    let mut template = PlainTemplate::new();
    display_all(&result, &mut template);
    Ok(template.into_output())
}

/// Error text for stderr, with backend control characters neutralised
pub fn failure_message(err: &KwError) -> String {
    literal_text(&err.to_string())
}

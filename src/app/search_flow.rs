//! Submit flow and worker response handling

use super::state::App;
use crate::api::{ApiRequest, ApiResponse, FETCH_FAILED};
use crate::error::validate_keyword;
use crate::export::complete_export;
use crate::model::SearchResult;
use crate::view::display_all;

impl App {
    /// Validate the keyword and start a search.
    ///
    /// Ignored while a search is already in flight.
    pub fn submit_search(&mut self) {
        if !self.search.is_submit_enabled() {
            return;
        }

        let keyword = match validate_keyword(self.input.keyword()) {
            Ok(keyword) => keyword,
            Err(e) => {
                self.errors.show(e.to_string());
                return;
            }
        };

        self.errors.clear();
        self.results_visible = false;

        let Some(request_id) = self.search.start() else {
            return;
        };

        log::debug!("Submitting search {} for {:?}", request_id, keyword);
        if !self.api.send(ApiRequest::Search {
            keyword,
            request_id,
        }) {
            self.search.finish(request_id);
            self.errors.show(FETCH_FAILED);
        }
    }

    /// Apply every response the worker has delivered since the last frame
    pub fn poll_api(&mut self) {
        for response in self.api.poll() {
            self.apply_response(response);
        }
    }

    pub fn apply_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::SearchCompleted {
                request_id,
                keyword,
                response,
            } => {
                if self.search.finish(request_id) {
                    self.show_result(SearchResult::from_response(keyword, response));
                }
            }
            ApiResponse::SearchFailed {
                request_id,
                message,
            } => {
                if self.search.finish(request_id) {
                    self.errors.show(message);
                }
            }
            ApiResponse::ExportCompleted { bytes } => complete_export(self, &bytes),
            ApiResponse::ExportFailed { message } => self.errors.show(message),
        }
    }

    /// Replace the result slot and redraw every surface from it
    pub fn show_result(&mut self, result: SearchResult) {
        display_all(&result, &mut self.template);
        self.result = Some(result);
        self.scroll.reset();
        self.results_visible = true;
    }
}

#[cfg(test)]
#[path = "search_flow_tests.rs"]
mod search_flow_tests;

use crate::api::{ApiRequest, ApiResponse};
use crate::model::SearchResponse;
use crate::test_utils::test_helpers::{app_with_result, test_app};

fn response(suggestions: &[&str]) -> SearchResponse {
    SearchResponse {
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        categorized: None,
    }
}

#[test]
fn test_whitespace_keyword_is_rejected_locally() {
    let (mut app, mut channels) = test_app();
    app.input.set_keyword("   ");

    app.submit_search();

    assert_eq!(app.errors.message(), Some("Please enter a keyword"));
    assert!(channels.request_rx.try_recv().is_err());
    assert!(!app.search.is_loading());
    assert!(app.search.is_submit_enabled());
}

#[test]
fn test_submit_sends_one_trimmed_request() {
    let (mut app, mut channels) = test_app();
    app.input.set_keyword("  coffee ");

    app.submit_search();

    match channels.request_rx.try_recv().unwrap() {
        ApiRequest::Search { keyword, .. } => assert_eq!(keyword, "coffee"),
        other => panic!("unexpected request {:?}", other),
    }
    assert!(channels.request_rx.try_recv().is_err());
    assert!(app.search.is_loading());
    assert!(!app.search.is_submit_enabled());
}

#[test]
fn test_submit_clears_error_and_hides_results() {
    let (mut app, _channels) = app_with_result(&["coffee"]);
    app.errors.show("No suggestions to copy");
    app.input.set_keyword("tea");

    app.submit_search();

    assert!(app.errors.message().is_none());
    assert!(!app.results_visible);
}

#[test]
fn test_submit_while_searching_is_ignored() {
    let (mut app, mut channels) = test_app();
    app.input.set_keyword("coffee");
    app.submit_search();
    app.submit_search();

    assert!(channels.request_rx.try_recv().is_ok());
    assert!(channels.request_rx.try_recv().is_err());
}

#[test]
fn test_success_renders_all_views() {
    let (mut app, mut channels) = test_app();
    app.input.set_keyword("coffee");
    app.submit_search();
    let request_id = match channels.request_rx.try_recv().unwrap() {
        ApiRequest::Search { request_id, .. } => request_id,
        other => panic!("unexpected request {:?}", other),
    };

    channels
        .response_tx
        .send(ApiResponse::SearchCompleted {
            request_id,
            keyword: "coffee".to_string(),
            response: response(&["what is coffee", "how to brew coffee", "best coffee beans"]),
        })
        .unwrap();
    app.poll_api();

    assert!(app.results_visible);
    assert!(app.search.is_submit_enabled());
    assert!(!app.search.is_loading());
    assert_eq!(app.result_count(), 3);
    assert_eq!(app.template.table.rows.len(), 3);
    assert_eq!(app.template.tree.center, "coffee");
    assert_eq!(app.result.as_ref().unwrap().keyword(), "coffee");
}

#[test]
fn test_failure_shows_message_and_reenables() {
    let (mut app, mut channels) = test_app();
    app.input.set_keyword("zzzz");
    app.submit_search();
    let request_id = match channels.request_rx.try_recv().unwrap() {
        ApiRequest::Search { request_id, .. } => request_id,
        other => panic!("unexpected request {:?}", other),
    };

    app.apply_response(ApiResponse::SearchFailed {
        request_id,
        message: "No suggestions found for this keyword".to_string(),
    });

    assert_eq!(app.errors.message(), Some("No suggestions found for this keyword"));
    assert!(app.search.is_submit_enabled());
    assert!(!app.results_visible);
}

#[test]
fn test_failure_keeps_previous_result_for_copy() {
    let (mut app, mut channels) = app_with_result(&["coffee"]);
    app.input.set_keyword("tea");
    app.submit_search();
    let request_id = match channels.request_rx.try_recv().unwrap() {
        ApiRequest::Search { request_id, .. } => request_id,
        other => panic!("unexpected request {:?}", other),
    };

    app.apply_response(ApiResponse::SearchFailed {
        request_id,
        message: "Failed to fetch suggestions".to_string(),
    });

    assert_eq!(app.result.as_ref().unwrap().suggestions(), ["coffee".to_string()]);
}

#[test]
fn test_stale_response_is_dropped() {
    let (mut app, _channels) = test_app();

    app.apply_response(ApiResponse::SearchCompleted {
        request_id: 42,
        keyword: "coffee".to_string(),
        response: response(&["coffee"]),
    });

    assert!(app.result.is_none());
    assert!(!app.results_visible);
}

#[test]
fn test_new_result_replaces_old() {
    let (mut app, mut channels) = app_with_result(&["old one", "old two"]);
    app.input.set_keyword("tea");
    app.submit_search();
    let request_id = match channels.request_rx.try_recv().unwrap() {
        ApiRequest::Search { request_id, .. } => request_id,
        other => panic!("unexpected request {:?}", other),
    };

    app.apply_response(ApiResponse::SearchCompleted {
        request_id,
        keyword: "tea".to_string(),
        response: response(&["green tea"]),
    });

    let result = app.result.as_ref().unwrap();
    assert_eq!(result.keyword(), "tea");
    assert_eq!(result.suggestions(), ["green tea".to_string()]);
    assert_eq!(app.template.table.rows.len(), 1);
}

#[test]
fn test_export_failure_response_shows_error_and_writes_nothing() {
    let (mut app, _channels) = app_with_result(&["coffee"]);
    let dir = tempfile::tempdir().unwrap();
    app.export_dir = dir.path().to_path_buf();

    app.apply_response(ApiResponse::ExportFailed {
        message: "Failed to export CSV".to_string(),
    });

    assert_eq!(app.errors.message(), Some("Failed to export CSV"));
    assert!(!dir.path().join(crate::api::EXPORT_FILE_NAME).exists());
    assert!(!app.feedback.is_active(crate::app::Action::Export));
}

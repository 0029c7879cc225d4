use super::*;
use serde_json::json;

#[test]
fn test_response_without_categorized() {
    let body = r#"{"suggestions": ["what is coffee", "best coffee beans"]}"#;
    let response: SearchResponse = serde_json::from_str(body).unwrap();
    let result = SearchResult::from_response("coffee", response);

    assert_eq!(result.keyword(), "coffee");
    assert_eq!(result.len(), 2);
    assert!(result.categorized().is_none());
}

#[test]
fn test_response_missing_suggestions_is_rejected() {
    let body = r#"{"categorized": null}"#;
    assert!(serde_json::from_str::<SearchResponse>(body).is_err());
}

#[test]
fn test_well_formed_categorized_payload() {
    let body = json!({
        "suggestions": ["coffee price", "what is coffee"],
        "categorized": {
            "categories": {
                "Cost_Related": ["coffee price"],
                "Questions": ["what is coffee"]
            },
            "metrics": {
                "total": 2,
                "Cost_Related": {"count": 1, "percentage": 50.0},
                "Questions": {"count": 1, "percentage": 50.0}
            }
        }
    });
    let response: SearchResponse = serde_json::from_value(body).unwrap();
    let result = SearchResult::from_response("coffee", response);

    let payload = result.categorized().expect("payload should decode");
    assert_eq!(payload.metrics.total, 2);
    assert_eq!(payload.bucket("Questions"), ["what is coffee".to_string()]);
    assert_eq!(
        payload.metric("Cost_Related"),
        Some(CategoryMetric {
            count: 1,
            percentage: 50.0
        })
    );
}

#[test]
fn test_payload_missing_metrics_is_ignored() {
    let value = json!({"categories": {"Questions": ["what is coffee"]}});
    assert!(CategorizedPayload::from_value(&value).is_none());
}

#[test]
fn test_payload_missing_categories_is_ignored() {
    let value = json!({"metrics": {"total": 0}});
    assert!(CategorizedPayload::from_value(&value).is_none());
}

#[test]
fn test_payload_with_wrong_shape_is_ignored() {
    let value = json!({"categories": ["Questions"], "metrics": {"total": 1}});
    assert!(CategorizedPayload::from_value(&value).is_none());
}

#[test]
fn test_bucket_for_unknown_category_is_empty() {
    let value = json!({"categories": {}, "metrics": {"total": 0}});
    let payload = CategorizedPayload::from_value(&value).unwrap();
    assert!(payload.bucket("Questions").is_empty());
    assert!(payload.metric("Questions").is_none());
}

#[test]
fn test_request_bodies_serialize() {
    let keyword = serde_json::to_value(KeywordRequest { keyword: "coffee" }).unwrap();
    assert_eq!(keyword, json!({"keyword": "coffee"}));

    let suggestions = vec!["a".to_string(), "b".to_string()];
    let export = serde_json::to_value(ExportRequest {
        suggestions: &suggestions,
    })
    .unwrap();
    assert_eq!(export, json!({"suggestions": ["a", "b"]}));
}

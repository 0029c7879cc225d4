use super::*;
use crate::categories::QuestionWord;
use crate::model::SearchResponse;
use proptest::prelude::*;
use serde_json::json;

/// Records whatever the renderer hands it
#[derive(Default)]
struct RecordingTemplate {
    table: Option<TableModel>,
    tree: Option<TreeModel>,
    categories: Option<CategoryBreakdown>,
    count: Option<usize>,
    enhanced_supported: bool,
}

impl RecordingTemplate {
    fn new() -> Self {
        Self {
            enhanced_supported: true,
            ..Default::default()
        }
    }
}

impl ViewTemplate for RecordingTemplate {
    fn render_table(&mut self, table: &TableModel) {
        self.table = Some(table.clone());
    }

    fn render_tree(&mut self, tree: &TreeModel) {
        self.tree = Some(tree.clone());
    }

    fn render_categories(&mut self, breakdown: &CategoryBreakdown) -> Result<(), RenderGuard> {
        if breakdown.is_enhanced() && !self.enhanced_supported {
            return Err(RenderGuard("metrics dashboard"));
        }
        self.categories = Some(breakdown.clone());
        Ok(())
    }

    fn set_result_count(&mut self, count: usize) {
        self.count = Some(count);
    }
}

fn coffee_result() -> SearchResult {
    SearchResult::new(
        "coffee",
        vec![
            "what is coffee".to_string(),
            "how to brew coffee".to_string(),
            "best coffee beans".to_string(),
        ],
        None,
    )
}

#[test]
fn test_coffee_scenario_all_views() {
    let mut template = RecordingTemplate::new();
    display_all(&coffee_result(), &mut template);

    let table = template.table.unwrap();
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[2], TableRow { index: 3, text: "best coffee beans".to_string() });

    let tree = template.tree.unwrap();
    assert_eq!(tree.center, "coffee");
    assert_eq!(tree.branches.len(), 3);

    match template.categories.unwrap() {
        CategoryBreakdown::Questions(groups) => {
            assert_eq!(groups.get(QuestionWord::What).len(), 1);
            assert_eq!(groups.get(QuestionWord::How).len(), 1);
            assert_eq!(groups.total(), 2);
        }
        other => panic!("expected question groups, got {:?}", other),
    }

    assert_eq!(template.count, Some(3));
}

#[test]
fn test_render_guard_skips_categories_only() {
    let response: SearchResponse = serde_json::from_value(json!({
        "suggestions": ["coffee price"],
        "categorized": {
            "categories": {"Cost_Related": ["coffee price"]},
            "metrics": {"total": 1, "Cost_Related": {"count": 1, "percentage": 100.0}}
        }
    }))
    .unwrap();
    let result = SearchResult::from_response("coffee", response);

    let mut template = RecordingTemplate::new();
    template.enhanced_supported = false;
    display_all(&result, &mut template);

    assert!(template.categories.is_none());
    assert_eq!(template.table.unwrap().rows.len(), 1);
    assert_eq!(template.count, Some(1));
}

#[test]
fn test_table_text_is_literal() {
    let result = SearchResult::new("x", vec!["\u{7}bell <i>coffee</i>".to_string()], None);
    let mut template = RecordingTemplate::new();
    display_all(&result, &mut template);

    let row = &template.table.unwrap().rows[0];
    assert_eq!(row.text, "\u{2407}bell <i>coffee</i>");
}

proptest! {
    #[test]
    fn prop_table_rows_match_suggestions(
        suggestions in prop::collection::vec("[a-zA-Z0-9 <>&]{1,30}", 1..50)
    ) {
        let result = SearchResult::new("kw", suggestions.clone(), None);
        let table = TableModel::from_suggestions(result.suggestions());

        prop_assert_eq!(table.rows.len(), suggestions.len());
        for (n, row) in table.rows.iter().enumerate() {
            prop_assert_eq!(row.index, n + 1);
            prop_assert_eq!(&row.text, &literal_text(&suggestions[n]));
        }
    }
}

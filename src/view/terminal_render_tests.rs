use super::*;
use crate::model::{CategorizedPayload, SearchResult};
use crate::view::display_all;
use serde_json::json;

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn texts(lines: &[Line]) -> Vec<String> {
    lines.iter().map(line_text).collect()
}

fn coffee_template() -> TerminalTemplate {
    let result = SearchResult::new(
        "coffee",
        vec![
            "what is coffee".to_string(),
            "how to brew coffee".to_string(),
            "best coffee beans".to_string(),
        ],
        None,
    );
    let mut template = TerminalTemplate::new();
    display_all(&result, &mut template);
    template
}

fn enhanced_template() -> TerminalTemplate {
    let payload = CategorizedPayload::from_value(&json!({
        "categories": {"Questions": ["what is coffee"], "Cost_Related": []},
        "metrics": {
            "total": 3,
            "Questions": {"count": 1, "percentage": 33.3},
            "Cost_Related": {"count": 0, "percentage": 0.0}
        }
    }))
    .unwrap();
    let result = SearchResult::new(
        "coffee",
        vec!["what is coffee".to_string(), "a".to_string(), "b".to_string()],
        Some(payload),
    );
    let mut template = TerminalTemplate::new();
    display_all(&result, &mut template);
    template
}

#[test]
fn test_table_lines_header_and_rows() {
    let lines = texts(&coffee_template().table_lines(80));
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "#  Keyword Suggestion");
    assert_eq!(lines[1], "1  what is coffee");
    assert_eq!(lines[3], "3  best coffee beans");
}

#[test]
fn test_tree_lines_center_and_branches() {
    let lines = texts(&coffee_template().tree_lines(80));
    assert_eq!(lines[0], "● coffee");
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "├── what is coffee");
    assert_eq!(lines[3], "└── best coffee beans");
}

#[test]
fn test_question_lines() {
    let category = coffee_template().category_lines(80, false);
    let lines = texts(&category.lines);
    assert!(category.selected_line.is_none());
    assert_eq!(lines[0], "What questions (1)");
    assert_eq!(lines[1], "    • what is coffee");
    assert_eq!(lines[2], "How questions (1)");
    assert!(lines.contains(&"Why questions (0)".to_string()));
    assert!(!lines.iter().any(|l| l.contains("best coffee beans")));
}

#[test]
fn test_enhanced_collapsed_by_default() {
    let template = enhanced_template();
    let category = template.category_lines(80, true);
    let lines = texts(&category.lines);

    assert_eq!(lines[0], "Total suggestions: 3");
    assert!(!lines.iter().any(|l| l.contains("• what is coffee")));

    let header = &lines[category.selected_line.unwrap()];
    assert!(header.starts_with("▶ ❓ Questions (1)"));
    assert!(header.ends_with(" 33.3%"));
}

#[test]
fn test_enhanced_expanded_section_lists_items() {
    let mut template = enhanced_template();
    template.accordion.toggle(0);
    let lines = texts(&template.category_lines(80, true).lines);

    assert!(lines.iter().any(|l| l.starts_with("▼ ❓ Questions (1)")));
    assert!(lines.contains(&"    • what is coffee".to_string()));
}

#[test]
fn test_enhanced_empty_section_placeholder() {
    let mut template = enhanced_template();
    let cost = 9;
    template.accordion.toggle(cost);
    let lines = texts(&template.category_lines(80, true).lines);

    assert!(lines.iter().any(|l| l.starts_with("▼ 💰 Cost Related (0)")));
    assert!(lines.contains(&format!("    {}", EMPTY_SECTION)));
}

#[test]
fn test_mini_bar() {
    assert_eq!(mini_bar(0.0), "░░░░░░░░░░");
    assert_eq!(mini_bar(33.3), "███░░░░░░░");
    assert_eq!(mini_bar(100.0), "██████████");
}

//! Literal text handling for backend-supplied strings
//!
//! Suggestions come from an untrusted backend and end up in a terminal.
//! Control characters are replaced with their visible Unicode control
//! pictures so an embedded escape sequence is displayed, never executed.

use unicode_width::UnicodeWidthStr;

const CONTROL_PICTURES_BASE: u32 = 0x2400;
const DELETE_PICTURE: char = '\u{2421}';

/// Render `text` as inert, displayable characters
pub fn literal_text(text: &str) -> String {
    text.chars().map(literal_char).collect()
}

fn literal_char(c: char) -> char {
    match c as u32 {
        code @ 0x00..=0x1f => char::from_u32(CONTROL_PICTURES_BASE + code).unwrap_or('\u{fffd}'),
        0x7f => DELETE_PICTURE,
        0x80..=0x9f => '\u{fffd}',
        _ => c,
    }
}

/// Truncate to `max_width` display columns, appending an ellipsis when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(literal_text("how to brew coffee"), "how to brew coffee");
    }

    #[test]
    fn test_markup_is_kept_verbatim() {
        assert_eq!(
            literal_text("<b>coffee</b> & \"tea\""),
            "<b>coffee</b> & \"tea\""
        );
    }

    #[test]
    fn test_escape_sequence_neutralised() {
        let shown = literal_text("\x1b[2Jcoffee");
        assert_eq!(shown, "\u{241b}[2Jcoffee");
        assert!(!shown.contains('\x1b'));
    }

    #[test]
    fn test_newline_and_tab_visible() {
        assert_eq!(literal_text("a\nb\tc"), "a\u{240a}b\u{2409}c");
    }

    #[test]
    fn test_delete_and_c1_controls() {
        assert_eq!(literal_text("x\x7fy"), "x\u{2421}y");
        assert_eq!(literal_text("x\u{9b}y"), "x\u{fffd}y");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("coffee", 10), "coffee");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_to_width("coffee beans", 7), "coffee…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("coffee", 0), "");
    }

    proptest! {
        #[test]
        fn prop_literal_text_has_no_controls(s in ".*") {
            let shown = literal_text(&s);
            prop_assert!(!shown.chars().any(|c| c.is_control()));
            prop_assert_eq!(shown.chars().count(), s.chars().count());
        }

        #[test]
        fn prop_printable_text_is_identity(s in "[a-zA-Z0-9 ?!.,'<>&\"]{0,60}") {
            prop_assert_eq!(literal_text(&s), s);
        }

        #[test]
        fn prop_truncate_respects_width(s in "[a-z ]{0,80}", max in 1usize..40) {
            prop_assert!(truncate_to_width(&s, max).width() <= max);
        }
    }
}

/// Help rows as (key, description). An empty key marks a section header,
/// two empty strings a blank line.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "GLOBAL"),
    ("F1", "Toggle this help"),
    ("Ctrl+C", "Quit"),
    ("Ctrl+Y", "Copy suggestions to clipboard"),
    ("Ctrl+E", "Export suggestions as CSV"),
    ("Tab", "Next view (Table / Tree / Questions)"),
    ("Shift+Tab", "Switch focus (Keyword / Results)"),
    ("", ""),
    ("", "KEYWORD"),
    ("Enter", "Search"),
    ("Esc", "Move focus to results"),
    ("", ""),
    ("", "RESULTS"),
    ("1/2/3", "Table / Tree / Questions view"),
    ("h/l/←/→", "Previous / next view"),
    ("j/k/↑/↓", "Scroll, or select a category section"),
    ("Space/Enter", "Expand or collapse the selected section"),
    ("PageDown/Up", "Scroll a page"),
    ("g/G", "Jump to top / bottom"),
    ("y / e", "Copy / export"),
    ("i or /", "Edit keyword"),
    ("q/Esc", "Quit"),
];

pub const HELP_FOOTER: &str = "j/k: scroll | F1/q/Esc: close";

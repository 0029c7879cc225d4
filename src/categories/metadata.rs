//! Category display metadata
//!
//! The single lookup table from category name to icon and color. Categories
//! the table does not know render with `FALLBACK_METADATA`.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMetadata {
    pub name: &'static str,
    pub icon: &'static str,
    /// `#rrggbb`
    pub color: &'static str,
}

pub const CATEGORY_METADATA: &[CategoryMetadata] = &[
    CategoryMetadata { name: "Questions", icon: "❓", color: "#667eea" },
    CategoryMetadata { name: "Prepositions", icon: "🔗", color: "#764ba2" },
    CategoryMetadata { name: "Comparisons", icon: "⚖️", color: "#f093fb" },
    CategoryMetadata { name: "Intent_Based", icon: "🎯", color: "#4facfe" },
    CategoryMetadata { name: "Time_Related", icon: "⏰", color: "#43e97b" },
    CategoryMetadata { name: "Audience_Specific", icon: "👥", color: "#fa709a" },
    CategoryMetadata { name: "Problem_Solving", icon: "🔧", color: "#30cfd0" },
    CategoryMetadata { name: "Feature_Specific", icon: "⚙️", color: "#a8edea" },
    CategoryMetadata { name: "Opinions_Reviews", icon: "⭐", color: "#ffd89b" },
    CategoryMetadata { name: "Cost_Related", icon: "💰", color: "#19547b" },
    CategoryMetadata { name: "Trend_Based", icon: "📈", color: "#f5af19" },
];

pub const FALLBACK_METADATA: CategoryMetadata = CategoryMetadata {
    name: "",
    icon: "📁",
    color: "#9ca3af",
};

/// Look up a category, falling back to the generic entry
pub fn metadata_for(name: &str) -> CategoryMetadata {
    CATEGORY_METADATA
        .iter()
        .find(|m| m.name == name)
        .copied()
        .unwrap_or(FALLBACK_METADATA)
}

/// `Intent_Based` -> `Intent Based`
pub fn display_label(name: &str) -> String {
    name.replace('_', " ")
}

/// Parse a `#rrggbb` color, `None` when malformed
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl CategoryMetadata {
    pub fn terminal_color(&self) -> Color {
        parse_hex_color(self.color).unwrap_or(Color::Gray)
    }
}

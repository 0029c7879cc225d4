//! Category surface: fallback classifier, metadata table, breakdown model
//! and accordion state.

pub mod accordion_state;
pub mod breakdown;
pub mod classifier;
pub mod metadata;

pub use accordion_state::AccordionState;
pub use breakdown::{CategoryBreakdown, CategorySection, EnhancedBreakdown, MetricCard};
pub use classifier::{QuestionGroups, QuestionWord};

mod events;
mod input_state;
mod render;
mod search_flow;
mod state;
mod view_tab;

// Re-export public types
pub use input_state::InputState;
pub use state::{Action, App, Focus};
pub use view_tab::ViewTab;

//! Search submission state machine

mod search_state;

pub use search_state::{SearchPhase, SearchState};

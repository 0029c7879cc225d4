//! User-facing status: the persistent error slot and the transient
//! "Copied!"/"Downloaded!" label swaps on the action controls.

mod error_slot;
mod feedback;

pub use error_slot::ErrorSlot;
pub use feedback::{ActionFeedback, FEEDBACK_DURATION};

use std::time::{Duration, Instant};

use crate::app::Action;

/// How long a swapped label stays before reverting
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Tracks when each action last succeeded
#[derive(Debug, Clone, Default)]
pub struct ActionFeedback {
    copied_at: Option<Instant>,
    exported_at: Option<Instant>,
}

impl ActionFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self, action: Action) {
        self.trigger_at(action, Instant::now());
    }

    pub fn trigger_at(&mut self, action: Action, now: Instant) {
        match action {
            Action::Copy => self.copied_at = Some(now),
            Action::Export => self.exported_at = Some(now),
            Action::Search => {}
        }
    }

    pub fn is_active(&self, action: Action) -> bool {
        self.is_active_at(action, Instant::now())
    }

    pub fn is_active_at(&self, action: Action, now: Instant) -> bool {
        let started = match action {
            Action::Copy => self.copied_at,
            Action::Export => self.exported_at,
            Action::Search => None,
        };
        started.is_some_and(|t| now.saturating_duration_since(t) < FEEDBACK_DURATION)
    }

    /// Label for the control, swapped while feedback is active
    pub fn label_at(&self, action: Action, now: Instant) -> &'static str {
        if self.is_active_at(action, now) {
            action.success_label()
        } else {
            action.label()
        }
    }
}

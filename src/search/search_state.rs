/// Idle -> Searching -> Idle. While searching the submit control is disabled
/// and the loading indicator shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching {
        request_id: u64,
    },
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    phase: SearchPhase,
    /// Incremented per search, used to drop responses that do not belong
    /// to the search currently shown as in flight
    last_request_id: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching { .. })
    }

    /// Loading indicator visibility
    pub fn is_loading(&self) -> bool {
        self.is_searching()
    }

    /// Submit control state
    pub fn is_submit_enabled(&self) -> bool {
        !self.is_searching()
    }

    /// Enter Searching and return the new request id, or `None` if a search
    /// is already in flight
    pub fn start(&mut self) -> Option<u64> {
        if self.is_searching() {
            return None;
        }
        self.last_request_id = self.last_request_id.wrapping_add(1);
        self.phase = SearchPhase::Searching {
            request_id: self.last_request_id,
        };
        Some(self.last_request_id)
    }

    /// Return to Idle if `request_id` is the one in flight. Returns whether
    /// the response should be applied.
    pub fn finish(&mut self, request_id: u64) -> bool {
        match self.phase {
            SearchPhase::Searching { request_id: current } if current == request_id => {
                self.phase = SearchPhase::Idle;
                true
            }
            _ => {
                log::debug!("Dropping stale search response {}", request_id);
                false
            }
        }
    }
}

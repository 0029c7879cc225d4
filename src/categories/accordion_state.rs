/// Expanded/collapsed flags for the category sections, plus the cursor used
/// to pick which section a toggle applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    expanded: Vec<bool>,
    selected: usize,
}

impl AccordionState {
    /// All sections start collapsed
    pub fn new(section_count: usize) -> Self {
        Self {
            expanded: vec![false; section_count],
            selected: 0,
        }
    }

    pub fn reset(&mut self, section_count: usize) {
        *self = Self::new(section_count);
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Flip one section; others are untouched
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.expanded.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected);
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.expanded.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

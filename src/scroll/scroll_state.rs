/// Lines kept between the selected line and the viewport edge
pub const SCROLLOFF: u16 = 2;

/// Vertical scroll position of a view body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page());
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Move the viewport just enough to show `line` with some margin
    pub fn ensure_visible(&mut self, line: u32) {
        if self.viewport_height == 0 {
            return;
        }

        let line = line.min(u16::MAX as u32) as u16;
        let margin = SCROLLOFF.min(self.viewport_height / 2);
        let visible_end = self.offset.saturating_add(self.viewport_height);

        if line < self.offset.saturating_add(margin) {
            self.offset = line.saturating_sub(margin);
        } else if line >= visible_end.saturating_sub(margin) {
            self.offset = line
                .saturating_add(margin)
                .saturating_add(1)
                .saturating_sub(self.viewport_height)
                .min(self.max_offset);
        }
    }

    fn page(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }
}

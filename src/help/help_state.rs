use crate::scroll::ScrollState;

#[derive(Debug, Default)]
pub struct HelpPopupState {
    pub visible: bool,
    pub scroll: ScrollState,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.scroll.reset();
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.scroll.reset();
    }
}

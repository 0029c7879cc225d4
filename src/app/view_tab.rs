/// Result surfaces, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    #[default]
    Table,
    Tree,
    Questions,
}

impl ViewTab {
    pub const ALL: [ViewTab; 3] = [ViewTab::Table, ViewTab::Tree, ViewTab::Questions];

    pub fn title(self) -> &'static str {
        match self {
            ViewTab::Table => "Table",
            ViewTab::Tree => "Tree",
            ViewTab::Questions => "Questions",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ViewTab::Table => 0,
            ViewTab::Tree => 1,
            ViewTab::Questions => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

use std::path::PathBuf;

use super::input_state::InputState;
use super::view_tab::ViewTab;
use crate::api::ApiChannel;
use crate::clipboard::{BackendWriter, ClipboardWriter};
use crate::config::Config;
use crate::help::HelpPopupState;
use crate::model::SearchResult;
use crate::notification::{ActionFeedback, ErrorSlot};
use crate::scroll::ScrollState;
use crate::search::SearchState;
use crate::view::TerminalTemplate;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    ResultsPane,
}

/// User-triggered controls in the action bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    Copy,
    Export,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Search => "Search",
            Action::Copy => "Copy",
            Action::Export => "Export CSV",
        }
    }

    pub fn success_label(self) -> &'static str {
        match self {
            Action::Search => "Search",
            Action::Copy => "Copied!",
            Action::Export => "Downloaded!",
        }
    }
}

/// Application state
pub struct App {
    pub input: InputState,
    pub focus: Focus,
    pub view: ViewTab,
    pub search: SearchState,
    /// Last successful search, replaced by the next one
    pub result: Option<SearchResult>,
    pub template: TerminalTemplate,
    pub results_visible: bool,
    pub errors: ErrorSlot,
    pub feedback: ActionFeedback,
    pub scroll: ScrollState,
    pub help: HelpPopupState,
    pub api: ApiChannel,
    pub clipboard: Box<dyn ClipboardWriter>,
    pub export_dir: PathBuf,
    pub frame_count: u64,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, api: ApiChannel) -> Self {
        Self {
            input: InputState::new(),
            focus: Focus::InputField,
            view: ViewTab::default(),
            search: SearchState::new(),
            result: None,
            template: TerminalTemplate::new(),
            results_visible: false,
            errors: ErrorSlot::new(),
            feedback: ActionFeedback::new(),
            scroll: ScrollState::new(),
            help: HelpPopupState::new(),
            api,
            clipboard: Box::new(BackendWriter::new(config.clipboard.backend)),
            export_dir: config.export.directory(),
            frame_count: 0,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn keyword(&self) -> &str {
        self.input.keyword()
    }

    /// Number of suggestions in the shown result
    pub fn result_count(&self) -> usize {
        self.template.result_count
    }

    pub fn select_view(&mut self, view: ViewTab) {
        if self.view != view {
            self.view = view;
            self.scroll.reset();
        }
    }
}

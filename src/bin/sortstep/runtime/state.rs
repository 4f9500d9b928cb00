use sortstep::State;

use crate::config::AppConfig;
use crate::input::InputBuffer;
use crate::terminal::TerminalCapabilities;

use super::overlay::OverlayState;
use super::selection::LogSelection;

pub struct AppState {
    pub config: AppConfig,
    pub playback: State,
    pub input: InputBuffer,
    pub selection: LogSelection,
    pub overlay: OverlayState,
    pub focus: Focus,
    pub terminal_size: (u16, u16),
    pub terminal_caps: TerminalCapabilities,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig, terminal_caps: TerminalCapabilities) -> Self {
        let input = config.playback.default_input.clone();
        Self {
            playback: State::new(input.as_str()),
            input: InputBuffer::new(input),
            config,
            selection: LogSelection::default(),
            overlay: OverlayState::None,
            focus: Focus::Log,
            terminal_size: (0, 0),
            terminal_caps,
            should_quit: false,
        }
    }

    /// Number of rows currently shown in the log view.
    pub fn revealed_rows(&self) -> usize {
        self.playback.revealed().len()
    }

    /// Row highlighted in the log view, if any row is shown.
    pub fn selected_row(&self) -> Option<usize> {
        self.selection.resolve(self.revealed_rows())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Focus {
    Input,
    Log,
}
